use std::{fs, io::Read};

use anyhow::{bail, Context};
use first_follow::GrammarBuilder;

fn print_help() {
    println!("Usage: first-follow outputs [options] [grammar file]");
    println!("outputs:");
    println!("  prod: Productions");
    println!("  first: FIRST sets");
    println!("  follow: FOLLOW sets");
    println!("  ff: Nullable, FIRST and FOLLOW table");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
    println!("  -n \"A B C\": Declare the non-terminals; productions of other symbols are skipped");
    println!("  -s S: Start symbol (default: first non-terminal)");
    println!("grammar lines look like `A -> a B | eps`; use RUST_LOG=trace to watch the fixed point");
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

#[derive(Debug, PartialEq)]
struct Options<'a> {
    outputs: Vec<&'a str>,
    output_format: OutputFormat,
    nonterminals: Option<&'a str>,
    start: Option<&'a str>,
    file: Option<&'a str>,
}

/// `Ok(None)` means the usage should be printed instead.
fn parse_args(args: &[String]) -> anyhow::Result<Option<Options<'_>>> {
    let mut outputs: Vec<&str> = Vec::new();
    let mut i: usize = 0;
    while i < args.len() && ["prod", "first", "follow", "ff"].contains(&args[i].as_str()) {
        outputs.push(args[i].as_str());
        i += 1;
    }

    let mut output_format = OutputFormat::Plain;
    let mut nonterminals: Option<&str> = None;
    let mut start: Option<&str> = None;

    while i < args.len() && args[i].starts_with('-') {
        match args[i].as_str() {
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::JSON,
            flag @ ("-n" | "-s") => {
                i += 1;
                let value = match args.get(i) {
                    Some(value) => value.as_str(),
                    None => bail!("{} needs a value", flag),
                };
                if flag == "-n" {
                    nonterminals = Some(value);
                } else {
                    start = Some(value);
                }
            }
            // -h, --help and unknown flags
            _ => return Ok(None),
        }
        i += 1;
    }

    if i + 1 < args.len() || outputs.is_empty() {
        return Ok(None);
    }

    Ok(Some(Options {
        outputs,
        output_format,
        nonterminals,
        start,
        file: args.get(i).map(|s| s.as_str()),
    }))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let Options {
        outputs,
        output_format,
        nonterminals,
        start,
        file,
    } = match parse_args(&args)? {
        Some(options) => options,
        None => {
            print_help();
            return Ok(());
        }
    };

    let input: String = match file {
        Some(file) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read grammar file {}", file))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read grammar from stdin")?;
            input
        }
    };

    let mut builder = GrammarBuilder::new();
    match nonterminals {
        Some(nonterminals) => {
            for nt in nonterminals.split_whitespace() {
                builder.declare(nt);
            }
        }
        None => {
            builder.declare_left_sides(&input);
        }
    }
    if let Some(start) = start {
        builder.start(start);
    }

    let errors = builder.add_lines(&input);
    if nonterminals.is_some() {
        for e in &errors {
            eprintln!("[{}]", e);
        }
    } else if let Some(e) = errors.into_iter().next() {
        return Err(e.into());
    }
    let g = builder.build()?;

    let analysis = g.analyze();

    for output in outputs {
        let text = if output == "prod" {
            let t = g.to_production_output_vec();
            match output_format {
                OutputFormat::Plain => t.to_plaintext(),
                OutputFormat::LaTeX => t.to_latex(),
                OutputFormat::JSON => t.to_json()?,
            }
        } else {
            let t = g.to_non_terminal_output_vec(&analysis);
            match (output_format, output) {
                (OutputFormat::Plain, "first") => t.to_first_plaintext(),
                (OutputFormat::Plain, "follow") => t.to_follow_plaintext(),
                (OutputFormat::Plain, _) => t.to_plaintext(),
                (OutputFormat::LaTeX, _) => t.to_latex(),
                (OutputFormat::JSON, _) => t.to_json()?,
            }
        };
        println!("{}", text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_flag_prints_usage() {
        let a = args(&["ff", "-x", "grammar.txt"]);
        assert_eq!(parse_args(&a).unwrap(), None);
        let a = args(&["ff", "-j", "-x"]);
        assert_eq!(parse_args(&a).unwrap(), None);
    }

    #[test]
    fn help_prints_usage() {
        assert_eq!(parse_args(&args(&["ff", "-h"])).unwrap(), None);
        assert_eq!(parse_args(&args(&["-j"])).unwrap(), None);
    }

    #[test]
    fn known_flags() {
        let a = args(&["first", "follow", "-j", "-n", "S A", "-s", "A", "g.txt"]);
        let options = parse_args(&a).unwrap().unwrap();
        assert_eq!(options.outputs, vec!["first", "follow"]);
        assert_eq!(options.output_format, OutputFormat::JSON);
        assert_eq!(options.nonterminals, Some("S A"));
        assert_eq!(options.start, Some("A"));
        assert_eq!(options.file, Some("g.txt"));

        let a = args(&["prod"]);
        let options = parse_args(&a).unwrap().unwrap();
        assert_eq!(options.file, None);
    }

    #[test]
    fn flag_without_value() {
        assert!(parse_args(&args(&["ff", "-s"])).is_err());
    }
}
