use std::borrow::Cow;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Analysis, Grammar, Symbol, SymbolSet, EPSILON};

fn tex(s: &str) -> Cow<'_, str> {
    if s == EPSILON {
        Cow::Borrowed("\\epsilon")
    } else {
        escape::tex(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize, multiline: bool) -> String {
        self.rights
            .iter()
            .map(|right| right.join(" "))
            .enumerate()
            .map(|(i, right)| {
                if i == 0 {
                    format!("{:>width$} -> {}", self.left, right, width = left_width)
                } else if multiline {
                    format!("{:>width$}  | {}", "", right, width = left_width)
                } else {
                    format!(" | {}", right)
                }
            })
            .collect::<Vec<_>>()
            .join(if multiline { "\n" } else { "" })
    }

    pub fn to_latex(&self, and_sign: bool) -> String {
        if self.rights.is_empty() {
            return String::new();
        }

        let left = if and_sign {
            format!("{} & \\rightarrow &", escape::tex(self.left))
        } else {
            format!("{} \\rightarrow ", escape::tex(self.left))
        };
        let right = self
            .rights
            .iter()
            .map(|right| right.iter().map(|s| tex(s)).collect::<Vec<_>>().join(" \\ "))
            .collect::<Vec<_>>()
            .join(" \\mid ");

        left + &right
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_max_len = self
            .productions
            .iter()
            .map(|p| p.left.len())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|s| s.to_plaintext(left_max_len, true))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|s| s.to_latex(true)))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Grammar {
    pub fn to_production_output_vec(&self) -> ProductionOutputVec {
        let productions = self
            .nonterminals()
            .map(|left| ProductionOutput {
                left,
                rights: self
                    .productions_of(left)
                    .map(|p| p.rhs().iter().map(|s| s.name()).collect())
                    .collect(),
            })
            .filter(|p| !p.rights.is_empty())
            .collect();
        ProductionOutputVec { productions }
    }
}

#[derive(Debug, Serialize)]
struct NonTerminalOutput<'a> {
    name: &'a str,
    nullable: bool,
    first: Vec<&'a str>,
    follow: Vec<&'a str>,
}

impl NonTerminalOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.name,
            self.nullable,
            self.first.join(", "),
            self.follow.join(", ")
        )
    }

    fn to_latex(&self) -> String {
        fn f(a: &[&str]) -> String {
            a.iter()
                .map(|s| {
                    if *s == EPSILON {
                        Cow::Borrowed("$\\epsilon$")
                    } else {
                        escape::tex(*s)
                    }
                })
                .collect::<Vec<_>>()
                .join(r"\ ")
        }

        format!(
            "{} & {} & {} & {}",
            escape::tex(self.name),
            self.nullable,
            f(&self.first),
            f(&self.follow)
        )
    }
}

fn set_listing(label: &str, name: &str, set: &[&str]) -> String {
    if set.is_empty() {
        format!("{}({}) = {{ }}", label, name)
    } else {
        format!("{}({}) = {{ {} }}", label, name, set.join(", "))
    }
}

#[derive(Debug, Serialize)]
pub struct NonTerminalOutputVec<'a> {
    data: Vec<NonTerminalOutput<'a>>,
}

impl NonTerminalOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// `FIRST(A) = { a, eps }`, one non-terminal per line.
    pub fn to_first_plaintext(&self) -> String {
        std::iter::once("FIRST sets:".to_string())
            .chain(
                self.data
                    .iter()
                    .map(|s| set_listing("FIRST", s.name, &s.first)),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_follow_plaintext(&self) -> String {
        std::iter::once("FOLLOW sets:".to_string())
            .chain(
                self.data
                    .iter()
                    .map(|s| set_listing("FOLLOW", s.name, &s.follow)),
            )
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c|c}\n".to_string()
            + "Symbol & Nullable & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }
}

fn sorted_names(set: Option<&SymbolSet>) -> Vec<&str> {
    let mut symbols: Vec<&Symbol> = set.map(|s| s.iter().collect()).unwrap_or_default();
    symbols.sort();
    symbols.into_iter().map(|s| s.name()).collect()
}

impl Grammar {
    pub fn to_non_terminal_output_vec<'a>(
        &'a self,
        analysis: &'a Analysis,
    ) -> NonTerminalOutputVec<'a> {
        let data = self
            .nonterminals()
            .map(|name| NonTerminalOutput {
                name,
                nullable: analysis.is_nullable(name),
                first: sorted_names(analysis.first(name)),
                follow: sorted_names(analysis.follow(name)),
            })
            .collect();
        NonTerminalOutputVec { data }
    }
}
