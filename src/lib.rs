extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{Analysis, Grammar, GrammarBuilder, GrammarError, Symbol, SymbolSetMap};

#[wasm_bindgen]
pub fn first_follow_to_json(grammar: &str) -> String {
    let g = crate::Grammar::parse(grammar);
    let result = match g {
        Ok(g) => {
            let analysis = g.analyze();
            g.to_non_terminal_output_vec(&analysis).to_json()
        }
        Err(e) => Ok(serde_json::json!({ "error": e.to_string() }).to_string()),
    };
    result.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

#[cfg(test)]
mod parse_tests {
    use crate::{Grammar, GrammarError, Symbol};

    fn nt(name: &str) -> Symbol {
        Symbol::NonTerminal(name.to_string())
    }

    fn t(name: &str) -> Symbol {
        Symbol::Terminal(name.to_string())
    }

    #[test]
    fn simple_parse() {
        let g = Grammar::parse("S -> a").unwrap();

        assert_eq!(g.start(), "S");
        assert!(g.is_nonterminal("S"));
        assert!(!g.is_nonterminal("a"));
        assert_eq!(g.productions()[0].lhs(), "S");
        assert_eq!(g.productions()[0].rhs(), &[t("a")]);
    }

    #[test]
    fn simple_parse_with_space() {
        let g = Grammar::parse("  S -> a ").unwrap();
        assert_eq!(g.productions()[0].rhs(), &[t("a")]);
    }

    #[test]
    fn simple_parse_with_space_and_newline() {
        let g = Grammar::parse("  S -> a \n | b c").unwrap();

        let rights: Vec<&[Symbol]> = g.productions_of("S").map(|p| p.rhs()).collect();
        assert_eq!(rights, vec![&[t("a")][..], &[t("b"), t("c")][..]]);
    }

    #[test]
    fn later_left_sides_are_nonterminals() {
        let g = Grammar::parse("S -> A b\nA -> a |").unwrap();
        assert_eq!(g.productions()[0].rhs(), &[nt("A"), t("b")]);
        assert_eq!(g.productions()[2].rhs(), &[Symbol::Epsilon]);
    }

    #[test]
    fn empty_parse() {
        assert_eq!(
            Grammar::parse("  \n  ").unwrap_err(),
            GrammarError::NoNonTerminals
        );
    }

    #[test]
    #[should_panic]
    fn two_rightarrows_parse() {
        let _g = Grammar::parse("S -> a -> b").unwrap();
    }

    #[test]
    #[should_panic]
    fn no_left_parse() {
        let _g = Grammar::parse("-> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn no_previous_left_parse() {
        let _g = Grammar::parse("| a b\n S -> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn left_contain_space() {
        let _g = Grammar::parse("S a S -> x").unwrap();
    }

    #[test]
    fn rejected_line_reports_line_number() {
        let e = Grammar::parse("S -> a\nS b").unwrap_err();
        assert_eq!(
            e,
            GrammarError::MalformedProduction {
                line: Some(2),
                reason: "missing \"->\"".to_string()
            }
        );
        assert_eq!(e.to_string(), "Line 2: malformed production: missing \"->\"");
    }

    #[test]
    fn declared_builder_skips_unknown_left_side() {
        let mut b = Grammar::builder();
        b.declare("S").declare("A").start("S");
        let errors = b.add_lines("S -> A\nX -> a\n | b\nA -> a");
        // the continuation after the rejected line is rejected as well
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, GrammarError::MalformedProduction { .. })));
        let g = b.build().unwrap();
        assert_eq!(g.productions().len(), 2);
        assert!(g.productions().iter().all(|p| p.lhs() != "X"));
    }

    #[test]
    fn add_line_counts_alternatives() {
        let mut b = Grammar::builder();
        b.declare("S");
        assert_eq!(b.add_line("S -> a | b | "), Ok(3));
        assert_eq!(b.add_line("   "), Ok(0));
        assert_eq!(b.add_line("| c"), Ok(1));
    }

    #[test]
    fn json_entry_point() {
        let json = crate::first_follow_to_json("S -> A\nA -> eps");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["data"][0]["first"], serde_json::json!(["eps"]));
        assert_eq!(v["data"][1]["follow"], serde_json::json!(["$"]));

        let json = crate::first_follow_to_json("-> a");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().contains("empty left side"));
    }
}

#[cfg(test)]
mod first_follow_tests {
    use crate::{Analysis, Grammar, Symbol};

    fn names(analysis: &Analysis, follow: bool, nt: &str) -> Vec<String> {
        let set = if follow {
            analysis.follow(nt)
        } else {
            analysis.first(nt)
        };
        let mut v: Vec<&Symbol> = set.unwrap().iter().collect();
        v.sort();
        v.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn optional_prefix_scenario() {
        let g = Grammar::parse("S -> A B\nA -> a | eps\nB -> b").unwrap();
        let a = g.analyze();
        assert_eq!(names(&a, false, "A"), ["a", "eps"]);
        assert_eq!(names(&a, false, "B"), ["b"]);
        assert_eq!(names(&a, false, "S"), ["a", "b"]);
        assert_eq!(names(&a, true, "A"), ["b"]);
        assert_eq!(names(&a, true, "B"), ["$"]);
        assert_eq!(names(&a, true, "S"), ["$"]);
    }

    #[test]
    fn epsilon_only_scenario() {
        let g = Grammar::parse("S -> A\nA -> eps").unwrap();
        let a = g.analyze();
        assert_eq!(names(&a, false, "A"), ["eps"]);
        assert_eq!(names(&a, false, "S"), ["eps"]);
        assert_eq!(names(&a, true, "A"), ["$"]);
        assert_eq!(names(&a, true, "S"), ["$"]);
    }

    #[test]
    fn mutually_nullable_scenario() {
        let g = Grammar::parse("S -> A\nA -> B\nB -> A | eps").unwrap();
        let a = g.analyze();
        for nt in ["S", "A", "B"] {
            assert_eq!(names(&a, false, nt), ["eps"]);
        }
    }

    #[test]
    fn unknown_left_side_scenario() {
        let mut b = Grammar::builder();
        b.declare("S");
        assert!(b.add_line("X -> a").is_err());
        assert!(b.add_line("S -> b").is_ok());
        let g = b.build().unwrap();
        assert_eq!(g.productions().len(), 1);
        assert_eq!(names(&g.analyze(), false, "S"), ["b"]);
    }
}
