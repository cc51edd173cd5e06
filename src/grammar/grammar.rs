use indexmap::IndexSet;

use super::{symbol::is_epsilon_token, GrammarError, Symbol, END_MARK};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    lhs: String,
    rhs: Vec<Symbol>,
}

impl Production {
    /// An empty right side is stored as `[Epsilon]`.
    pub fn new(lhs: String, mut rhs: Vec<Symbol>) -> Self {
        if rhs.is_empty() {
            rhs.push(Symbol::Epsilon);
        }
        Self { lhs, rhs }
    }

    pub fn lhs(&self) -> &str {
        self.lhs.as_str()
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }
}

/// A validated grammar. Read-only once built.
#[derive(Debug, Clone)]
pub struct Grammar {
    nonterminals: IndexSet<String>,
    start: String,
    productions: Vec<Production>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.nonterminals.iter().map(|s| s.as_str())
    }

    pub fn start(&self) -> &str {
        self.start.as_str()
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn productions_of<'a>(&'a self, nt: &'a str) -> impl Iterator<Item = &'a Production> {
        self.productions.iter().filter(move |p| p.lhs == nt)
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.nonterminals.contains(symbol)
    }

    pub fn is_epsilon(&self, symbol: &str) -> bool {
        is_epsilon_token(symbol)
    }

    pub fn classify(&self, token: &str) -> Symbol {
        classify(&self.nonterminals, token)
    }
}

fn classify(nonterminals: &IndexSet<String>, token: &str) -> Symbol {
    if is_epsilon_token(token) {
        Symbol::Epsilon
    } else if token == END_MARK {
        Symbol::EndMarker
    } else if nonterminals.contains(token) {
        Symbol::NonTerminal(token.to_string())
    } else {
        Symbol::Terminal(token.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    nonterminals: IndexSet<String>,
    start: Option<String>,
    // Raw right-side tokens; classified in `build` against the final
    // non-terminal set.
    productions: Vec<(String, Vec<String>)>,
    // LHS of the last accepted line, for `|` continuation lines.
    pub(super) previous_left: Option<String>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str) -> &mut Self {
        self.nonterminals.insert(name.to_string());
        self
    }

    pub fn start(&mut self, name: &str) -> &mut Self {
        self.start = Some(name.to_string());
        self
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.nonterminals.contains(symbol)
    }

    pub fn add_production(&mut self, lhs: &str, rhs: &[&str]) -> Result<(), GrammarError> {
        if lhs.is_empty() {
            return Err(GrammarError::malformed("empty left side"));
        }
        if !self.nonterminals.contains(lhs) {
            return Err(GrammarError::malformed(format!(
                "unknown left side \"{}\"",
                lhs
            )));
        }
        self.productions.push((
            lhs.to_string(),
            rhs.iter().map(|token| token.to_string()).collect(),
        ));
        Ok(())
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let start = match self.start {
            Some(start) => start,
            None => self
                .nonterminals
                .first()
                .cloned()
                .ok_or(GrammarError::NoNonTerminals)?,
        };
        if self.nonterminals.is_empty() {
            return Err(GrammarError::NoNonTerminals);
        }
        if !self.nonterminals.contains(&start) {
            return Err(GrammarError::UnknownStartSymbol(start));
        }
        let productions = self
            .productions
            .into_iter()
            .map(|(lhs, rhs)| {
                let rhs = rhs
                    .iter()
                    .map(|token| classify(&self.nonterminals, token))
                    .collect();
                Production::new(lhs, rhs)
            })
            .collect();
        Ok(Grammar {
            nonterminals: self.nonterminals,
            start,
            productions,
        })
    }
}
