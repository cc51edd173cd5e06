use std::fmt;

use super::{END_MARK, EPSILON, EPSILON_ALIASES};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(String),
    Epsilon,
    /// Only ever found inside FOLLOW sets.
    EndMarker,
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::NonTerminal(name) => name.as_str(),
            Symbol::Epsilon => EPSILON,
            Symbol::EndMarker => END_MARK,
        }
    }
}

pub fn is_epsilon_token(token: &str) -> bool {
    EPSILON_ALIASES.contains(&token)
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
