use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The production was not added. `line` is 1-based when the production
    /// came from grammar text.
    MalformedProduction { line: Option<usize>, reason: String },
    UnknownStartSymbol(String),
    NoNonTerminals,
}

impl GrammarError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        GrammarError::MalformedProduction {
            line: None,
            reason: reason.into(),
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        match self {
            GrammarError::MalformedProduction { reason, .. } => GrammarError::MalformedProduction {
                line: Some(line),
                reason,
            },
            e => e,
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::MalformedProduction {
                line: Some(line),
                reason,
            } => write!(f, "Line {}: malformed production: {}", line, reason),
            GrammarError::MalformedProduction { line: None, reason } => {
                write!(f, "malformed production: {}", reason)
            }
            GrammarError::UnknownStartSymbol(name) => {
                write!(f, "start symbol \"{}\" is not a declared non-terminal", name)
            }
            GrammarError::NoNonTerminals => write!(f, "no non-terminals declared"),
        }
    }
}

impl std::error::Error for GrammarError {}
