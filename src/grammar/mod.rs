pub mod analysis;
pub mod error;
pub mod first;
pub mod follow;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub mod sets;
pub mod symbol;

pub use analysis::Analysis;
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder, Production};
pub use sets::{SymbolSet, SymbolSetMap};
pub use symbol::Symbol;

pub const EPSILON: &str = "eps";
pub const EPSILON_ALIASES: [&str; 3] = [EPSILON, "ε", "ϵ"];
pub const END_MARK: &str = "$";
