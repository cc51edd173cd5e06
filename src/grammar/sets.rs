use indexmap::{IndexMap, IndexSet};
use log::trace;

use super::Symbol;

/// Insertion-ordered, so reports list symbols in the order they were found.
pub type SymbolSet = IndexSet<Symbol>;

/// One set per non-terminal. Sets only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSetMap {
    label: &'static str,
    sets: IndexMap<String, SymbolSet>,
}

impl SymbolSetMap {
    pub fn new<'a>(label: &'static str, nonterminals: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            label,
            sets: nonterminals
                .into_iter()
                .map(|nt| (nt.to_string(), SymbolSet::new()))
                .collect(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn get(&self, nt: &str) -> Option<&SymbolSet> {
        self.sets.get(nt)
    }

    pub fn contains(&self, nt: &str, symbol: &Symbol) -> bool {
        self.sets.get(nt).map_or(false, |set| set.contains(symbol))
    }

    /// Returns whether `symbol` was new. Inserting for an undeclared
    /// non-terminal is a no-op.
    pub fn insert(&mut self, nt: &str, symbol: Symbol) -> bool {
        match self.sets.get_mut(nt) {
            Some(set) => {
                if set.contains(&symbol) {
                    return false;
                }
                trace!("{}({}) += {}", self.label, nt, symbol);
                set.insert(symbol);
                true
            }
            None => false,
        }
    }

    /// Returns whether any symbol was new.
    pub fn extend(&mut self, nt: &str, symbols: impl IntoIterator<Item = Symbol>) -> bool {
        symbols
            .into_iter()
            .fold(false, |changed, symbol| self.insert(nt, symbol) || changed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolSet)> {
        self.sets.iter().map(|(nt, set)| (nt.as_str(), set))
    }

    /// Total number of symbols over every set.
    pub fn total_len(&self) -> usize {
        self.sets.values().map(|set| set.len()).sum()
    }

    /// True if every set of `other` is contained in the matching set here.
    pub fn is_superset(&self, other: &SymbolSetMap) -> bool {
        other.iter().all(|(nt, theirs)| {
            self.get(nt)
                .map_or(theirs.is_empty(), |ours| theirs.is_subset(ours))
        })
    }
}
