use log::debug;

use super::{Grammar, Symbol, SymbolSet, SymbolSetMap};

impl Grammar {
    /// FIRST of a symbol string given the current FIRST sets. Contains
    /// epsilon iff the whole string can derive empty.
    pub fn first_of_sequence(&self, first: &SymbolSetMap, symbols: &[Symbol]) -> SymbolSet {
        let mut result = SymbolSet::new();
        for symbol in symbols {
            match symbol {
                Symbol::Epsilon => {
                    result.insert(Symbol::Epsilon);
                    return result;
                }
                Symbol::NonTerminal(nt) => {
                    let nt_first = match first.get(nt) {
                        Some(set) => set,
                        None => return result,
                    };
                    result.extend(nt_first.iter().filter(|s| !s.is_epsilon()).cloned());
                    if !nt_first.contains(&Symbol::Epsilon) {
                        return result;
                    }
                }
                Symbol::Terminal(_) | Symbol::EndMarker => {
                    result.insert(symbol.clone());
                    return result;
                }
            }
        }
        result.insert(Symbol::Epsilon);
        result
    }

    /// One full pass over every production. Returns whether any FIRST set grew.
    pub fn first_pass(&self, first: &mut SymbolSetMap) -> bool {
        let mut changed = false;
        for production in self.productions() {
            let found = self.first_of_sequence(first, production.rhs());
            changed |= first.extend(production.lhs(), found);
        }
        changed
    }

    pub fn first_sets(&self) -> SymbolSetMap {
        let mut first = SymbolSetMap::new("FIRST", self.nonterminals());
        let mut passes = 1;
        while self.first_pass(&mut first) {
            passes += 1;
        }
        debug!(
            "FIRST sets converged after {} passes ({} symbols)",
            passes,
            first.total_len()
        );
        first
    }
}
