use log::debug;

use super::{Grammar, Symbol, SymbolSetMap};

impl Grammar {
    /// One full pass over every production. `first` must already be at its
    /// fixed point. Returns whether any FOLLOW set grew.
    pub fn follow_pass(&self, first: &SymbolSetMap, follow: &mut SymbolSetMap) -> bool {
        let mut changed = false;
        for production in self.productions() {
            let rhs = production.rhs();
            for (i, symbol) in rhs.iter().enumerate() {
                let b = match symbol {
                    Symbol::NonTerminal(b) => b.as_str(),
                    _ => continue,
                };

                let mut rest_nullable = true;
                for s in &rhs[i + 1..] {
                    match s {
                        Symbol::Epsilon => {}
                        Symbol::NonTerminal(c) => {
                            let Some(c_first) = first.get(c) else {
                                rest_nullable = false;
                                break;
                            };
                            changed |= follow.extend(
                                b,
                                c_first.iter().filter(|s| !s.is_epsilon()).cloned(),
                            );
                            if !c_first.contains(&Symbol::Epsilon) {
                                rest_nullable = false;
                                break;
                            }
                        }
                        Symbol::Terminal(_) | Symbol::EndMarker => {
                            changed |= follow.insert(b, s.clone());
                            rest_nullable = false;
                            break;
                        }
                    }
                }

                if rest_nullable {
                    let inherited = follow
                        .get(production.lhs())
                        .cloned()
                        .unwrap_or_default();
                    changed |= follow.extend(b, inherited);
                }
            }
        }
        changed
    }

    pub fn follow_sets(&self, first: &SymbolSetMap) -> SymbolSetMap {
        let mut follow = SymbolSetMap::new("FOLLOW", self.nonterminals());
        follow.insert(self.start(), Symbol::EndMarker);
        let mut passes = 1;
        while self.follow_pass(first, &mut follow) {
            passes += 1;
        }
        debug!(
            "FOLLOW sets converged after {} passes ({} symbols)",
            passes,
            follow.total_len()
        );
        follow
    }
}
