use super::{Grammar, Symbol, SymbolSet, SymbolSetMap};

/// FIRST and FOLLOW sets of every declared non-terminal.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub first: SymbolSetMap,
    pub follow: SymbolSetMap,
}

impl Analysis {
    pub fn first(&self, nt: &str) -> Option<&SymbolSet> {
        self.first.get(nt)
    }

    pub fn follow(&self, nt: &str) -> Option<&SymbolSet> {
        self.follow.get(nt)
    }

    pub fn is_nullable(&self, nt: &str) -> bool {
        self.first.contains(nt, &Symbol::Epsilon)
    }
}

impl Grammar {
    pub fn analyze(&self) -> Analysis {
        let first = self.first_sets();
        let follow = self.follow_sets(&first);
        Analysis { first, follow }
    }
}
