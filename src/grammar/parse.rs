use log::warn;

use super::{Grammar, GrammarBuilder, GrammarError};

impl GrammarBuilder {
    /// Adds every alternative of one `A -> x y | z` line, or nothing at all.
    /// Returns the number of productions added.
    pub fn add_line(&mut self, line: &str) -> Result<usize, GrammarError> {
        if line.chars().all(|c| c.is_whitespace()) {
            return Ok(0);
        }

        let (left, rights) = match self.split_line(line) {
            Ok(split) => split,
            Err(e) => {
                self.previous_left = None;
                return Err(e);
            }
        };

        let alternatives: Vec<Vec<&str>> = rights
            .split('|')
            .map(|right| right.split_whitespace().collect())
            .collect();
        for right in &alternatives {
            self.add_production(&left, right)?;
        }

        self.previous_left = Some(left);
        Ok(alternatives.len())
    }

    fn split_line<'a>(&self, line: &'a str) -> Result<(String, &'a str), GrammarError> {
        let parts: Vec<&str> = line.split("->").collect();
        if parts.len() > 2 {
            return Err(GrammarError::malformed("too many \"->\""));
        }
        if parts.len() == 1 {
            let trimmed = parts[0].trim();
            return match (trimmed.strip_prefix('|'), &self.previous_left) {
                (Some(rights), Some(left)) => Ok((left.clone(), rights)),
                (Some(_), None) => Err(GrammarError::malformed("cannot find left side")),
                (None, _) => Err(GrammarError::malformed("missing \"->\"")),
            };
        }

        let left = parts[0].trim();
        if left.is_empty() {
            return Err(GrammarError::malformed("empty left side"));
        }
        if left.split_whitespace().count() != 1 {
            return Err(GrammarError::malformed("left side contains whitespace"));
        }
        if !self.is_nonterminal(left) {
            return Err(GrammarError::malformed(format!(
                "unknown left side \"{}\"",
                left
            )));
        }
        Ok((left.to_string(), parts[1]))
    }

    /// Declares the left side of every `A -> ...` line of `text`.
    pub fn declare_left_sides(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            let mut parts = line.split("->");
            if let (Some(left), Some(_)) = (parts.next(), parts.next()) {
                let left = left.trim();
                if left.split_whitespace().count() == 1 {
                    self.declare(left);
                }
            }
        }
        self
    }

    /// Feeds every line of `text`. Rejected lines are skipped and returned
    /// with their line numbers.
    pub fn add_lines(&mut self, text: &str) -> Vec<GrammarError> {
        let mut errors = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if let Err(e) = self.add_line(line) {
                let e = e.at_line(i + 1);
                warn!("{}, line skipped", e);
                errors.push(e);
            }
        }
        errors
    }
}

impl Grammar {
    /// Parses grammar text, declaring every left side as a non-terminal in
    /// order of appearance. The first one is the start symbol.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        let mut builder = GrammarBuilder::new();
        builder.declare_left_sides(grammar);
        if let Some(e) = builder.add_lines(grammar).into_iter().next() {
            return Err(e);
        }
        builder.build()
    }
}
