//! `*` — every value in the field's bounds.

use super::{Grammar, GrammarKind};
use crate::bounds::FieldBounds;
use crate::error::{CronError, Result};
use crate::render::render_range;

pub struct WildcardGrammar<'a> {
    pattern: &'a str,
    bounds: FieldBounds,
}

impl<'a> WildcardGrammar<'a> {
    pub fn new(pattern: &'a str, bounds: FieldBounds) -> Self {
        Self { pattern, bounds }
    }
}

impl Grammar for WildcardGrammar<'_> {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Wildcard
    }

    fn matches(&self) -> bool {
        self.pattern == "*"
    }

    fn expand(&self) -> Result<String> {
        if !self.matches() {
            return Err(CronError::UnsupportedPattern {
                pattern: self.pattern.to_string(),
                grammar: self.kind().name(),
            });
        }
        render_range(self.bounds.lower(), self.bounds.upper())
    }
}
