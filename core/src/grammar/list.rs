//! `a,b,c` — explicit values, kept in the order given.

use std::sync::LazyLock;

use regex::Regex;

use super::{Grammar, GrammarKind, parse_number};
use crate::bounds::FieldBounds;
use crate::error::{CronError, Result};
use crate::render::render_values;

static LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:,[0-9]+)*$").expect("static regex must compile"));

pub struct ListGrammar<'a> {
    pattern: &'a str,
    bounds: FieldBounds,
}

impl<'a> ListGrammar<'a> {
    pub fn new(pattern: &'a str, bounds: FieldBounds) -> Self {
        Self { pattern, bounds }
    }
}

impl Grammar for ListGrammar<'_> {
    fn kind(&self) -> GrammarKind {
        GrammarKind::List
    }

    fn matches(&self) -> bool {
        LIST_PATTERN.is_match(self.pattern)
    }

    fn expand(&self) -> Result<String> {
        let values = self
            .pattern
            .split(',')
            .map(|token| {
                let value = parse_number(token).ok_or_else(|| CronError::InvalidNumber {
                    pattern: self.pattern.to_string(),
                    token: token.to_string(),
                })?;
                self.bounds.check(value, self.pattern)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(render_values(values))
    }
}
