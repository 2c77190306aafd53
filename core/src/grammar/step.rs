//! `*/n` and `a/n` — every `n`th value starting at the lower bound or `a`.
//!
//! Two long-standing quirks are kept for compatibility:
//!
//! - The match predicate is loose: it accepts anything starting with `*` or
//!   ending in `digits/digits`. Inputs that slip through are rejected during
//!   expansion instead.
//! - Generated values stop strictly below the upper bound, so `*/1` over
//!   minutes yields `0..=58`.

use std::sync::LazyLock;

use regex::Regex;

use super::{Grammar, GrammarKind, parse_number};
use crate::bounds::FieldBounds;
use crate::error::{CronError, Result};
use crate::render::render_values;

static STEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*|[0-9]+/[0-9]+$").expect("static regex must compile"));

pub struct StepGrammar<'a> {
    pattern: &'a str,
    bounds: FieldBounds,
}

impl<'a> StepGrammar<'a> {
    pub fn new(pattern: &'a str, bounds: FieldBounds) -> Self {
        Self { pattern, bounds }
    }

    fn number(&self, token: &str) -> Result<i64> {
        parse_number(token).ok_or_else(|| CronError::InvalidNumber {
            pattern: self.pattern.to_string(),
            token: token.to_string(),
        })
    }
}

impl Grammar for StepGrammar<'_> {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Step
    }

    fn matches(&self) -> bool {
        STEP_PATTERN.is_match(self.pattern)
    }

    fn expand(&self) -> Result<String> {
        // Anything past a second slash is ignored.
        let mut parts = self.pattern.split('/');
        let start_part = parts.next().unwrap_or_default();
        let increment_part = parts.next().unwrap_or_default();

        let increment = self.number(increment_part)?;
        let start = if start_part == "*" {
            i64::from(self.bounds.lower())
        } else {
            self.number(start_part)?
        };

        let start = self.bounds.check(start, self.pattern)?;
        if increment <= 0 {
            return Err(CronError::NonPositiveIncrement {
                pattern: self.pattern.to_string(),
                increment,
            });
        }

        let stride = usize::try_from(increment).unwrap_or(usize::MAX);
        Ok(render_values((start..self.bounds.upper()).step_by(stride)))
    }
}
