//! `a-b` — every value from `a` to `b` inclusive.

use std::sync::LazyLock;

use regex::Regex;

use super::{Grammar, GrammarKind, parse_number};
use crate::bounds::FieldBounds;
use crate::error::{CronError, Result};
use crate::render::render_range;

static RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+-[0-9]+$").expect("static regex must compile"));

pub struct RangeGrammar<'a> {
    pattern: &'a str,
    bounds: FieldBounds,
}

impl<'a> RangeGrammar<'a> {
    pub fn new(pattern: &'a str, bounds: FieldBounds) -> Self {
        Self { pattern, bounds }
    }

    fn malformed(&self) -> CronError {
        CronError::MalformedRange {
            pattern: self.pattern.to_string(),
        }
    }
}

impl Grammar for RangeGrammar<'_> {
    fn kind(&self) -> GrammarKind {
        GrammarKind::Range
    }

    fn matches(&self) -> bool {
        RANGE_PATTERN.is_match(self.pattern)
    }

    fn expand(&self) -> Result<String> {
        let (start_part, end_part) = self
            .pattern
            .split_once('-')
            .ok_or_else(|| self.malformed())?;
        let start = parse_number(start_part).ok_or_else(|| self.malformed())?;
        let end = parse_number(end_part).ok_or_else(|| self.malformed())?;

        if start > end {
            return Err(CronError::InvertedRange {
                pattern: self.pattern.to_string(),
                start,
                end,
            });
        }

        // start <= end here, so checking both endpoints covers the whole range.
        let start = self.bounds.check(start, self.pattern)?;
        let end = self.bounds.check(end, self.pattern)?;
        render_range(start, end)
    }
}
