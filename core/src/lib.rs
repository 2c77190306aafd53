//! Cron expression parsing and field expansion.
//!
//! A cron expression is five time fields followed by a command:
//!
//! ```text
//! <minute> <hour> <day-of-month> <month> <day-of-week> <command>
//! ```
//!
//! Each field is expanded into the explicit values it denotes. Four field
//! syntaxes are understood, tried in this order:
//!
//! - `*` — every value in the field's bounds ([`WildcardGrammar`])
//! - `a-b` — an inclusive range ([`RangeGrammar`])
//! - `a,b,c` — an explicit list, order and duplicates preserved ([`ListGrammar`])
//! - `*/n`, `a/n` — every `n`th value, stopping before the upper bound
//!   ([`StepGrammar`])
//!
//! Field bounds come from a [`BoundsTable`]; [`CronParser`] applies them and
//! [`format_output`] renders the aligned report.
//!
//! # Example
//!
//! ```
//! use cron_expand_core::*;
//!
//! let parsed = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! assert_eq!(parsed.minute, "0 15 30 45");
//! assert_eq!(parsed.hour, "0");
//! assert_eq!(parsed.day_of_week, "1 2 3 4 5");
//!
//! let err = parse("60/15 * * * * /usr/bin/find").unwrap_err();
//! assert!(matches!(err, CronError::OutOfBounds { value: 60, .. }));
//! ```

mod bounds;
mod error;
pub mod grammar;
mod parser;
mod render;
mod report;

pub use bounds::{BoundsTable, FieldBounds, FieldName};
pub use error::{CronError, Result};
pub use grammar::{
    Grammar, GrammarKind, ListGrammar, RangeGrammar, StepGrammar, WildcardGrammar, expand_field,
    recognize,
};
pub use parser::{CronParser, ParsedExpression, parse, parse_args};
pub use render::{render_range, render_values};
pub use report::{COLUMN_WIDTH, format_json, format_output};
