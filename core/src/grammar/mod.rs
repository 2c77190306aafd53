//! Field grammars and the dispatcher that picks one per field.
//!
//! A field's raw text is offered to each grammar in the fixed priority order
//! [`GrammarKind::PRIORITY`]; the first whose [`Grammar::matches`] accepts the
//! text expands it. Matching is purely syntactic and never looks at bounds;
//! bounds validation happens during [`Grammar::expand`].

pub mod list;
pub mod range;
pub mod step;
pub mod wildcard;

use tracing::debug;

use crate::bounds::FieldBounds;
use crate::error::{CronError, Result};

pub use list::ListGrammar;
pub use range::RangeGrammar;
pub use step::StepGrammar;
pub use wildcard::WildcardGrammar;

/// The supported field syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarKind {
    /// `*`
    Wildcard,
    /// `a-b`
    Range,
    /// `a,b,c`
    List,
    /// `*/n` or `a/n`
    Step,
}

impl GrammarKind {
    /// Dispatch order. Must not change: callers rely on it being fixed.
    pub const PRIORITY: [GrammarKind; 4] = [
        GrammarKind::Wildcard,
        GrammarKind::Range,
        GrammarKind::List,
        GrammarKind::Step,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GrammarKind::Wildcard => "wildcard",
            GrammarKind::Range => "range",
            GrammarKind::List => "list",
            GrammarKind::Step => "step",
        }
    }
}

/// A single field syntax bound to one pattern and one field's bounds.
pub trait Grammar {
    fn kind(&self) -> GrammarKind;

    /// Syntactic check only. Never fails and never consults the bounds.
    fn matches(&self) -> bool;

    /// Validates against the bounds and produces the space-separated values.
    ///
    /// Callers are expected to check [`Grammar::matches`] first.
    fn expand(&self) -> Result<String>;
}

/// Returns the grammar that would handle `pattern`, if any.
///
/// # Examples
///
/// ```
/// use cron_expand_core::{FieldBounds, GrammarKind, recognize};
///
/// let minute = FieldBounds::new(0, 59).unwrap();
/// assert_eq!(recognize("*/5", minute), Some(GrammarKind::Step));
/// assert_eq!(recognize("1,2", minute), Some(GrammarKind::List));
/// assert_eq!(recognize("MON", minute), None);
/// ```
pub fn recognize(pattern: &str, bounds: FieldBounds) -> Option<GrammarKind> {
    with_grammars(pattern, bounds, |grammars| {
        grammars
            .iter()
            .find(|grammar| grammar.matches())
            .map(|grammar| grammar.kind())
    })
}

/// Expands one field's raw text using the first matching grammar.
///
/// Fails with [`CronError::NoGrammarMatch`] when no grammar accepts the text.
///
/// # Examples
///
/// ```
/// use cron_expand_core::{FieldBounds, expand_field};
///
/// let hour = FieldBounds::new(0, 23).unwrap();
/// assert_eq!(expand_field("9-12", hour).unwrap(), "9 10 11 12");
/// assert!(expand_field("9-30", hour).is_err());
/// ```
pub fn expand_field(pattern: &str, bounds: FieldBounds) -> Result<String> {
    with_grammars(pattern, bounds, |grammars| {
        for grammar in grammars {
            if grammar.matches() {
                debug!(
                    grammar = grammar.kind().name(),
                    pattern, "field grammar matched"
                );
                return grammar.expand();
            }
        }
        Err(CronError::NoGrammarMatch {
            pattern: pattern.to_string(),
        })
    })
}

fn with_grammars<T>(
    pattern: &str,
    bounds: FieldBounds,
    visit: impl FnOnce(&[&dyn Grammar]) -> T,
) -> T {
    let wildcard = WildcardGrammar::new(pattern, bounds);
    let range = RangeGrammar::new(pattern, bounds);
    let list = ListGrammar::new(pattern, bounds);
    let step = StepGrammar::new(pattern, bounds);
    let grammars: [&dyn Grammar; 4] = [&wildcard, &range, &list, &step];
    visit(&grammars)
}

/// Parses a numeric token as a signed integer.
pub(crate) fn parse_number(token: &str) -> Option<i64> {
    token.parse().ok()
}
