//! Expression parsing: tokenizes a full line and expands each time field.

use serde::Serialize;
use tracing::debug;

use crate::bounds::{BoundsTable, FieldName};
use crate::error::{CronError, Result};
use crate::grammar::expand_field;

/// Fully expanded cron expression.
///
/// Each time field holds its values as space-separated text. The command is
/// carried through exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExpression {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    pub command: String,
}

impl ParsedExpression {
    /// Expanded text for one time field.
    pub fn field(&self, field: FieldName) -> &str {
        match field {
            FieldName::Minute => &self.minute,
            FieldName::Hour => &self.hour,
            FieldName::DayOfMonth => &self.day_of_month,
            FieldName::Month => &self.month,
            FieldName::DayOfWeek => &self.day_of_week,
        }
    }
}

/// Parses cron expressions against a fixed [`BoundsTable`].
///
/// # Examples
///
/// ```
/// use cron_expand_core::CronParser;
///
/// let parser = CronParser::default();
/// let parsed = parser.parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert_eq!(parsed.minute, "0 15 30 45");
/// assert_eq!(parsed.day_of_month, "1 15");
/// assert_eq!(parsed.command, "/usr/bin/find");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CronParser {
    bounds: BoundsTable,
}

impl CronParser {
    pub fn new(bounds: BoundsTable) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &BoundsTable {
        &self.bounds
    }

    /// Parses argument-style input, which must hold exactly one expression.
    pub fn parse_args<S: AsRef<str>>(&self, args: &[S]) -> Result<ParsedExpression> {
        match args {
            [expression] => self.parse(expression.as_ref()),
            _ => Err(CronError::InvalidArgumentCount { count: args.len() }),
        }
    }

    /// Parses one expression line.
    ///
    /// The line is split on single spaces, so repeated spaces produce empty
    /// tokens and fail the token count check.
    pub fn parse(&self, line: &str) -> Result<ParsedExpression> {
        let tokens: Vec<&str> = line.split(' ').collect();
        let [minute, hour, day_of_month, month, day_of_week, command] = tokens[..] else {
            return Err(CronError::MalformedExpression {
                found: tokens.len(),
            });
        };

        Ok(ParsedExpression {
            minute: self.expand(FieldName::Minute, minute)?,
            hour: self.expand(FieldName::Hour, hour)?,
            day_of_month: self.expand(FieldName::DayOfMonth, day_of_month)?,
            month: self.expand(FieldName::Month, month)?,
            day_of_week: self.expand(FieldName::DayOfWeek, day_of_week)?,
            command: command.to_string(),
        })
    }

    fn expand(&self, field: FieldName, raw: &str) -> Result<String> {
        let expanded = expand_field(raw, self.bounds.get(field))?;
        debug!(%field, raw, expanded = %expanded, "expanded field");
        Ok(expanded)
    }
}

/// Parses argument-style input with the standard bounds.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<ParsedExpression> {
    CronParser::default().parse_args(args)
}

/// Parses one expression line with the standard bounds.
pub fn parse(line: &str) -> Result<ParsedExpression> {
    CronParser::default().parse(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::FieldBounds;

    #[test]
    fn test_parse_maps_fields_positionally() {
        let parsed = parse("0 1 2 3 4 cmd").unwrap();
        assert_eq!(parsed.minute, "0");
        assert_eq!(parsed.hour, "1");
        assert_eq!(parsed.day_of_month, "2");
        assert_eq!(parsed.month, "3");
        assert_eq!(parsed.day_of_week, "4");
        assert_eq!(parsed.command, "cmd");
    }

    #[test]
    fn test_parse_uses_field_bounds() {
        let parsed = parse("* * * * * cmd").unwrap();
        assert_eq!(parsed.hour.split(' ').count(), 24);
        assert!(parsed.day_of_month.starts_with("1 2 "));
        assert!(parsed.month.ends_with(" 11 12"));
        assert_eq!(parsed.field(FieldName::DayOfWeek), "0 1 2 3 4 5 6 7");
    }

    #[test]
    fn test_parse_wrong_token_count() {
        assert_eq!(
            parse("* * * * *"),
            Err(CronError::MalformedExpression { found: 5 })
        );
        assert_eq!(
            parse("* * * * * cmd --flag"),
            Err(CronError::MalformedExpression { found: 7 })
        );
        assert_eq!(parse(""), Err(CronError::MalformedExpression { found: 1 }));
    }

    #[test]
    fn test_parse_double_space_is_malformed() {
        assert!(matches!(
            parse("*  * * * * cmd"),
            Err(CronError::MalformedExpression { found: 7 })
        ));
    }

    #[test]
    fn test_parse_command_is_not_validated() {
        let parsed = parse("* * * * * */5").unwrap();
        assert_eq!(parsed.command, "*/5");
    }

    #[test]
    fn test_parse_first_failing_field_aborts() {
        assert!(matches!(
            parse("0 24 0 * * cmd"),
            Err(CronError::OutOfBounds { value: 24, upper: 23, .. })
        ));
    }

    #[test]
    fn test_parse_unknown_syntax() {
        assert!(matches!(
            parse("* * * JAN * cmd"),
            Err(CronError::NoGrammarMatch { pattern }) if pattern == "JAN"
        ));
    }

    #[test]
    fn test_parse_args_requires_single_expression() {
        let empty: [&str; 0] = [];
        assert_eq!(
            parse_args(&empty),
            Err(CronError::InvalidArgumentCount { count: 0 })
        );
        assert_eq!(
            parse_args(&["* * * * * a", "* * * * * b"]),
            Err(CronError::InvalidArgumentCount { count: 2 })
        );
        assert_eq!(
            parse_args(&[String::from("1 * * * * a")]).unwrap().minute,
            "1"
        );
    }

    #[test]
    fn test_parse_args_checks_count_before_tokens() {
        assert!(matches!(
            parse_args(&["bad", "input"]),
            Err(CronError::InvalidArgumentCount { .. })
        ));
        assert!(matches!(
            parse_args(&["bad"]),
            Err(CronError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn test_custom_bounds_table() {
        let table = BoundsTable::standard()
            .with_field(FieldName::DayOfWeek, FieldBounds::new(0, 6).unwrap());
        let parser = CronParser::new(table);
        assert_eq!(parser.bounds().get(FieldName::DayOfWeek).upper(), 6);
        assert_eq!(
            parser.parse("0 0 1 1 * cmd").unwrap().day_of_week,
            "0 1 2 3 4 5 6"
        );
        assert!(parser.parse("0 0 1 1 7 cmd").is_err());
    }
}
