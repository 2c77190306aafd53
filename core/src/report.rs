//! Human- and machine-readable rendering of a [`ParsedExpression`].

use crate::bounds::FieldName;
use crate::parser::ParsedExpression;

/// Width the report labels are padded to.
pub const COLUMN_WIDTH: usize = 18;

const COMMAND_LABEL: &str = "Command";

/// Renders the aligned six-line report.
///
/// # Examples
///
/// ```
/// use cron_expand_core::{format_output, parse};
///
/// let parsed = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// let report = format_output(&parsed);
/// assert_eq!(report.lines().next(), Some("Minute             0 15 30 45"));
/// assert_eq!(report.lines().last(), Some("Command            /usr/bin/find"));
/// ```
pub fn format_output(result: &ParsedExpression) -> String {
    FieldName::ALL
        .iter()
        .map(|field| (field.label(), result.field(*field)))
        .chain(std::iter::once((COMMAND_LABEL, result.command.as_str())))
        .map(|(label, value)| format!("{label:<COLUMN_WIDTH$} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the expression as pretty-printed JSON keyed by field.
pub fn format_json(result: &ParsedExpression) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedExpression {
        ParsedExpression {
            minute: "0 15 30 45".to_string(),
            hour: "0".to_string(),
            day_of_month: "1 15".to_string(),
            month: "1 2 3".to_string(),
            day_of_week: "1 2 3 4 5".to_string(),
            command: "/usr/bin/find".to_string(),
        }
    }

    #[test]
    fn test_format_output_layout() {
        let expected = "\
Minute             0 15 30 45
Hour               0
Day of Month       1 15
Month              1 2 3
Day of Week        1 2 3 4 5
Command            /usr/bin/find";
        assert_eq!(format_output(&sample()), expected);
    }

    #[test]
    fn test_format_output_values_share_a_column() {
        let report = format_output(&sample());
        assert!(
            report
                .lines()
                .all(|line| line.len() > COLUMN_WIDTH && &line[COLUMN_WIDTH..=COLUMN_WIDTH] == " ")
        );
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn test_format_json_uses_camel_case_keys() {
        let json = format_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dayOfMonth"], "1 15");
        assert_eq!(value["command"], "/usr/bin/find");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
