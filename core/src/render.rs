//! Canonical textual form of expanded value sets.

use crate::error::{CronError, Result};

/// Renders the inclusive sequence `start..=end` as space-separated values.
///
/// # Examples
///
/// ```
/// use cron_expand_core::render_range;
///
/// assert_eq!(render_range(3, 6).unwrap(), "3 4 5 6");
/// assert!(render_range(6, 3).is_err());
/// ```
pub fn render_range(start: u32, end: u32) -> Result<String> {
    if start > end {
        return Err(CronError::InvalidRange { start, end });
    }
    Ok(render_values(start..=end))
}

/// Joins values with single spaces, preserving iteration order.
pub fn render_values<I>(values: I) -> String
where
    I: IntoIterator<Item = u32>,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_range_single_value() {
        assert_eq!(render_range(7, 7).unwrap(), "7");
    }

    #[test]
    fn test_render_range_has_no_padding() {
        let rendered = render_range(0, 10).unwrap();
        assert_eq!(rendered, "0 1 2 3 4 5 6 7 8 9 10");
        assert!(!rendered.starts_with(' ') && !rendered.ends_with(' '));
    }

    #[test]
    fn test_render_range_inverted() {
        assert_eq!(
            render_range(5, 4),
            Err(CronError::InvalidRange { start: 5, end: 4 })
        );
    }

    #[test]
    fn test_render_values_keeps_order_and_duplicates() {
        assert_eq!(render_values([5, 1, 5]), "5 1 5");
        assert_eq!(render_values(Vec::new()), "");
    }
}
