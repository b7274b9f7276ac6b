/// Normalize the text of a numeric input into a non-negative whole number.
///
/// Follows how a browser reads an `<input type="number">`: empty text is 0,
/// exponent notation is accepted, fractions are floored. Anything negative,
/// non-finite or unparsable becomes 0; huge values saturate.
///
/// # Examples
/// ```ignore
/// assert_eq!(parse_count_input(""), 0);
/// assert_eq!(parse_count_input("2.7"), 2);
/// assert_eq!(parse_count_input("1e2"), 100);
/// ```
pub fn parse_count_input(input: &str) -> u32 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => {
            if v >= u32::MAX as f64 {
                u32::MAX
            } else {
                v.floor() as u32
            }
        }
        _ => 0,
    }
}

/// Format a countdown as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_countdown(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}

/// Format remaining session seconds as `HH:MM`, dropping leftover seconds.
pub fn format_session_remaining(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    format!("{:02}:{:02}", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count_input() {
        assert_eq!(parse_count_input(""), 0);
        assert_eq!(parse_count_input("   "), 0);
        assert_eq!(parse_count_input("42"), 42);
        assert_eq!(parse_count_input(" 7 "), 7);
        assert_eq!(parse_count_input("2.7"), 2);
        assert_eq!(parse_count_input("1e2"), 100);
        assert_eq!(parse_count_input("-3"), 0);
        assert_eq!(parse_count_input("abc"), 0);
        assert_eq!(parse_count_input("NaN"), 0);
        assert_eq!(parse_count_input("inf"), 0);
        assert_eq!(parse_count_input("99999999999"), u32::MAX);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0, 0), "00:00");
        assert_eq!(format_countdown(1, 5), "01:05");
        assert_eq!(format_countdown(125, 59), "125:59");
    }

    #[test]
    fn test_format_session_remaining() {
        assert_eq!(format_session_remaining(0), "00:00");
        assert_eq!(format_session_remaining(59), "00:00");
        assert_eq!(format_session_remaining(60), "00:01");
        assert_eq!(format_session_remaining(3_661), "01:01");
        assert_eq!(format_session_remaining(36_000), "10:00");
    }
}
