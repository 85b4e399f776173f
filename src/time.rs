//! Converting between durations and `MM:SS` text

/// Render whole seconds as zero-padded `MM:SS` (`65` → `"01:05"`).
///
/// Minutes are not wrapped into hours: `6000` → `"100:00"`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse user-entered time into whole seconds. Never fails.
///
/// - `"m:ss"` → minutes and seconds (`"1:05"` → 65)
/// - 1–2 digits → seconds (`"45"` → 45)
/// - 3+ digits → last two digits are seconds, the rest minutes (`"130"` → 90)
///
/// Negative, empty or unparsable input gives 0. Totals too large for a `u32`
/// saturate.
pub fn parse_time_input(input: &str) -> u32 {
    let input = input.trim();
    if input.is_empty() {
        return 0;
    }

    let total = if let Some((minutes, seconds)) = input.split_once(':') {
        match (parse_part(minutes, true), parse_part(seconds, false)) {
            (Some(m), Some(s)) => m.saturating_mul(60).saturating_add(s),
            _ => 0,
        }
    } else if input.bytes().all(|b| b.is_ascii_digit()) {
        parse_digits(input)
    } else {
        input.parse::<i64>().unwrap_or(0)
    };

    clamp_seconds(total)
}

/// One side of `m:ss`. An empty side counts as 0; only the minutes may carry
/// a sign. Digit runs too long for an `i64` saturate.
fn parse_part(part: &str, signed: bool) -> Option<i64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0);
    }
    let digits = match part.strip_prefix(['-', '+']) {
        Some(rest) if signed => rest,
        Some(_) => return None,
        None => part,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match part.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if part.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn parse_digits(digits: &str) -> i64 {
    if digits.len() <= 2 {
        return digits.parse().unwrap_or(0);
    }
    let (minutes, seconds) = digits.split_at(digits.len() - 2);
    let minutes: i64 = minutes.parse().unwrap_or(i64::MAX);
    let seconds: i64 = seconds.parse().unwrap_or(0);
    minutes.saturating_mul(60).saturating_add(seconds)
}

fn clamp_seconds(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn parse_colon_form() {
        assert_eq!(parse_time_input("1:05"), 65);
        assert_eq!(parse_time_input("00:30"), 30);
        assert_eq!(parse_time_input(" 2:00 "), 120);
        assert_eq!(parse_time_input(":45"), 45);
    }

    #[test]
    fn parse_digit_strings() {
        assert_eq!(parse_time_input("5"), 5);
        assert_eq!(parse_time_input("45"), 45);
        assert_eq!(parse_time_input("130"), 90);
        assert_eq!(parse_time_input("1000"), 600);
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(parse_time_input(""), 0);
        assert_eq!(parse_time_input("abc"), 0);
        assert_eq!(parse_time_input("1:xx"), 0);
        assert_eq!(parse_time_input("1:2:3"), 0);
        assert_eq!(parse_time_input("-5"), 0);
        assert_eq!(parse_time_input("-1:05"), 0);
        assert_eq!(parse_time_input("1:-30"), 0);
        assert_eq!(parse_time_input("1:+30"), 0);
        assert_eq!(parse_time_input("-:30"), 0);
    }

    #[test]
    fn huge_input_saturates() {
        assert_eq!(parse_time_input("99999999999999999999999"), u32::MAX);
        assert_eq!(parse_time_input("99999999999999999999:00"), u32::MAX);
        assert_eq!(parse_time_input("0:99999999999999999999"), u32::MAX);
        assert_eq!(parse_time_input("-99999999999999999999:00"), 0);
    }

    proptest! {
        #[test]
        fn formatted_time_parses_back(seconds in 0u32..6000) {
            prop_assert_eq!(parse_time_input(&format_time(seconds)), seconds);
        }

        #[test]
        fn parsing_never_panics(input in ".*") {
            let _ = parse_time_input(&input);
        }
    }
}
