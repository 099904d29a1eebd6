//! Quantity-input parsing and the ≥ 1 clamp applied before any request.

/// `parseInt` semantics over an input's raw value: optional sign, then
/// the leading digit run. Empty or unreadable input counts as 1, the
/// form's default quantity.
pub fn parse(text: &str) -> i64 {
    let s = text.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let run: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if run.is_empty() {
        return 1;
    }
    // Digit runs past i64 saturate; the clamp below caps them anyway.
    let n = run.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -n
    } else {
        n
    }
}

/// Quantities never go below 1; decreasing past that is a no-op. Values
/// past `u32::MAX` saturate rather than wrap.
pub fn clamp(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{clamp, parse};

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse("7"), 7);
        assert_eq!(parse(" 12 "), 12);
        assert_eq!(parse("3.9"), 3);
        assert_eq!(parse("4 units"), 4);
    }

    #[test]
    fn unreadable_input_defaults_to_one() {
        assert_eq!(parse(""), 1);
        assert_eq!(parse("abc"), 1);
        assert_eq!(parse("-"), 1);
    }

    #[test]
    fn decrement_at_one_stays_at_one() {
        assert_eq!(clamp(parse("1") - 1), 1);
        assert_eq!(clamp(parse("0") - 1), 1);
    }

    #[test]
    fn clamp_floors_at_one() {
        assert_eq!(clamp(-5), 1);
        assert_eq!(clamp(0), 1);
        assert_eq!(clamp(2), 2);
        assert_eq!(clamp(parse("2") + 1), 3);
    }

    #[test]
    fn oversized_input_saturates_instead_of_wrapping() {
        // 2^32 and beyond must not truncate below the >= 1 floor.
        assert_eq!(clamp(parse("4294967296")), u32::MAX);
        assert_eq!(clamp(parse("99999999999999999999")), u32::MAX);
        assert_eq!(clamp(i64::MAX), u32::MAX);
        assert_eq!(clamp(parse("9223372036854775807").saturating_add(1)), u32::MAX);
        assert_eq!(clamp(parse("-99999999999999999999")), 1);
    }
}
