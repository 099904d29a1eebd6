//! Money-text parsing and formatting.
//!
//! Subtotals are re-read from rendered text, so parsing follows
//! `parseFloat` leniency: take the longest numeric prefix and fall back
//! to zero when there is none.

/// Parses the leading float out of `text`, returning `0.0` for
/// unreadable input.
pub fn parse(text: &str) -> f64 {
    let s = text.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'+' | b'-' if i == 0 => end = i + 1,
            b'0'..=b'9' => {
                seen_digit = true;
                end = i + 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Two-decimal display form, the only format the cart page renders.
pub fn format(amount: f64) -> String {
    format!("{amount:.2}")
}
