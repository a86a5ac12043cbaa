//! Display formatting for revenue values

/// Format a revenue value with exactly two decimals and thousand separators
/// (e.g., 1234567.5 -> "1,234,567.50").
///
/// Commas are inserted every three digits left of the decimal point,
/// scanning from the decimal point leftward.
pub fn format_revenue(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    // Digits are ASCII, so byte indexing is safe
    for (i, ch) in digits.bytes().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch as char);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
