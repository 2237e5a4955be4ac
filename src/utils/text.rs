/// Format a rate with thousands separators and 4 decimal places.
///
/// Non-finite values fall back to the plain float rendering ("NaN", "inf").
pub fn format_rate(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let rendered = format!("{:.4}", value);
    let (number, fraction) = match rendered.split_once('.') {
        Some((n, f)) => (n, f),
        None => (rendered.as_str(), ""),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}
