//! Display formatting for money

/// Whole dollars with thousands separators: `$1,234,567`, `-$950`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
