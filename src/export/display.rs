//! @ai:module:intent Value formatting shared by the text and CSV builders
//! @ai:module:layer domain
//! @ai:module:stateless true

/// @ai:intent Render an integer with comma thousands separators
/// @ai:effects pure
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }

    output
}

/// @ai:intent Remove bold and italic emphasis markers
/// @ai:post result contains no '*'
/// @ai:effects pure
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// @ai:intent Render a float the way the dashboard displays it
///
/// Integral values keep one decimal place (`187.0`); others use the
/// shortest representation (`0.35`).
/// @ai:effects pure
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
