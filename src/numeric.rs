//! Lenient number handling shared by the parsers and the emitter.

/// Parse a numeric cell. Surrounding whitespace is ignored; anything else
/// that is not a plain decimal or exponent float is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Render a float so it always reads as a float literal (`5` -> `5.0`).
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
