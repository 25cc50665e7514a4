//! File-naming transform shared by generation and path derivation.

/// Convert a constant segment to snake_case (e.g., "SmartProperty" -> "smart_property")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap());
    }
    result
}
