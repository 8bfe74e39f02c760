/// Check a user-supplied material code.
///
/// Accepts the trimmed input iff it is non-empty and contains only
/// ASCII letters, digits and dashes (SAP-style codes like
/// "4011835-AA"). No normalization beyond trimming.
pub fn is_valid_material_code(identifier: &str) -> bool {
    let trimmed = identifier.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sap_style_codes() {
        assert!(is_valid_material_code("4011835-AA"));
        assert!(is_valid_material_code("X1"));
        assert!(is_valid_material_code("  7020114-BB  "));
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(!is_valid_material_code(""));
        assert!(!is_valid_material_code("  "));
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(!is_valid_material_code("abc_123"));
        assert!(!is_valid_material_code("40 11835"));
        assert!(!is_valid_material_code("MAT/01"));
        assert!(!is_valid_material_code("çódigo"));
    }
}
