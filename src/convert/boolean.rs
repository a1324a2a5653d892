//! Two-way Yes/No boolean text mapping.
//!
//! Mapping layers shuttle flags between `"Yes"`/`"No"` text and `bool`.
//! The text side is deliberately permissive: anything other than the
//! literal `"No"` reads as true, which is the contract downstream
//! consumers rely on. (Distinct from the exporter's `Y`/`N` cell
//! rendering.)

/// Read a Yes/No text flag.
///
/// `"No"` is false; `"Yes"`, any other text, and absent values are true.
pub fn from_text(text: Option<&str>) -> bool {
    !matches!(text, Some("No"))
}

/// Render a boolean flag as Yes/No text. Absent values render as `"No"`.
pub fn to_text(value: Option<bool>) -> &'static str {
    if value == Some(true) {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        assert!(from_text(Some("Yes")));
        assert!(!from_text(Some("No")));
        assert!(from_text(Some("maybe")));
        assert!(from_text(None));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(Some(true)), "Yes");
        assert_eq!(to_text(Some(false)), "No");
        assert_eq!(to_text(None), "No");
    }
}
