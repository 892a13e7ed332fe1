use crate::core::error::{Error, ErrorKind, Result};

/// Split text into words on the space character. Runs of spaces never produce
/// empty words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect()
}

/// A term may not contain control characters (code points below 0x20).
pub fn is_valid_term(term: &str) -> bool {
    !term.chars().any(|c| c < ' ')
}

pub fn validate_term(term: &str) -> Result<()> {
    if is_valid_term(term) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::InvalidTerm,
            format!("term {:?} contains a control character", term),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces() {
        assert_eq!(split_words("funny pet and nasty rat"), vec!["funny", "pet", "and", "nasty", "rat"]);
    }

    #[test]
    fn skips_repeated_and_surrounding_spaces() {
        assert_eq!(split_words("  curly   hair "), vec!["curly", "hair"]);
    }

    #[test]
    fn empty_input_has_no_words() {
        assert!(split_words("").is_empty());
        assert!(split_words("    ").is_empty());
    }

    #[test]
    fn control_characters_are_rejected() {
        assert!(is_valid_term("dog"));
        assert!(is_valid_term("пёс"));
        assert!(!is_valid_term("d\x12og"));
        assert!(!is_valid_term("tab\there"));

        let err = validate_term("bad\x01").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTerm);
        assert!(validate_term("-minus-is-fine").is_ok());
    }
}
