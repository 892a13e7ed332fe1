use std::collections::BTreeSet;
use crate::analysis::tokenizer::{split_words, validate_term};
use crate::core::error::Result;

/// Words left out of both indices and ignored in queries
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    pub stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    /// Build from a collection of words. Empty entries are skipped; any word
    /// with a control character fails the whole set.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BTreeSet::new();
        for word in stop_words {
            let word = word.as_ref();
            validate_term(word)?;
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(StopWordFilter { stop_words: words })
    }

    /// Build from space separated text, e.g. `"and with"`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_words(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn filter<'a>(&self, words: Vec<&'a str>) -> Vec<&'a str> {
        words.into_iter()
            .filter(|word| !self.contains(word))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn builds_from_text() {
        let filter = StopWordFilter::from_text(" and  with ").unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("and"));
        assert!(filter.contains("with"));
        assert!(!filter.contains("rat"));
    }

    #[test]
    fn builds_from_collection_skipping_empty() {
        let filter = StopWordFilter::new(vec!["in", "", "the", "in"]).unwrap();
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn rejects_control_characters() {
        let err = StopWordFilter::new(["ok", "b\x02ad"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidTerm);
    }

    #[test]
    fn filters_words() {
        let filter = StopWordFilter::from_text("and with").unwrap();
        let words = filter.filter(split_words("pet with rat and rat"));
        assert_eq!(words, vec!["pet", "rat", "rat"]);
    }
}
