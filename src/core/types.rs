use serde::{Serialize, Deserialize};
use std::fmt;
use std::sync::Arc;

/// Shared, immutable term text. One allocation per distinct term, held by both
/// the forward and the inverted index.
pub type Term = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub i32);

impl DocId {
    pub fn new(id: i32) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl From<i32> for DocId {
    fn from(id: i32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Stored per-document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    pub text: Box<str>,     // Canonical copy of the indexed text
}

impl DocumentData {
    pub fn new(text: &str, status: DocumentStatus, ratings: &[i32]) -> Self {
        DocumentData {
            rating: average_rating(ratings),
            status,
            text: text.into(),
        }
    }
}

/// Truncating integer mean; an empty slice rates 0.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_truncates_toward_zero() {
        assert_eq!(average_rating(&[1, 2]), 1);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[-1, -2]), -1);
        assert_eq!(average_rating(&[5, -12, 2, 1]), -1);
    }

    #[test]
    fn empty_ratings_average_to_zero() {
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn large_ratings_do_not_overflow() {
        assert_eq!(average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
    }

    #[test]
    fn doc_id_validity() {
        assert!(DocId(0).is_valid());
        assert!(!DocId::from(-1).is_valid());
        assert_eq!(DocId::new(7).to_string(), "7");
    }
}
