use std::collections::BTreeSet;

/// One classified query token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWord<'q> {
    pub text: &'q str,
    pub is_minus: bool,
    pub is_stop: bool,
}

/// Parsed query. Terms borrow from the raw query string.
///
/// A word may sit in both sets when the query holds it both plain and
/// negated (`"rat -rat"`); the minus form wins at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    pub plus_terms: BTreeSet<&'q str>,
    pub minus_terms: BTreeSet<&'q str>,
}

impl<'q> Query<'q> {
    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }
}
