use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{split_words, validate_term};
use crate::core::error::{Error, ErrorKind, Result};
use crate::query::types::{Query, QueryWord};

/// Query parser for converting raw query strings into plus/minus term sets
pub struct QueryParser<'a> {
    pub stop_words: &'a StopWordFilter,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWordFilter) -> Self {
        QueryParser { stop_words }
    }

    /// Parse a query string.
    /// Examples:
    /// - "curly hair" -> plus {curly, hair}
    /// - "nasty rat -not" -> plus {nasty, rat}, minus {not}
    /// - "cat -" -> EmptyQueryTerm
    /// - "--cat" -> DoubleNegation
    pub fn parse<'q>(&self, input: &'q str) -> Result<Query<'q>> {
        let mut query = Query::default();

        for token in split_words(input) {
            let word = self.parse_word(token)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_terms.insert(word.text);
            } else {
                query.plus_terms.insert(word.text);
            }
        }

        Ok(query)
    }

    pub fn parse_word<'q>(&self, token: &'q str) -> Result<QueryWord<'q>> {
        let (text, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if is_minus {
            if text.is_empty() {
                return Err(Error::new(
                    ErrorKind::EmptyQueryTerm,
                    "no term after '-'".to_string(),
                ));
            }
            if text.starts_with('-') {
                return Err(Error::new(
                    ErrorKind::DoubleNegation,
                    format!("double minus in {:?}", token),
                ));
            }
        }

        validate_term(text)?;

        Ok(QueryWord {
            text,
            is_minus,
            is_stop: self.stop_words.contains(text),
        })
    }
}
