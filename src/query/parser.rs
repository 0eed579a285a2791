use std::collections::BTreeSet;

use crate::core::error::{Error, ErrorKind, Result};
use crate::text::splitter::split_ascii_spaces;
use crate::text::stopwords::StopWords;
use crate::text::token::is_valid_token;

/// A validated, deduplicated query: plus-words to accumulate relevance for,
/// minus-words that exclude a document entirely. Both sets
/// borrow from the original query buffer, which must outlive this value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery<'a> {
    pub plus: BTreeSet<&'a str>,
    pub minus: BTreeSet<&'a str>,
}

impl<'a> ParsedQuery<'a> {
    pub fn is_empty(&self) -> bool {
        self.plus.is_empty() && self.minus.is_empty()
    }
}

/// Parse `query` against `stop_words`, producing deduplicated plus/minus
/// sets. A leading `-` marks a minus-word; a bare `-` or `--` is an error,
/// as is any token containing an ASCII control byte. Stop-words are dropped
/// silently from either side.
pub fn parse_query<'a>(query: &'a str, stop_words: &StopWords) -> Result<ParsedQuery<'a>> {
    let mut parsed = ParsedQuery::default();

    for raw in split_ascii_spaces(query) {
        let (is_minus, rest) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        if rest.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyQueryTerm,
                format!("query term {:?} has no text after '-'", raw),
            ));
        }
        if rest.starts_with('-') {
            return Err(Error::new(
                ErrorKind::DoubleMinus,
                format!("query term {:?} starts with '--'", raw),
            ));
        }
        if !is_valid_token(rest) {
            return Err(Error::new(
                ErrorKind::InvalidChar,
                format!("query term {:?} contains a control character", raw),
            ));
        }

        if stop_words.contains(rest) {
            continue;
        }

        if is_minus {
            parsed.minus.insert(rest);
        } else {
            parsed.plus.insert(rest);
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_stop_words() -> StopWords {
        StopWords::from_iter(std::iter::empty::<&str>()).unwrap()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let stop_words = empty_stop_words();
        let parsed = parse_query("cat -dog cat fish", &stop_words).unwrap();
        assert_eq!(parsed.plus.len(), 2);
        assert!(parsed.plus.contains("cat"));
        assert!(parsed.plus.contains("fish"));
        assert_eq!(parsed.minus.len(), 1);
        assert!(parsed.minus.contains("dog"));
    }

    #[test]
    fn stop_words_are_dropped_from_both_sides() {
        let stop_words = StopWords::from_text("and in at").unwrap();
        let parsed = parse_query("cat -in and fish", &stop_words).unwrap();
        assert_eq!(parsed.plus.len(), 2);
        assert!(parsed.minus.is_empty());
    }

    #[test]
    fn bare_minus_is_empty_query_term() {
        let stop_words = empty_stop_words();
        let err = parse_query("cat -", &stop_words).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyQueryTerm);
    }

    #[test]
    fn double_minus_is_rejected() {
        let stop_words = empty_stop_words();
        let err = parse_query("cat --dog", &stop_words).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DoubleMinus);
    }

    #[test]
    fn control_character_is_rejected() {
        let stop_words = empty_stop_words();
        let err = parse_query("cat\tdog", &stop_words).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidChar);
    }
}
