use std::collections::HashSet;

use crate::core::error::{Error, ErrorKind, Result};
use crate::text::splitter::split_ascii_spaces;
use crate::text::token::is_valid_token;

/// Immutable set of words ignored everywhere (documents and queries).
/// Fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn from_iter<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_token(word) {
                return Err(Error::new(
                    ErrorKind::InvalidChar,
                    format!("stop-word '{}' contains a control character", word),
                ));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords { words: set })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_iter(split_ascii_spaces(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
