//! Error types for dictionary construction.

use smol_str::SmolStr;

/// Errors that can occur while adding words to a [`Dictionary`](crate::dictionary::Dictionary).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Words must contain at least one letter
    #[error("Empty word")]
    EmptyWord,

    /// Only lowercase ASCII letters can be stored in the trie
    #[error("Invalid character {ch:?} in word {word:?}")]
    InvalidCharacter { word: SmolStr, ch: char },

    /// The match queue is sized for words up to a fixed length
    #[error("Word {word:?} is {len} letters long, longest allowed is {max}")]
    WordTooLong {
        word: SmolStr,
        len: usize,
        max: usize,
    },
}
