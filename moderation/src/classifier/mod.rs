//! Maps input characters onto the dictionary alphabet.

mod normalize;
pub mod replacements;

pub use self::normalize::normalize;

use self::replacements::{ascii_replacement, unicode_replacement};
use crate::constants::MAX_NORMAL;

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

#[inline(always)]
fn letter(lower: u8) -> &'static [u8] {
    let i = (lower - b'a') as usize;
    &LETTERS[i..=i]
}

/// How the scanner treats one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Stands for one of `letters`, tried as alternative trie edges.
    Matchable {
        letters: &'static [u8],
        /// Reached through a lookalike table rather than spelled out.
        substituted: bool,
        uppercase: bool,
    },
    /// Neither advances nor breaks live matches, but marks a word boundary.
    /// `marker` is set for censor marks (`*`), which also taint the next
    /// matched letter as a replacement.
    Separator { marker: bool },
    /// Breaks every live match.
    Unmatchable,
}

impl CharClass {
    /// First candidate letter, which is what repetition is judged on.
    #[inline(always)]
    pub fn primary(&self) -> Option<u8> {
        match self {
            CharClass::Matchable { letters, .. } => letters.first().copied(),
            _ => None,
        }
    }
}

/// Classifies a character of already normalized text.
pub fn classify(ch: char) -> CharClass {
    match ch {
        'a'..='z' => CharClass::Matchable {
            letters: letter(ch as u8),
            substituted: false,
            uppercase: false,
        },
        'A'..='Z' => CharClass::Matchable {
            letters: letter(ch.to_ascii_lowercase() as u8),
            substituted: false,
            uppercase: true,
        },
        '*' => CharClass::Separator { marker: true },
        ' ' | '~' | '-' | '_' | '.' | ',' | '\n' | '\r' | '\t' => {
            CharClass::Separator { marker: false }
        }
        _ => {
            let letters = if ch <= MAX_NORMAL {
                ascii_replacement(ch)
            } else {
                unicode_replacement(ch)
            };

            match letters {
                Some(letters) => CharClass::Matchable {
                    letters: letters.as_bytes(),
                    substituted: true,
                    uppercase: false,
                },
                None => CharClass::Unmatchable,
            }
        }
    }
}
