//! Censoring on top of the [`Moderate`] query API.
//!
//! The scanner reports whether a text matches, not where, so segments are
//! located by rescanning substrings: the window grows until it matches,
//! then shrinks from the left to the shortest suffix that still matches.
//! That suffix keeps its first character and loses the rest. Cost is
//! quadratic in the length of the text; this is meant for short messages.

use crate::scanner::Moderate;
use crate::types::Type;

pub const DEFAULT_REPLACEMENT: char = '*';

/// Censors with [`DEFAULT_REPLACEMENT`]. Returns the censored text and the
/// number of characters replaced.
pub fn censor<M>(moderator: &M, text: &str, types: Type) -> (String, usize)
where
    M: Moderate + ?Sized,
{
    censor_with(moderator, text, types, DEFAULT_REPLACEMENT)
}

pub fn censor_with<M>(moderator: &M, text: &str, types: Type, replacement: char) -> (String, usize)
where
    M: Moderate + ?Sized,
{
    if text.is_empty() || !moderator.is(text, types) {
        return (text.to_string(), 0);
    }

    // Byte offset of every character position, plus the end.
    let offsets = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect::<Vec<_>>();
    let chars = offsets.len() - 1;
    let slice = |from: usize, to: usize| &text[offsets[from]..offsets[to]];

    let mut censored = String::with_capacity(text.len());
    let mut replaced = 0;
    let mut start = 0;

    for end in 1..=chars {
        if !moderator.is(slice(start, end), types) {
            continue;
        }

        // The empty suffix never matches, so this always finds a cut.
        let cut = (start..=end)
            .find(|&from| !moderator.is(slice(from, end), types))
            .unwrap_or(end);

        censored.push_str(slice(start, cut));
        censored.extend(std::iter::repeat(replacement).take(end - cut));
        replaced += end - cut;
        start = end;
    }

    censored.push_str(slice(start, chars));
    (censored, replaced)
}
