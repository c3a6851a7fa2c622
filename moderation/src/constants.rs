/// Number of letters a trie node can branch on (`a..=z`).
pub const ALPHABET_LEN: usize = 26;

/// Longest word a dictionary accepts.
pub const LONGEST_WORD: usize = 25;

/// Live matches the scanner can hold at once. Doubled because a single
/// input character may expand into two candidate letters.
pub const MATCH_QUEUE_CAPACITY: usize = LONGEST_WORD * 2;

/// Printable ASCII range that never needs accent stripping.
pub const MIN_NORMAL: char = '\u{0020}';
pub const MAX_NORMAL: char = '\u{007E}';

/// Number of categories carrying dictionary levels (everything but spam).
pub const COUNTABLE_CATEGORIES: usize = 4;

/// Bits reserved for each category in a [`Type`](crate::types::Type).
pub const BITS_PER_CATEGORY: u32 = 3;
