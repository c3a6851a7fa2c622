/*! Detection of inappropriate text with a letter trie.

Text is scanned once, character by character. Every character is classified
(plain letter, lookalike, separator or anything else) and every live partial
match is advanced through a trie of known words at once, so leetspeak,
spacing and stretched letters ("f u c k", "$h1t", "fuuuck") are caught
without preprocessing passes. Each dictionary word carries a signed level
per category; the summed levels are folded into a [`Type`] bitmask.

Words that are known false positives ("assassin", "scrap") carry negative
levels and cancel the words they contain, but only when spelled out plainly.

# Usage examples

```
use moderation::{Moderate, Moderator, Type};

let moderator = Moderator::default();

assert!(moderator.is_inappropriate("sh1t"));
assert!(!moderator.is_inappropriate("assassin"));
assert!(moderator.is("you're a dumbass", Type::MEAN));
assert!(!moderator.is("you're a dumbass", Type::PROFANE & Type::SEVERE));
```

A custom word list:

```
use moderation::{DictionaryEntry, Levels, Moderate, Moderator};

let moderator = Moderator::from_entries(vec![
    DictionaryEntry::new("heck", Levels::new(1, 0, 0, 0)),
]).unwrap();

assert!(moderator.is_inappropriate("h3ck"));
```

The `accuracy` binary in the same repository measures a dictionary against a
labelled corpus.
*/

pub mod censor;
pub mod classifier;
pub mod dictionary;
pub mod error;
pub mod scanner;
pub mod types;

pub(crate) mod constants;

pub use crate::censor::{censor, censor_with};
pub use crate::dictionary::{Dictionary, DictionaryEntry};
pub use crate::error::DictionaryError;
pub use crate::scanner::{Analysis, Moderate, Moderator, ModeratorConfig, SpamConfig};
pub use crate::types::{Category, Levels, Severity, Type};
