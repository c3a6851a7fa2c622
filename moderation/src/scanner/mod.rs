//! Scanning text against a dictionary.
//!
//! Each scan walks the text once, keeping a small set of live partial
//! matches (see [`queue`]) that advance through the trie together. Scans
//! allocate their own state, so one [`Moderator`] can be shared freely
//! between threads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use self::worker::ScanWorker;
use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::error::DictionaryError;
use crate::types::{Severity, Type};

pub use self::analysis::Analysis;

mod analysis;
mod queue;
mod worker;

/// Upper case letters and repeated characters as a share of the text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamConfig {
    /// Texts of this many bytes or fewer are never spam.
    pub min_length: usize,
    pub mild_percent: usize,
    pub moderate_percent: usize,
}

impl SpamConfig {
    pub const fn default() -> SpamConfig {
        SpamConfig {
            min_length: 5,
            mild_percent: 30,
            moderate_percent: 50,
        }
    }

    /// `signals` counts the upper case letters plus repeated characters.
    /// Each contributes half a percent per byte of text.
    pub fn severity(&self, signals: usize, length: usize) -> Option<Severity> {
        if length <= self.min_length {
            return None;
        }

        let percent = (100 / 2) * signals / length;

        if percent > self.moderate_percent {
            Some(Severity::Moderate)
        } else if percent > self.mild_percent {
            Some(Severity::Mild)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeratorConfig {
    /// Smallest summed profane, offensive and sexual level at which
    /// [`Moderate::is_inappropriate`] reports true. At 1 this is the same as
    /// checking for [`Type::INAPPROPRIATE`].
    pub inappropriate_threshold: i32,
    /// `None` turns spam detection off.
    pub spam: Option<SpamConfig>,
}

impl ModeratorConfig {
    pub const fn default() -> ModeratorConfig {
        ModeratorConfig {
            inappropriate_threshold: 1,
            spam: Some(SpamConfig::default()),
        }
    }
}

/// Query API over a scan. Implementors provide [`Moderate::analyze`].
pub trait Moderate {
    fn analyze(&self, text: &str) -> Analysis;

    /// Bitmask of every category and severity found in `text`.
    #[inline]
    fn scan(&self, text: &str) -> Type {
        self.analyze(text).types()
    }

    /// Whether `text` matches any bit of `types`.
    #[inline]
    fn is(&self, text: &str, types: Type) -> bool {
        self.scan(text).is(types)
    }

    #[inline]
    fn is_inappropriate(&self, text: &str) -> bool {
        self.is(text, Type::INAPPROPRIATE)
    }
}

/// A dictionary plus the configuration to scan with it. Cloning shares the
/// dictionary.
#[derive(Debug, Clone)]
pub struct Moderator {
    dictionary: Arc<Dictionary>,
    config: ModeratorConfig,
}

impl Moderator {
    pub fn new(dictionary: Dictionary) -> Moderator {
        Moderator::with_config(dictionary, ModeratorConfig::default())
    }

    pub fn with_config(dictionary: impl Into<Arc<Dictionary>>, config: ModeratorConfig) -> Moderator {
        Moderator {
            dictionary: dictionary.into(),
            config,
        }
    }

    pub fn from_entries<I>(entries: I) -> Result<Moderator, DictionaryError>
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        Ok(Moderator::new(Dictionary::build(entries)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &ModeratorConfig {
        &self.config
    }
}

impl Default for Moderator {
    /// Scans with the built-in word list and default configuration.
    fn default() -> Moderator {
        Moderator::new(Dictionary::default())
    }
}

impl Moderate for Moderator {
    fn analyze(&self, text: &str) -> Analysis {
        ScanWorker::new(&self.dictionary, &self.config).scan(text)
    }

    fn is_inappropriate(&self, text: &str) -> bool {
        self.analyze(text).inappropriate_level() >= self.config.inappropriate_threshold
    }
}
