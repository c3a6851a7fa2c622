use serde::Serialize;

use crate::constants::COUNTABLE_CATEGORIES;
use crate::types::{Category, Severity, Type};

/// Everything one scan accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Summed dictionary levels, indexed by [`Category::index`].
    pub levels: [i32; COUNTABLE_CATEGORIES],
    pub upper_count: usize,
    pub repetition_count: usize,
    /// Length of the normalized text in bytes.
    pub length: usize,
    pub spam: Option<Severity>,
}

impl Analysis {
    pub fn level(&self, category: Category) -> i32 {
        self.levels.get(category.index()).copied().unwrap_or(0)
    }

    /// The severity bitmask of this analysis.
    pub fn types(&self) -> Type {
        let mut types = Category::COUNTABLE
            .iter()
            .filter_map(|&category| {
                Severity::from_level(self.level(category)).map(|severity| severity.of(category))
            })
            .fold(Type::NONE, |acc, t| acc | t);

        if let Some(spam) = self.spam {
            types |= spam.of(Category::Spam);
        }

        types
    }

    /// Sum of the positive profane, offensive and sexual levels.
    pub fn inappropriate_level(&self) -> i32 {
        [Category::Profane, Category::Offensive, Category::Sexual]
            .iter()
            .map(|&category| self.level(category).max(0))
            .sum()
    }
}
