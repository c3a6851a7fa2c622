//! Categories, severities and the bitmask that carries them.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::constants::{BITS_PER_CATEGORY, COUNTABLE_CATEGORIES};

/// A kind of inappropriateness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Profane,
    Offensive,
    Sexual,
    Mean,
    Spam,
}

impl Category {
    /// Categories whose levels come from dictionary words, in level order.
    pub const COUNTABLE: [Category; COUNTABLE_CATEGORIES] = [
        Category::Profane,
        Category::Offensive,
        Category::Sexual,
        Category::Mean,
    ];

    pub const ALL: [Category; 5] = [
        Category::Profane,
        Category::Offensive,
        Category::Sexual,
        Category::Mean,
        Category::Spam,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    const fn shift(self) -> u32 {
        self as u32 * BITS_PER_CATEGORY
    }

    /// All three severity bits of this category.
    #[inline(always)]
    pub const fn mask(self) -> Type {
        Type(0b111 << self.shift())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Profane => "profane",
            Category::Offensive => "offensive",
            Category::Sexual => "sexual",
            Category::Mean => "mean",
            Category::Spam => "spam",
        }
    }
}

/// Ordinal severity within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Folds an accumulated level into a severity tier. Levels at or below
    /// zero carry no severity.
    pub const fn from_level(level: i32) -> Option<Severity> {
        if level >= 3 {
            Some(Severity::Severe)
        } else if level == 2 {
            Some(Severity::Moderate)
        } else if level == 1 {
            Some(Severity::Mild)
        } else {
            None
        }
    }

    #[inline(always)]
    const fn bit(self) -> u32 {
        match self {
            Severity::Mild => 0b001,
            Severity::Moderate => 0b010,
            Severity::Severe => 0b100,
        }
    }

    /// The single bit recording this severity for `category`.
    #[inline(always)]
    pub const fn of(self, category: Category) -> Type {
        Type(self.bit() << category.shift())
    }
}

/// Bitmask of categories and severities, three bits per category.
///
/// Combine categories with `|` and restrict severity with `&`, e.g.
/// `Type::PROFANE | Type::MEAN & Type::SEVERE`. Severity masks are read on
/// an "at least" basis: `MODERATE` matches moderate or severe results.
///
/// The bit positions are stable across releases, but callers should still
/// refer to the named constants rather than raw values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Type(u32);

impl Type {
    pub const NONE: Type = Type(0);

    pub const PROFANE: Type = Category::Profane.mask();
    pub const OFFENSIVE: Type = Category::Offensive.mask();
    pub const SEXUAL: Type = Category::Sexual.mask();
    pub const MEAN: Type = Category::Mean.mask();
    /// Spam is at most moderate, and like every other category a result
    /// carries only the bit of its own severity: `SPAM & SEVERE` never
    /// matches and `SPAM & MODERATE` matches moderate spam only.
    pub const SPAM: Type = Category::Spam.mask();

    pub const MILD: Type = Type(0b111_111_111_111_111);
    pub const MODERATE: Type = Type(0b110_110_110_110_110);
    pub const SEVERE: Type = Type(0b100_100_100_100_100);

    /// What `is_inappropriate` checks for.
    pub const INAPPROPRIATE: Type = Type(Self::PROFANE.0 | Self::OFFENSIVE.0 | Self::SEXUAL.0);
    pub const ANY: Type = Type(Self::INAPPROPRIATE.0 | Self::MEAN.0 | Self::SPAM.0);

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any bit of `mask` is set.
    #[inline(always)]
    pub const fn is(self, mask: Type) -> bool {
        self.0 & mask.0 != 0
    }

    /// Highest severity recorded for `category`.
    pub fn severity(self, category: Category) -> Option<Severity> {
        [Severity::Severe, Severity::Moderate, Severity::Mild]
            .into_iter()
            .find(|severity| self.is(severity.of(category)))
    }
}

impl BitOr for Type {
    type Output = Type;

    #[inline(always)]
    fn bitor(self, rhs: Type) -> Type {
        Type(self.0 | rhs.0)
    }
}

impl BitOrAssign for Type {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Type) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Type {
    type Output = Type;

    #[inline(always)]
    fn bitand(self, rhs: Type) -> Type {
        Type(self.0 & rhs.0)
    }
}

impl BitAndAssign for Type {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Type) {
        self.0 &= rhs.0;
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.is_empty() {
            return write!(f, "none");
        }

        let parts = Category::ALL
            .iter()
            .filter_map(|&category| {
                self.severity(category)
                    .map(|severity| format!("{}:{:?}", category.name(), severity).to_lowercase())
            })
            .join("|");

        write!(f, "{}", parts)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Type({:#017b} {})", self.0, self)
    }
}

/// Signed per-category levels carried by a dictionary word.
///
/// A word with no positive level is an override: it exists to cancel a
/// positive word it contains (for example "assassin" containing "ass").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Levels(pub [i8; COUNTABLE_CATEGORIES]);

impl Levels {
    pub const fn new(profane: i8, offensive: i8, sexual: i8, mean: i8) -> Levels {
        Levels([profane, offensive, sexual, mean])
    }

    /// Level for a countable category. Spam has no dictionary level.
    pub fn get(&self, category: Category) -> i8 {
        self.0.get(category.index()).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, i8)> + '_ {
        Category::COUNTABLE.iter().copied().zip(self.0.iter().copied())
    }

    pub fn is_override(&self) -> bool {
        self.0.iter().all(|&level| level <= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_is_stable() {
        assert_eq!(Type::PROFANE.bits(), 0b111);
        assert_eq!(Type::OFFENSIVE.bits(), 0b111_000);
        assert_eq!(Type::SEXUAL.bits(), 0b111_000_000);
        assert_eq!(Type::MEAN.bits(), 0b111_000_000_000);
        assert_eq!(Type::SPAM.bits(), 0b111_000_000_000_000);
        assert_eq!(Severity::Moderate.of(Category::Sexual).bits(), 0b010_000_000);
        assert_eq!(Type::ANY, Type::MILD);
    }

    #[test]
    fn level_folding() {
        assert_eq!(Severity::from_level(-2), None);
        assert_eq!(Severity::from_level(0), None);
        assert_eq!(Severity::from_level(1), Some(Severity::Mild));
        assert_eq!(Severity::from_level(2), Some(Severity::Moderate));
        assert_eq!(Severity::from_level(3), Some(Severity::Severe));
        assert_eq!(Severity::from_level(9), Some(Severity::Severe));
    }

    #[test]
    fn severity_masks_are_at_least() {
        let moderate = Severity::Moderate.of(Category::Profane);
        assert!(moderate.is(Type::PROFANE));
        assert!(moderate.is(Type::PROFANE & Type::MODERATE));
        assert!(!moderate.is(Type::PROFANE & Type::SEVERE));
        assert!(!moderate.is(Type::MEAN));

        let severe = Severity::Severe.of(Category::Mean);
        assert!(severe.is(Type::MEAN & Type::MILD));
        assert!(severe.is(Type::MEAN & Type::SEVERE));
        assert_eq!(severe.severity(Category::Mean), Some(Severity::Severe));
        assert_eq!(severe.severity(Category::Profane), None);
    }

    #[test]
    fn display() {
        let t = Severity::Mild.of(Category::Profane) | Severity::Severe.of(Category::Spam);
        assert_eq!(t.to_string(), "profane:mild|spam:severe");
        assert_eq!(Type::NONE.to_string(), "none");
    }

    #[test]
    fn levels() {
        let levels = Levels::new(2, 0, -1, 1);
        assert_eq!(levels.get(Category::Profane), 2);
        assert_eq!(levels.get(Category::Sexual), -1);
        assert_eq!(levels.get(Category::Spam), 0);
        assert!(!levels.is_override());
        assert!(Levels::new(-1, 0, 0, 0).is_override());
        assert!(Levels::default().is_override());

        let json = serde_json::to_string(&levels).unwrap();
        assert_eq!(json, "[2,0,-1,1]");
    }
}
