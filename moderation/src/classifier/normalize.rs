use std::borrow::Cow;

use unic_normal::StrNormalForm;
use unic_ucd_category::GeneralCategory;

use crate::constants::{MAX_NORMAL, MIN_NORMAL};

#[inline(always)]
fn is_normal(ch: char) -> bool {
    (MIN_NORMAL..=MAX_NORMAL).contains(&ch)
}

/// Strips accents from `text` when it contains anything outside printable
/// ASCII: decompose, drop nonspacing marks, recompose. Plain ASCII input is
/// borrowed unchanged.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_normal) {
        return Cow::Borrowed(text);
    }

    let stripped = text
        .nfd()
        .filter(|&ch| GeneralCategory::of(ch) != GeneralCategory::NonspacingMark)
        .collect::<String>();

    Cow::Owned(stripped.as_str().nfc().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_borrowed() {
        assert!(matches!(normalize("hello world!"), Cow::Borrowed("hello world!")));
        assert!(matches!(normalize(""), Cow::Borrowed("")));
    }

    #[test]
    fn accents_are_stripped() {
        assert_eq!(normalize(" fučk"), " fuck");
        assert_eq!(normalize("ÄšŚ"), "AsS");
        assert_eq!(normalize("ĂżŽ"), "AzZ");
        assert_eq!(normalize("pÓöp"), "pOop");
        assert_eq!(normalize("crème brûlée"), "creme brulee");
    }

    #[test]
    fn control_characters_trigger_normalization() {
        assert!(matches!(normalize("a\tb"), Cow::Owned(_)));
        assert_eq!(normalize("a\tb"), "a\tb");
    }

    #[test]
    fn unmapped_characters_survive() {
        assert_eq!(normalize("βιτ⊂η"), "βιτ⊂η");
        assert_eq!(normalize("日本"), "日本");
    }
}
