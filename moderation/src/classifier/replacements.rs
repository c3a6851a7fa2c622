//! Lookalike tables. Each entry lists every letter the character may stand
//! for; the scanner tries all of them.

/// Digits and symbols from the printable ASCII range.
pub fn ascii_replacement(ch: char) -> Option<&'static str> {
    let letters = match ch {
        '!' => "li",
        '@' => "a",
        '4' => "a",
        '8' => "b",
        '6' => "b",
        '(' => "c",
        '<' => "c",
        '3' => "eg",
        '9' => "gq",
        '#' => "h",
        '1' => "li",
        '0' => "o",
        '5' => "s",
        '$' => "s",
        '+' => "t",
        '7' => "t",
        '2' => "z",
        _ => return None,
    };

    Some(letters)
}

/// Greek, mathematical and letterlike symbols left over after accent
/// stripping. Retried with the lowercase form when the exact character is
/// missing.
pub fn unicode_replacement(ch: char) -> Option<&'static str> {
    exact_unicode_replacement(ch).or_else(|| {
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(lower), None) if lower != ch => exact_unicode_replacement(lower),
            _ => None,
        }
    })
}

fn exact_unicode_replacement(ch: char) -> Option<&'static str> {
    let letters = match ch {
        // Greek
        'α' => "a",
        'β' => "b",
        'γ' => "y",
        '∆' => "a",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => "hn",
        'θ' => "o",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "mu",
        'ν' => "nv",
        'ο' => "o",
        'ρ' => "p",
        'ς' => "s",
        'τ' => "t",
        'υ' => "u",
        'φ' => "p",
        'χ' => "x",
        'ψ' => "t",
        'Ω' => "o",
        'ω' => "w",

        // Mathematical operators
        '⊗' => "o",
        '⊕' => "o",
        'σ' => "o",
        '∩' => "n",
        '∪' => "u",
        '⊂' => "c",
        '⊆' => "c",
        '⊄' => "c",
        '∈' => "e",
        '⊖' => "o",
        'Ø' => "o",
        '∨' => "v",
        '∄' => "ab",
        '∫' => "l",

        // Letterlike symbols
        'ℂ' => "c",
        '℃' => "c",
        '℄' => "c",
        'ℇ' => "e",
        '℉' => "f",
        'ℊ' => "g",
        'ℋ' => "h",
        'ℌ' => "h",
        'ℍ' => "h",
        'ℎ' => "h",
        'ℏ' => "h",
        'ℐ' => "j",
        'ℑ' => "j",
        'ℒ' => "l",
        'ℓ' => "l",
        '℔' => "b",
        'ℕ' => "n",
        '№' => "n",
        '℗' => "p",
        '℘' => "p",
        'ℙ' => "p",
        'ℚ' => "q",
        'ℛ' => "r",
        'ℜ' => "r",
        'ℝ' => "r",
        '℟' => "r",
        '℣' => "v",
        'ℤ' => "z",
        '℧' => "o",
        '℩' => "i",
        '\u{212A}' => "k",
        '\u{212B}' => "a",
        'ℬ' => "b",
        'ℭ' => "c",
        '℮' => "e",
        'ℯ' => "e",
        'ℰ' => "e",
        'ℱ' => "f",
        'ℳ' => "m",
        'ℴ' => "o",
        'ℵ' => "n",
        'ℹ' => "i",
        '℺' => "o",
        'ℼ' => "n",
        'ℽ' => "v",
        'ℿ' => "n",
        '⅀' => "e",
        '⅁' => "g",
        '⅄' => "l",
        'ⅅ' => "d",
        'ⅆ' => "d",
        'ⅇ' => "e",
        'ⅈ' => "i",
        'ⅉ' => "ji",
        _ => return None,
    };

    Some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_table() {
        assert_eq!(ascii_replacement('$'), Some("s"));
        assert_eq!(ascii_replacement('1'), Some("li"));
        assert_eq!(ascii_replacement('3'), Some("eg"));
        assert_eq!(ascii_replacement('a'), None);
        assert_eq!(ascii_replacement('*'), None);
        assert_eq!(ascii_replacement('%'), None);
    }

    #[test]
    fn unicode_table() {
        assert_eq!(unicode_replacement('β'), Some("b"));
        assert_eq!(unicode_replacement('η'), Some("hn"));
        assert_eq!(unicode_replacement('ℍ'), Some("h"));
        assert_eq!(unicode_replacement('⊂'), Some("c"));
        assert_eq!(unicode_replacement('ж'), None);
    }

    #[test]
    fn unicode_lowercase_retry() {
        // Capital Greek letters fall back to their lowercase entry.
        assert_eq!(unicode_replacement('Β'), Some("b"));
        assert_eq!(unicode_replacement('Τ'), Some("t"));
        assert_eq!(unicode_replacement('Σ'), Some("o"));
    }

    #[test]
    fn replacements_are_lowercase_letters() {
        let ascii = "!@486(<39#105$+72".chars().filter_map(ascii_replacement);
        let unicode = "αβγ∆δεζηθικλμνορςτυφχψΩω⊗⊕σ∩∪⊂⊆⊄∈⊖Ø∨∄∫ℂ℃℄ℇ℉ℊℋℌℍℎℏℐℑℒℓ℔ℕ№℗℘ℙℚℛℜℝ℟℣ℤ℧℩ℬℭ℮ℯℰℱℳℴℵℹ℺ℼℽℿ⅀⅁⅄ⅅⅆⅇⅈⅉ"
            .chars()
            .map(|ch| unicode_replacement(ch).unwrap());

        for letters in ascii.chain(unicode) {
            assert!(!letters.is_empty() && letters.len() <= 2);
            assert!(letters.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn no_redundant_replacements() {
        for ch in "!@486(<39#105$+72".chars() {
            assert!(!ascii_replacement(ch).unwrap().contains(ch));
        }
    }
}
