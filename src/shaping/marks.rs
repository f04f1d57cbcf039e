// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic diacritics (tashkeel) and the Shadda + vowel ligatures.
//!
//! Diacritics are never shaped and are skipped when looking for a letter's
//! neighbors. A vowel immediately followed by Shadda can collapse into a
//! single glyph from Arabic Presentation Forms-B (U+FC5E..U+FC63).

// Short vowels
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';

pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';

// Tanween (nunation)
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';

// Quranic and extended marks
pub const MADDAH_ABOVE: char = '\u{0653}';
pub const HAMZA_ABOVE: char = '\u{0654}';
pub const HAMZA_BELOW: char = '\u{0655}';
pub const SUBSCRIPT_ALEF: char = '\u{0656}';
pub const INVERTED_DAMMA: char = '\u{0657}';
pub const NOON_GHUNNA: char = '\u{0658}';
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';

// Shadda + vowel ligatures
pub const SHADDA_DAMMATAN: char = '\u{FC5E}';
pub const SHADDA_KASRATAN: char = '\u{FC5F}';
pub const SHADDA_FATHA: char = '\u{FC60}';
pub const SHADDA_DAMMA: char = '\u{FC61}';
pub const SHADDA_KASRA: char = '\u{FC62}';
pub const SHADDA_SUPERSCRIPT_ALEF: char = '\u{FC63}';

/// Check if a character is an Arabic diacritic.
#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(
        c,
        FATHA
            | DAMMA
            | KASRA
            | SHADDA
            | SUKUN
            | FATHATAN
            | DAMMATAN
            | KASRATAN
            | MADDAH_ABOVE
            | HAMZA_ABOVE
            | HAMZA_BELOW
            | SUBSCRIPT_ALEF
            | INVERTED_DAMMA
            | NOON_GHUNNA
            | SUPERSCRIPT_ALEF
    )
}

/// Get the combined Shadda + vowel ligature for a vowel mark.
///
/// Returns `None` when no ligature exists, which includes Shadda itself,
/// Sukun, Fathatan and anything that is not a diacritic.
pub fn shadda_ligature(vowel: char) -> Option<char> {
    match vowel {
        FATHA => Some(SHADDA_FATHA),
        DAMMA => Some(SHADDA_DAMMA),
        KASRA => Some(SHADDA_KASRA),
        DAMMATAN => Some(SHADDA_DAMMATAN),
        KASRATAN => Some(SHADDA_KASRATAN),
        SUPERSCRIPT_ALEF => Some(SHADDA_SUPERSCRIPT_ALEF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadda_ligature() {
        let cases = [
            ("fatha", FATHA, Some(SHADDA_FATHA)),
            ("damma", DAMMA, Some(SHADDA_DAMMA)),
            ("kasra", KASRA, Some(SHADDA_KASRA)),
            ("dammatan", DAMMATAN, Some(SHADDA_DAMMATAN)),
            ("kasratan", KASRATAN, Some(SHADDA_KASRATAN)),
            ("superscript alef", SUPERSCRIPT_ALEF, Some(SHADDA_SUPERSCRIPT_ALEF)),
            ("fathatan has no ligature", FATHATAN, None),
            ("sukun has no ligature", SUKUN, None),
            ("shadda has no ligature", SHADDA, None),
            ("latin has no ligature", 'a', None),
        ];

        for (name, vowel, expected) in cases {
            assert_eq!(shadda_ligature(vowel), expected, "{name}");
        }
    }

    #[test]
    fn test_is_diacritic() {
        for c in [
            FATHA, DAMMA, KASRA, SHADDA, SUKUN, FATHATAN, DAMMATAN, KASRATAN, SUPERSCRIPT_ALEF,
            MADDAH_ABOVE, NOON_GHUNNA,
        ] {
            assert!(is_diacritic(c), "U+{:04X} should be a diacritic", c as u32);
        }

        assert!(!is_diacritic('\u{0628}')); // beh
        assert!(!is_diacritic('\u{0627}')); // alef
        assert!(!is_diacritic(' '));
        assert!(!is_diacritic(SHADDA_FATHA));
    }

    #[test]
    fn test_ligatures_are_not_diacritics() {
        for c in [
            SHADDA_DAMMATAN,
            SHADDA_KASRATAN,
            SHADDA_FATHA,
            SHADDA_DAMMA,
            SHADDA_KASRA,
            SHADDA_SUPERSCRIPT_ALEF,
        ] {
            assert!(!is_diacritic(c));
        }
    }

    #[test]
    fn test_ligature_inputs_are_diacritics() {
        for c in [FATHA, DAMMA, KASRA, DAMMATAN, KASRATAN, SUPERSCRIPT_ALEF] {
            assert!(is_diacritic(c));
            assert!(shadda_ligature(c).is_some());
        }
    }
}
