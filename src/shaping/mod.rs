// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic contextual shaping and visual reordering.
//!
//! This module turns logically ordered Arabic text into presentation-form
//! code points (Arabic Presentation Forms-A/B) in visual order. The output
//! is meant for renderers that place glyphs strictly left to right and do
//! no bidi, joining or mark-attachment work of their own.
//!
//! # Architecture
//!
//! The work is split into small stages, leaf first:
//!
//! - **unicode_data**: the fixed letter table and a registry mapping any
//!   of a letter's code points back to the letter.
//!
//! - **marks**: the diacritic set and the vowel + shadda ligature table.
//!
//! - **joining**: picks a [`PositionalForm`] from a letter's nearest
//!   non-diacritic neighbors.
//!
//! - **arabic**: the [`ArabicShaper`] pipeline. Substitutes ligatures and
//!   assigns forms, producing a shaped stream still in logical order.
//!
//! - **reorder**: reverses the shaped stream while keeping every mark
//!   attached to its base.
//!
//! # Example
//!
//! ```
//! use harf::shaping::{ArabicShaper, reorder::reorder};
//!
//! let shaper = ArabicShaper::new();
//! let logical = shaper.shape_logical("بسم");
//!
//! // beh (initial), seen (medial), meem (final)
//! assert_eq!(logical, ['\u{FE91}', '\u{FEB4}', '\u{FEE2}']);
//! assert_eq!(reorder(&logical), ['\u{FEE2}', '\u{FEB4}', '\u{FE91}']);
//! ```

pub mod arabic;
pub mod joining;
pub mod marks;
pub mod reorder;
pub mod unicode_data;

pub use arabic::ArabicShaper;
pub use marks::{is_diacritic, shadda_ligature};
pub use unicode_data::{Letter, is_arabic_letter, resolve};

/// Positional forms for cursive scripts (Arabic, Syriac, etc.)
///
/// In cursive scripts, characters change shape depending on their position
/// within a connected sequence. This enum represents the four possible forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// Standalone form - character not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Get the OpenType feature tag that selects this form.
    pub fn feature_tag(&self) -> &'static str {
        match self {
            Self::Isolated => "isol",
            Self::Initial => "init",
            Self::Medial => "medi",
            Self::Final => "fina",
        }
    }

    /// Find which form of `letter` the code point `c` is, if any.
    ///
    /// Letters without distinct shapes repeat code points across slots; the
    /// first matching form wins, in isolated, initial, medial, final order.
    pub fn of(letter: &Letter, c: char) -> Option<Self> {
        [Self::Isolated, Self::Initial, Self::Medial, Self::Final]
            .into_iter()
            .find(|&form| letter.form(form) == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::unicode_data::{ALEF, BEH};

    #[test]
    fn test_positional_form_feature_tag() {
        assert_eq!(PositionalForm::Isolated.feature_tag(), "isol");
        assert_eq!(PositionalForm::Initial.feature_tag(), "init");
        assert_eq!(PositionalForm::Medial.feature_tag(), "medi");
        assert_eq!(PositionalForm::Final.feature_tag(), "fina");
    }

    #[test]
    fn test_positional_form_of() {
        assert_eq!(PositionalForm::of(&BEH, '\u{FE92}'), Some(PositionalForm::Medial));
        assert_eq!(PositionalForm::of(&BEH, '\u{0628}'), None);
        // alef's initial slot is its base code point
        assert_eq!(PositionalForm::of(&ALEF, '\u{0627}'), Some(PositionalForm::Initial));
        assert_eq!(PositionalForm::of(&ALEF, '\u{FE8E}'), Some(PositionalForm::Medial));
    }
}
