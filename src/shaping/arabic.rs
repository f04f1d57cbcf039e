// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic shaping pipeline.
//!
//! Turns logically ordered Arabic text into presentation-form code points
//! in visual order, ready for a renderer that places glyphs strictly left
//! to right.
//!
//! # Algorithm
//!
//! 1. Replace the undiacritized word "الله" with the Allah ligature (U+FDF2)
//! 2. Walk the text in logical order. Each letter gets the form chosen from
//!    its nearest non-diacritic neighbors (see [`super::joining`])
//! 3. Lam followed by alef (or alef with hamza above) collapses into one
//!    ligature glyph; marks found between the two follow the ligature
//! 4. A vowel directly followed by shadda collapses into one mark glyph
//! 5. Reverse the shaped stream, keeping each mark glued to its base
//!    (see [`super::reorder`])
//!
//! Steps 1-4 produce the shaped stream in logical order; step 5 is kept
//! separate so both halves can be checked on their own.

use std::borrow::Cow;

use super::joining::{classify, next_base, prev_base};
use super::marks::{SHADDA, is_diacritic, shadda_ligature};
use super::reorder::reorder;
use super::unicode_data::{
    ALEF, ALEF_HAMZA_ABOVE, HEH, LAM, LAM_ALEF, LAM_ALEF_HAMZA_ABOVE, Letter,
};
use crate::settings::{ShapingOptions, codepoints};

/// The letters of "الله" without diacritics.
const ALLAH: [char; 4] = [ALEF.base, LAM.base, LAM.base, HEH.base];

/// Arabic shaping engine.
///
/// # Example
///
/// ```
/// use harf::ArabicShaper;
///
/// let shaper = ArabicShaper::new();
/// // beh + meem: initial beh, final meem, reversed for LTR placement
/// assert_eq!(shaper.shape("بم"), "\u{FEE2}\u{FE91}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArabicShaper {
    options: ShapingOptions,
}

impl ArabicShaper {
    /// Create a shaper with every substitution enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ShapingOptions) -> Self {
        Self { options }
    }

    /// Shape text and return it in visual order.
    pub fn shape(&self, text: &str) -> String {
        let shaped = self.shape_logical(text);
        let visual = reorder(&shaped);

        tracing::debug!(
            "Shaped {} chars into {} glyphs",
            text.chars().count(),
            visual.len()
        );

        visual.into_iter().collect()
    }

    /// Shape text but keep it in logical order.
    ///
    /// Every letter is replaced by its contextual form and ligatures are
    /// merged; marks are left where they were.
    pub fn shape_logical(&self, text: &str) -> Vec<char> {
        let text: Vec<char> = self.substitute_religious_ligature(text).chars().collect();
        let mut result = Vec::with_capacity(text.len());

        let mut i = 0;
        while i < text.len() {
            let c = text[i];

            if is_diacritic(c) {
                i += self.push_mark(&text, i, &mut result);
                continue;
            }

            let prev = prev_base(&text, i);
            let next = next_base(&text, i);

            if let Some((ligature, alef_index)) = self.lam_alef_at(&text, i) {
                // The ligature's left neighbor is whatever follows the alef.
                let after = next_base(&text, alef_index);
                result.push(classify(prev, ligature.base, after));
                result.extend_from_slice(&text[i + 1..alef_index]);
                i = alef_index + 1;
                continue;
            }

            result.push(classify(prev, c, next));
            i += 1;
        }

        result
    }

    /// Replace every diacritic-free "الله" with the Allah ligature.
    fn substitute_religious_ligature<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.options.religious_ligature {
            return Cow::Borrowed(text);
        }

        let word: String = ALLAH.iter().collect();
        if !text.contains(&word) {
            return Cow::Borrowed(text);
        }

        tracing::trace!("Substituting {} allah ligature(s)", text.matches(&word).count());
        Cow::Owned(text.replace(&word, &codepoints::ALLAH_LIGATURE.to_string()))
    }

    /// Push the mark at `index`, merging it with a following shadda when
    /// a ligature exists. Returns how many input characters were consumed.
    fn push_mark(&self, text: &[char], index: usize, out: &mut Vec<char>) -> usize {
        let mark = text[index];

        if self.options.shadda_ligatures
            && mark != SHADDA
            && text.get(index + 1) == Some(&SHADDA)
            && let Some(ligature) = shadda_ligature(mark)
        {
            tracing::trace!(
                "Merged U+{:04X} + shadda into U+{:04X}",
                mark as u32,
                ligature as u32
            );
            out.push(ligature);
            return 2;
        }

        out.push(mark);
        1
    }

    /// If a lam at `index` starts a lam-alef ligature, return the ligature
    /// and the index of the alef it consumes.
    fn lam_alef_at(&self, text: &[char], index: usize) -> Option<(&'static Letter, usize)> {
        if !self.options.lam_alef_ligatures || text[index] != LAM.base {
            return None;
        }

        let alef_index = (index + 1..text.len()).find(|&j| !is_diacritic(text[j]))?;
        let ligature = match text[alef_index] {
            c if c == ALEF.base => &LAM_ALEF,
            c if c == ALEF_HAMZA_ABOVE.base => &LAM_ALEF_HAMZA_ABOVE,
            _ => return None,
        };

        Some((ligature, alef_index))
    }
}
