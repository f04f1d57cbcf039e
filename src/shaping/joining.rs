// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Contextual form selection.
//!
//! A letter's form depends only on its nearest non-diacritic neighbors in
//! logical order:
//!
//! | previous | next   | form                                          |
//! |----------|--------|-----------------------------------------------|
//! | Arabic   | Arabic | medial, or initial after a right-joining-only |
//! | -        | Arabic | initial                                       |
//! | Arabic   | -      | final, or isolated after a right-joining-only |
//! | -        | -      | isolated                                      |
//!
//! Anything that does not resolve to a [`Letter`] counts as "not Arabic",
//! so spaces, punctuation and Latin text break a joining chain.

use super::PositionalForm;
use super::marks::is_diacritic;
use super::unicode_data::{Letter, resolve};

/// Find the nearest non-diacritic character before `index`.
pub fn prev_base(text: &[char], index: usize) -> Option<char> {
    text[..index.min(text.len())]
        .iter()
        .rev()
        .copied()
        .find(|&c| !is_diacritic(c))
}

/// Find the nearest non-diacritic character after `index`.
pub fn next_base(text: &[char], index: usize) -> Option<char> {
    text.iter()
        .skip(index + 1)
        .copied()
        .find(|&c| !is_diacritic(c))
}

/// Determine the positional form of a letter given its neighbors.
///
/// The letter's own joining type does not matter here: right-joining-only
/// letters store their final shape in the medial slot.
pub fn determine_form(prev: Option<char>, next: Option<char>) -> PositionalForm {
    let prev_letter = prev.and_then(resolve);
    let next_is_arabic = next.and_then(resolve).is_some();

    // A right-joining-only predecessor never connects forward.
    let after_break = prev_letter.is_some_and(Letter::is_right_joining_only);

    match (prev_letter.is_some(), next_is_arabic) {
        (true, true) if after_break => PositionalForm::Initial,
        (true, true) => PositionalForm::Medial,
        (false, true) => PositionalForm::Initial,
        (true, false) if after_break => PositionalForm::Isolated,
        (true, false) => PositionalForm::Final,
        (false, false) => PositionalForm::Isolated,
    }
}

/// Pick the presentation form code point for `current`.
///
/// Characters outside the letter set are returned unchanged.
pub fn classify(prev: Option<char>, current: char, next: Option<char>) -> char {
    match resolve(current) {
        Some(letter) => letter.form(determine_form(prev, next)),
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::marks::{FATHA, SHADDA};
    use crate::shaping::unicode_data::{ALEF, BEH, DAL, LAM_ALEF, MEEM, REH, SEEN};

    #[test]
    fn test_isolated_without_neighbors() {
        assert_eq!(classify(None, BEH.base, None), BEH.isol);
        assert_eq!(classify(Some(' '), BEH.base, Some('A')), BEH.isol);
    }

    #[test]
    fn test_initial_medial_final() {
        assert_eq!(classify(None, BEH.base, Some(SEEN.base)), BEH.init);
        assert_eq!(classify(Some(BEH.base), SEEN.base, Some(MEEM.base)), SEEN.medi);
        assert_eq!(classify(Some(SEEN.base), MEEM.base, None), MEEM.fina);
    }

    #[test]
    fn test_right_joining_only_predecessor() {
        // Between dal and meem, beh starts a new chain.
        assert_eq!(classify(Some(DAL.base), BEH.base, Some(MEEM.base)), BEH.init);
        // After alef at the end of a word, beh stands alone.
        assert_eq!(classify(Some(ALEF.base), BEH.base, None), BEH.isol);
    }

    #[test]
    fn test_right_joining_only_current_letter() {
        // Alef takes its final shape after a dual-joining letter.
        assert_eq!(classify(Some(BEH.base), ALEF.base, None), ALEF.fina);
        // Alef between two letters is "medial", which is its final shape.
        assert_eq!(classify(Some(BEH.base), ALEF.base, Some(BEH.base)), ALEF.medi);
        assert_eq!(ALEF.medi, ALEF.fina);
    }

    #[test]
    fn test_neighbors_in_presentation_form_count_as_arabic() {
        assert_eq!(classify(Some(BEH.init), MEEM.base, None), MEEM.fina);
        assert_eq!(classify(None, BEH.base, Some(LAM_ALEF.isol)), BEH.init);
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(classify(Some(BEH.base), ' ', Some(BEH.base)), ' ');
        assert_eq!(classify(None, 'x', None), 'x');
        assert_eq!(classify(None, '\u{FDF2}', None), '\u{FDF2}');
    }

    #[test]
    fn test_determine_form_directly() {
        assert_eq!(determine_form(None, None), PositionalForm::Isolated);
        assert_eq!(determine_form(None, Some(MEEM.base)), PositionalForm::Initial);
        assert_eq!(determine_form(Some(BEH.base), Some(MEEM.base)), PositionalForm::Medial);
        assert_eq!(determine_form(Some(SEEN.base), None), PositionalForm::Final);
        assert_eq!(determine_form(Some(REH.base), None), PositionalForm::Isolated);
        assert_eq!(determine_form(Some('.'), Some('.')), PositionalForm::Isolated);
    }

    #[test]
    fn test_neighbor_scans_skip_diacritics() {
        let text = [BEH.base, FATHA, SHADDA, MEEM.base, FATHA];

        assert_eq!(prev_base(&text, 3), Some(BEH.base));
        assert_eq!(next_base(&text, 0), Some(MEEM.base));
        assert_eq!(prev_base(&text, 0), None);
        assert_eq!(next_base(&text, 3), None);
        assert_eq!(next_base(&text, 10), None);
    }

    #[test]
    fn test_neighbor_scans_stop_at_non_arabic() {
        let text = ['a', BEH.base, ' ', MEEM.base];

        assert_eq!(prev_base(&text, 1), Some('a'));
        assert_eq!(next_base(&text, 1), Some(' '));
    }
}
