// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Logical-to-visual reordering of a shaped token stream.
//!
//! The consumer places glyphs strictly left to right and does no mark
//! positioning of its own, so the whole stream is reversed while each
//! diacritic stays glued to its base and is emitted just before it. Merged
//! vowel + shadda glyphs are not diacritics and start a group of their own.

use super::marks::is_diacritic;

/// A base token and the marks that follow it in logical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGroup {
    pub base: char,
    pub marks: Vec<char>,
}

impl CharGroup {
    fn new(base: char) -> Self {
        Self {
            base,
            marks: Vec::new(),
        }
    }
}

/// Split a shaped stream into groups, one per base token.
///
/// Marks seen before the first base have nothing to attach to and are
/// dropped.
pub fn group_tokens(tokens: &[char]) -> Vec<CharGroup> {
    let mut groups: Vec<CharGroup> = Vec::with_capacity(tokens.len());

    for &c in tokens {
        if !is_diacritic(c) {
            groups.push(CharGroup::new(c));
            continue;
        }

        match groups.last_mut() {
            Some(group) => group.marks.push(c),
            None => tracing::trace!("Dropping orphan mark U+{:04X}", c as u32),
        }
    }

    groups
}

/// Reverse a shaped stream into visual order, marks before their base.
pub fn reorder(tokens: &[char]) -> Vec<char> {
    let groups = group_tokens(tokens);

    let mut result = Vec::with_capacity(tokens.len());
    for group in groups.iter().rev() {
        result.extend_from_slice(&group.marks);
        result.push(group.base);
    }
    result
}
