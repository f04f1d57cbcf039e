// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Shaping settings and reserved code points.
//!
//! Every option defaults to on; the defaults are what [`crate::shape_arabic`]
//! uses. Settings can be loaded from a TOML file:
//!
//! ```toml
//! religious_ligature = true
//! lam_alef_ligatures = true
//! shadda_ligatures = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SettingsError;

// ============================================================================
// RESERVED CODE POINTS
// ============================================================================
/// ARABIC LIGATURE ALLAH ISOLATED FORM
const ALLAH_LIGATURE: char = '\u{FDF2}';

// ============================================================================
// PUBLIC API
// ============================================================================

/// Code points emitted by preprocessing rather than by the letter table.
pub mod codepoints {
    /// Replaces alef + lam + lam + heh before shaping.
    pub const ALLAH_LIGATURE: char = super::ALLAH_LIGATURE;
}

/// Which substitutions the shaper performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapingOptions {
    /// Replace the undiacritized word "الله" with U+FDF2.
    pub religious_ligature: bool,
    /// Merge lam + alef (and lam + alef with hamza above) into one glyph.
    pub lam_alef_ligatures: bool,
    /// Merge a vowel followed by shadda into one glyph.
    pub shadda_ligatures: bool,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            religious_ligature: true,
            lam_alef_ligatures: true,
            shadda_ligatures: true,
        }
    }
}

impl ShapingOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&source).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded shaping options from {}: {:?}", path.display(), options);
        Ok(options)
    }
}
