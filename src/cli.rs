// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line argument handling for the `harf` binary.

use std::path::PathBuf;

use crate::shaping::{ArabicShaper, PositionalForm, resolve};

const USAGE: &str = "Usage: harf [--config FILE] [--codepoints] [--sample] [TEXT...]";

/// Surah Al-Fatiha
pub const SAMPLE_VERSES: &[&str] = &[
    "بِسْمِ اللهِ الرَّحْمَنِ الرَّحِيمِ",
    "الْحَمْدُ لله رَبِّ الْعَالَمِينَ",
    "الرَّحْمَنِ الرَّحِيمِ",
    "مَالِكِ يَوْمِ الدِّينِ",
    "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
    "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ",
    "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ",
    "غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub codepoints: bool,
    pub sample: bool,
    pub texts: Vec<String>,
}

impl CliArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let Some(path) = args.next() else {
                        anyhow::bail!("--config needs a file path\n{USAGE}");
                    };
                    parsed.config = Some(PathBuf::from(path));
                }
                "--codepoints" => parsed.codepoints = true,
                "--sample" => parsed.sample = true,
                "--" => parsed.texts.extend(args.by_ref()),
                flag if flag.starts_with("--") => {
                    anyhow::bail!("Unknown option: {flag}\n{USAGE}");
                }
                _ => parsed.texts.push(arg),
            }
        }

        Ok(parsed)
    }

    /// Shape one line and format it for output.
    pub fn render(&self, shaper: &ArabicShaper, text: &str) -> String {
        let shaped = shaper.shape(text);
        if !self.codepoints {
            return shaped;
        }

        shaped.chars().map(describe).collect::<Vec<_>>().join(" ")
    }
}

/// Format a code point as `U+XXXX`, with the letter and form when known.
pub fn describe(c: char) -> String {
    match resolve(c) {
        Some(letter) => match PositionalForm::of(letter, c) {
            Some(form) => format!("U+{:04X}({}.{})", c as u32, letter.name, form.feature_tag()),
            None => format!("U+{:04X}({})", c as u32, letter.name),
        },
        None => format!("U+{:04X}", c as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_texts_and_flags() {
        let parsed = CliArgs::parse(args(&["--codepoints", "بم", "--sample", "لا"])).unwrap();
        assert!(parsed.codepoints);
        assert!(parsed.sample);
        assert_eq!(parsed.texts, args(&["بم", "لا"]));
        assert_eq!(parsed.config, None);
    }

    #[test]
    fn test_parse_config() {
        let parsed = CliArgs::parse(args(&["--config", "harf.toml"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("harf.toml")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(CliArgs::parse(args(&["--config"])).is_err());
        assert!(CliArgs::parse(args(&["--bidi"])).is_err());
    }

    #[test]
    fn test_double_dash_ends_options() {
        let parsed = CliArgs::parse(args(&["--", "--sample"])).unwrap();
        assert!(!parsed.sample);
        assert_eq!(parsed.texts, args(&["--sample"]));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe('\u{FE91}'), "U+FE91(beh.init)");
        assert_eq!(describe('\u{0628}'), "U+0628(beh)");
        assert_eq!(describe(' '), "U+0020");
        assert_eq!(describe('\u{FDF2}'), "U+FDF2");
    }

    #[test]
    fn test_render_codepoints() {
        let cli = CliArgs {
            codepoints: true,
            ..CliArgs::default()
        };
        let shaper = ArabicShaper::new();
        assert_eq!(cli.render(&shaper, "بم"), "U+FEE2(meem.fina) U+FE91(beh.init)");
        assert_eq!(CliArgs::default().render(&shaper, "بم"), "\u{FEE2}\u{FE91}");
    }

    #[test]
    fn test_sample_verses_shape_without_leftover_base_letters() {
        let shaper = ArabicShaper::new();
        for verse in SAMPLE_VERSES {
            let shaped = shaper.shape(verse);
            assert!(!shaped.is_empty());
            // Dual-joining letters never survive in their base code point.
            assert!(
                !shaped.contains('\u{0628}') && !shaped.contains('\u{0644}'),
                "unshaped letter in {shaped:?}"
            );
        }
    }
}
