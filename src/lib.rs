// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Harf: Arabic contextual shaping for left-to-right glyph placement.
//!
//! [`shape_arabic`] takes logically ordered Arabic text and returns
//! presentation-form code points in visual order. The caller must use a
//! font that covers every code point returned.

use std::io::{BufRead, Write};

use anyhow::Context;

mod cli;
mod error;
pub mod settings;
pub mod shaping;

pub use error::SettingsError;
pub use settings::ShapingOptions;
pub use shaping::{ArabicShaper, shadda_ligature};

use cli::CliArgs;

/// Shape Arabic text with the default options and return it in visual order.
///
/// ```
/// // lam + fatha + alef becomes fatha followed by the isolated lam-alef ligature
/// assert_eq!(harf::shape_arabic("لَا"), "\u{064E}\u{FEFB}");
/// assert_eq!(harf::shape_arabic(""), "");
/// ```
pub fn shape_arabic(text: &str) -> String {
    ArabicShaper::new().shape(text)
}

/// Entry point for the `harf` command-line tool
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("harf=info".parse()?),
        )
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let options = match &args.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            ShapingOptions::load(path)?
        }
        None => ShapingOptions::default(),
    };
    let shaper = ArabicShaper::with_options(options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.sample {
        for verse in cli::SAMPLE_VERSES {
            writeln!(out, "{}", args.render(&shaper, verse))?;
        }
    }

    for text in &args.texts {
        writeln!(out, "{}", args.render(&shaper, text))?;
    }

    if !args.sample && args.texts.is_empty() {
        let stdin = std::io::stdin();
        for (index, line) in stdin.lock().lines().enumerate() {
            let line =
                line.with_context(|| format!("Failed to read line {} from stdin", index + 1))?;
            writeln!(out, "{}", args.render(&shaper, &line))?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
