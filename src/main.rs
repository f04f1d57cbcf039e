// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Harf: shape Arabic text for left-to-right glyph placement

fn main() -> anyhow::Result<()> {
    harf::run()
}
