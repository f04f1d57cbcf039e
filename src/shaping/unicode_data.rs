// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic letter table and presentation-form registry.
//!
//! Every letter carries its base code point and the four presentation forms
//! from the Arabic Presentation Forms-A/B blocks. Letters that never connect
//! forward repeat their base code point in the initial slot (and sometimes
//! the medial slot) since those shapes do not exist.
//!
//! See: https://www.unicode.org/charts/PDF/UFE70.pdf

use std::collections::HashMap;
use std::sync::LazyLock;

use super::PositionalForm;

/// How a letter connects to the letter that follows it in logical order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoiningType {
    /// Connects on both sides.
    /// Examples: beh, seen, meem, lam, tatweel
    #[default]
    Dual,

    /// Connects only to the preceding letter. A letter following one of
    /// these starts a new joining chain.
    /// Examples: alef, dal, reh, waw, teh marbuta, hamza
    RightOnly,
}

impl JoiningType {
    /// Can this letter connect forward (to the left in RTL)?
    #[inline]
    pub fn joins_forward(&self) -> bool {
        matches!(self, Self::Dual)
    }
}

/// One Arabic letter with its presentation forms.
///
/// Field names follow the OpenType positional feature tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Letter {
    /// Short glyph-style name, e.g. `"beh"`
    pub name: &'static str,
    /// Canonical (unjoined) code point
    pub base: char,
    pub isol: char,
    pub init: char,
    pub medi: char,
    pub fina: char,
    pub joining: JoiningType,
}

impl Letter {
    const fn dual(
        name: &'static str,
        base: char,
        isol: char,
        init: char,
        medi: char,
        fina: char,
    ) -> Self {
        Self {
            name,
            base,
            isol,
            init,
            medi,
            fina,
            joining: JoiningType::Dual,
        }
    }

    const fn right_only(
        name: &'static str,
        base: char,
        isol: char,
        init: char,
        medi: char,
        fina: char,
    ) -> Self {
        Self {
            name,
            base,
            isol,
            init,
            medi,
            fina,
            joining: JoiningType::RightOnly,
        }
    }

    /// The code point for this letter in the given positional form.
    pub fn form(&self, form: PositionalForm) -> char {
        match form {
            PositionalForm::Isolated => self.isol,
            PositionalForm::Initial => self.init,
            PositionalForm::Medial => self.medi,
            PositionalForm::Final => self.fina,
        }
    }

    /// All five code points owned by this letter.
    pub fn codepoints(&self) -> [char; 5] {
        [self.base, self.isol, self.init, self.medi, self.fina]
    }

    pub fn is_right_joining_only(&self) -> bool {
        !self.joining.joins_forward()
    }
}

#[rustfmt::skip]
mod table {
    use super::Letter;

    //                                   name                base        isol        init        medi        fina
    pub const ALEF_HAMZA_ABOVE: Letter = Letter::right_only("alefHamzaabove", '\u{0623}', '\u{FE83}', '\u{0623}', '\u{FE84}', '\u{FE84}');
    pub const ALEF: Letter = Letter::right_only("alef", '\u{0627}', '\u{FE8D}', '\u{0627}', '\u{FE8E}', '\u{FE8E}');
    pub const ALEF_MADDA_ABOVE: Letter = Letter::right_only("alefMadda", '\u{0622}', '\u{FE81}', '\u{0622}', '\u{FE82}', '\u{FE82}');
    pub const HAMZA: Letter = Letter::right_only("hamza", '\u{0621}', '\u{FE80}', '\u{0621}', '\u{0621}', '\u{0621}');
    pub const WAW_HAMZA_ABOVE: Letter = Letter::right_only("wawHamzaabove", '\u{0624}', '\u{FE85}', '\u{0624}', '\u{FE86}', '\u{FE86}');
    pub const ALEF_HAMZA_BELOW: Letter = Letter::right_only("alefHamzabelow", '\u{0625}', '\u{FE87}', '\u{0625}', '\u{FE88}', '\u{FE88}');
    pub const YEH_HAMZA_ABOVE: Letter = Letter::dual("yehHamzaabove", '\u{0626}', '\u{FE89}', '\u{FE8B}', '\u{FE8C}', '\u{FE8A}');
    pub const BEH: Letter = Letter::dual("beh", '\u{0628}', '\u{FE8F}', '\u{FE91}', '\u{FE92}', '\u{FE90}');
    pub const PEH: Letter = Letter::dual("peh", '\u{067E}', '\u{FB56}', '\u{FB58}', '\u{FB59}', '\u{FB57}');
    pub const TEH: Letter = Letter::dual("teh", '\u{062A}', '\u{FE95}', '\u{FE97}', '\u{FE98}', '\u{FE96}');
    pub const TEH_MARBUTA: Letter = Letter::right_only("tehMarbuta", '\u{0629}', '\u{FE93}', '\u{0629}', '\u{0629}', '\u{FE94}');
    pub const THEH: Letter = Letter::dual("theh", '\u{062B}', '\u{FE99}', '\u{FE9B}', '\u{FE9C}', '\u{FE9A}');
    pub const JEEM: Letter = Letter::dual("jeem", '\u{062C}', '\u{FE9D}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}');
    pub const TCHEH: Letter = Letter::dual("tcheh", '\u{0686}', '\u{FB7A}', '\u{FB7C}', '\u{FB7D}', '\u{FB7B}');
    pub const HAH: Letter = Letter::dual("hah", '\u{062D}', '\u{FEA1}', '\u{FEA3}', '\u{FEA4}', '\u{FEA2}');
    pub const KHAH: Letter = Letter::dual("khah", '\u{062E}', '\u{FEA5}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}');
    pub const DAL: Letter = Letter::right_only("dal", '\u{062F}', '\u{FEA9}', '\u{062F}', '\u{FEAA}', '\u{FEAA}');
    pub const THAL: Letter = Letter::right_only("thal", '\u{0630}', '\u{FEAB}', '\u{0630}', '\u{FEAC}', '\u{FEAC}');
    pub const REH: Letter = Letter::right_only("reh", '\u{0631}', '\u{FEAD}', '\u{0631}', '\u{FEAE}', '\u{FEAE}');
    pub const JEH: Letter = Letter::dual("jeh", '\u{0698}', '\u{FB8A}', '\u{0698}', '\u{FB8B}', '\u{FB8B}');
    pub const ZAIN: Letter = Letter::right_only("zain", '\u{0632}', '\u{FEAF}', '\u{0632}', '\u{FEB0}', '\u{FEB0}');
    pub const SEEN: Letter = Letter::dual("seen", '\u{0633}', '\u{FEB1}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}');
    pub const SHEEN: Letter = Letter::dual("sheen", '\u{0634}', '\u{FEB5}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}');
    pub const SAD: Letter = Letter::dual("sad", '\u{0635}', '\u{FEB9}', '\u{FEBB}', '\u{FEBC}', '\u{FEBA}');
    pub const DAD: Letter = Letter::dual("dad", '\u{0636}', '\u{FEBD}', '\u{FEBF}', '\u{FEC0}', '\u{FEBE}');
    pub const TAH: Letter = Letter::dual("tah", '\u{0637}', '\u{FEC1}', '\u{FEC3}', '\u{FEC4}', '\u{FEC2}');
    pub const ZAH: Letter = Letter::dual("zah", '\u{0638}', '\u{FEC5}', '\u{FEC7}', '\u{FEC8}', '\u{FEC6}');
    pub const AIN: Letter = Letter::dual("ain", '\u{0639}', '\u{FEC9}', '\u{FECB}', '\u{FECC}', '\u{FECA}');
    pub const GHAIN: Letter = Letter::dual("ghain", '\u{063A}', '\u{FECD}', '\u{FECF}', '\u{FED0}', '\u{FECE}');
    pub const FEH: Letter = Letter::dual("feh", '\u{0641}', '\u{FED1}', '\u{FED3}', '\u{FED4}', '\u{FED2}');
    pub const QAF: Letter = Letter::dual("qaf", '\u{0642}', '\u{FED5}', '\u{FED7}', '\u{FED8}', '\u{FED6}');
    pub const KAF: Letter = Letter::dual("kaf", '\u{0643}', '\u{FED9}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}');
    pub const KEHEH: Letter = Letter::dual("keheh", '\u{06A9}', '\u{FB8E}', '\u{FB90}', '\u{FB91}', '\u{FB8F}');
    pub const GAF: Letter = Letter::dual("gaf", '\u{06AF}', '\u{FB92}', '\u{FB94}', '\u{FB95}', '\u{FB93}');
    pub const LAM: Letter = Letter::dual("lam", '\u{0644}', '\u{FEDD}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}');
    pub const MEEM: Letter = Letter::dual("meem", '\u{0645}', '\u{FEE1}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}');
    pub const NOON: Letter = Letter::dual("noon", '\u{0646}', '\u{FEE5}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}');
    pub const HEH: Letter = Letter::dual("heh", '\u{0647}', '\u{FEE9}', '\u{FEEB}', '\u{FEEC}', '\u{FEEA}');
    pub const WAW: Letter = Letter::right_only("waw", '\u{0648}', '\u{FEED}', '\u{0648}', '\u{FEEE}', '\u{FEEE}');
    pub const FARSI_YEH: Letter = Letter::dual("yehFarsi", '\u{06CC}', '\u{FBFC}', '\u{FBFE}', '\u{FBFF}', '\u{FBFD}');
    pub const YEH: Letter = Letter::dual("yeh", '\u{064A}', '\u{FEF1}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}');
    pub const ALEF_MAKSURA: Letter = Letter::right_only("alefMaksura", '\u{0649}', '\u{FEEF}', '\u{0649}', '\u{FEF0}', '\u{FEF0}');
    pub const TATWEEL: Letter = Letter::dual("tatweel", '\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}');

    // Lam-Alef ligatures have no separate initial shape; the slot repeats the isolated form.
    pub const LAM_ALEF: Letter = Letter::dual("lam_alef", '\u{FEFB}', '\u{FEFB}', '\u{FEFB}', '\u{FEFC}', '\u{FEFC}');
    pub const LAM_ALEF_HAMZA_ABOVE: Letter = Letter::dual("lam_alefHamzaabove", '\u{FEF7}', '\u{FEF7}', '\u{FEF7}', '\u{FEF8}', '\u{FEF8}');
}

pub use table::*;

/// The fixed letter set, in table order.
pub const LETTERS: &[Letter] = &[
    ALEF_HAMZA_ABOVE,
    ALEF,
    ALEF_MADDA_ABOVE,
    HAMZA,
    WAW_HAMZA_ABOVE,
    ALEF_HAMZA_BELOW,
    YEH_HAMZA_ABOVE,
    BEH,
    PEH,
    TEH,
    TEH_MARBUTA,
    THEH,
    JEEM,
    TCHEH,
    HAH,
    KHAH,
    DAL,
    THAL,
    REH,
    JEH,
    ZAIN,
    SEEN,
    SHEEN,
    SAD,
    DAD,
    TAH,
    ZAH,
    AIN,
    GHAIN,
    FEH,
    QAF,
    KAF,
    KEHEH,
    GAF,
    LAM,
    MEEM,
    NOON,
    HEH,
    WAW,
    FARSI_YEH,
    YEH,
    ALEF_MAKSURA,
    TATWEEL,
    LAM_ALEF,
    LAM_ALEF_HAMZA_ABOVE,
];

/// Maps every code point of every letter back to its owner.
static REGISTRY: LazyLock<HashMap<char, &'static Letter>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(LETTERS.len() * 5);
    for letter in LETTERS {
        for c in letter.codepoints() {
            map.insert(c, letter);
        }
    }
    map
});

/// Find the letter owning `c` in any of its five roles.
///
/// Returns `None` for anything outside the fixed letter set, including
/// diacritics, spaces, Latin text and the reserved word ligatures.
#[inline]
pub fn resolve(c: char) -> Option<&'static Letter> {
    REGISTRY.get(&c).copied()
}

/// Check if a character belongs to the fixed Arabic letter set.
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    resolve(c).is_some()
}
