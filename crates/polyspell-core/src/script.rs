// Writing-system classification of characters
//
// The language detector works on scripts, not on languages: every letter is
// mapped to the Unicode block it belongs to and the dominant block decides.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Writing system of a single character.
///
/// `Common` covers characters shared by all scripts (whitespace, ASCII
/// digits, punctuation). `Unknown` is a letter from a block not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Common,
    Unknown,
}

impl Script {
    /// All scripts that identify a writing system (everything but
    /// `Common` and `Unknown`).
    pub const LETTER_SCRIPTS: [Script; 15] = [
        Script::Latin,
        Script::Greek,
        Script::Cyrillic,
        Script::Hebrew,
        Script::Arabic,
        Script::Devanagari,
        Script::Bengali,
        Script::Gurmukhi,
        Script::Gujarati,
        Script::Oriya,
        Script::Tamil,
        Script::Telugu,
        Script::Kannada,
        Script::Malayalam,
        Script::Thai,
    ];

    /// Lowercase name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Greek => "greek",
            Script::Cyrillic => "cyrillic",
            Script::Hebrew => "hebrew",
            Script::Arabic => "arabic",
            Script::Devanagari => "devanagari",
            Script::Bengali => "bengali",
            Script::Gurmukhi => "gurmukhi",
            Script::Gujarati => "gujarati",
            Script::Oriya => "oriya",
            Script::Tamil => "tamil",
            Script::Telugu => "telugu",
            Script::Kannada => "kannada",
            Script::Malayalam => "malayalam",
            Script::Thai => "thai",
            Script::Common => "common",
            Script::Unknown => "unknown",
        }
    }

    /// ISO 639-1 codes of the languages commonly written in this script,
    /// most widely used first.
    pub fn languages(self) -> &'static [&'static str] {
        match self {
            Script::Latin => &["en"],
            Script::Greek => &["el"],
            Script::Cyrillic => &["ru"],
            Script::Hebrew => &["he"],
            Script::Arabic => &["ar"],
            Script::Devanagari => &["hi", "mr", "ne", "sa"],
            Script::Bengali => &["bn"],
            Script::Gurmukhi => &["pa"],
            Script::Gujarati => &["gu"],
            Script::Oriya => &["or"],
            Script::Tamil => &["ta"],
            Script::Telugu => &["te"],
            Script::Kannada => &["kn"],
            Script::Malayalam => &["ml"],
            Script::Thai => &["th"],
            Script::Common | Script::Unknown => &[],
        }
    }

    /// The most widely used language written in this script.
    pub fn default_language(self) -> Option<&'static str> {
        self.languages().first().copied()
    }

    /// Whether this script identifies a writing system.
    pub fn is_letter_script(self) -> bool {
        !matches!(self, Script::Common | Script::Unknown)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Returns the script of a single character.
///
/// Combining vowel signs of the Indic scripts live in the same block as
/// their consonants, so a whole Devanagari word classifies as Devanagari.
pub fn script_of(c: char) -> Script {
    let cp = c as u32;
    match cp {
        0x41..=0x5A                         // A-Z
        | 0x61..=0x7A                       // a-z
        | 0xC0..=0xD6                       // À-Ö
        | 0xD8..=0xF6                       // Ø-ö
        | 0xF8..=0x024F                     // ø-ɏ (Latin Extended-A/B)
        | 0x1E00..=0x1EFF                   // Latin Extended Additional
        | 0xFB00..=0xFB06 => Script::Latin, // ligatures ﬀ-ﬆ
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F => Script::Arabic,
        0x0900..=0x097F | 0xA8E0..=0xA8FF => Script::Devanagari,
        0x0980..=0x09FF => Script::Bengali,
        0x0A00..=0x0A7F => Script::Gurmukhi,
        0x0A80..=0x0AFF => Script::Gujarati,
        0x0B00..=0x0B7F => Script::Oriya,
        0x0B80..=0x0BFF => Script::Tamil,
        0x0C00..=0x0C7F => Script::Telugu,
        0x0C80..=0x0CFF => Script::Kannada,
        0x0D00..=0x0D7F => Script::Malayalam,
        0x0E00..=0x0E7F => Script::Thai,
        _ if c.is_alphabetic() => Script::Unknown,
        _ => Script::Common,
    }
}

/// Returns the script used by most letters of `text`.
///
/// `Common` and `Unknown` characters do not vote. Ties go to the script that
/// appears first. Returns `None` when no character votes.
pub fn dominant_script(text: &str) -> Option<Script> {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for script in text.chars().map(script_of).filter(|s| s.is_letter_script()) {
        match counts.iter_mut().find(|(s, _)| *s == script) {
            Some((_, n)) => *n += 1,
            None => counts.push((script, 1)),
        }
    }

    let mut best: Option<(Script, usize)> = None;
    for (script, n) in counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((script, n));
        }
    }
    best.map(|(script, _)| script)
}
