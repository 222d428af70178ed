// Result types of a spell-check request, shared by the pipeline and the CLI

/// Whether a token is a dictionary word.
///
/// Suggestions are only computed for misspelled tokens; a correct word never
/// carries suggestions, even when it is also a prefix of longer words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The token is a complete dictionary word.
    Correct,
    /// The token is not a word. `suggestions` holds dictionary words that
    /// extend the token, in traversal order (possibly empty).
    Misspelled { suggestions: Vec<String> },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Suggestions for a misspelled token, empty for a correct one.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Verdict::Correct => &[],
            Verdict::Misspelled { suggestions } => suggestions,
        }
    }
}

/// Outcome of checking one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The token as checked.
    pub token: String,
    /// Language whose dictionary answered.
    pub language: String,
    /// Whether the language was detected from the token rather than given
    /// by the caller.
    pub detected: bool,
    /// Detected (or requested) language that had no dictionary and was
    /// replaced by the default language.
    pub fallback_from: Option<String>,
    pub verdict: Verdict,
}

impl CheckOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback_from.is_some()
    }
}
