// SpellChecker: detect -> fall back -> load -> validate / suggest
//
// Owns the registry together with its collaborators, so dictionaries live
// exactly as long as the checker.

use polyspell_core::outcome::{CheckOutcome, Verdict};

use crate::config::{DEFAULT_LANGUAGE, DEFAULT_SUGGESTION_LIMIT};
use crate::detect::{DetectError, LanguageDetector};
use crate::registry::{DictionaryError, Registry};
use crate::source::WordListSource;

/// Error type for a single check request.
///
/// None of these end a session; the next request starts afresh.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The token was empty or whitespace.
    #[error("nothing to check")]
    EmptyToken,

    #[error("language detection failed: {0}")]
    Detect(#[from] DetectError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Options of a [`SpellChecker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Language substituted for a detected language without a dictionary.
    pub default_language: String,
    /// Maximum number of suggestions for a misspelled token.
    pub suggestion_limit: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Spell checker over a set of per-language dictionaries.
pub struct SpellChecker<S, D> {
    registry: Registry,
    source: S,
    detector: D,
    options: CheckOptions,
}

impl<S: WordListSource, D: LanguageDetector> SpellChecker<S, D> {
    pub fn new(source: S, detector: D, options: CheckOptions) -> Self {
        Self {
            registry: Registry::new(),
            source,
            detector,
            options,
        }
    }

    /// Check `token`, detecting its language first.
    ///
    /// When the detector offers several languages with a dictionary (one
    /// script, several languages), the first dictionary containing the token
    /// answers. Failing that, the first one with suggestions, then the most
    /// likely language.
    pub fn check(&mut self, token: &str) -> Result<CheckOutcome, CheckError> {
        let candidates = self.detector.candidates(token)?;
        tracing::debug!(token, ?candidates, "language detected");

        let supported: Vec<String> = candidates
            .iter()
            .filter(|language| self.source.supports(language))
            .cloned()
            .collect();
        let mut outcome = match (supported.as_slice(), candidates.first()) {
            ([language], _) | ([], Some(language)) => self.check_in(language, token)?,
            ([], None) => {
                let language = self.detector.detect(token)?;
                self.check_in(&language, token)?
            }
            (languages, _) => self.check_among(languages, token)?,
        };
        outcome.detected = true;
        Ok(outcome)
    }

    fn check_among(
        &mut self,
        languages: &[String],
        token: &str,
    ) -> Result<CheckOutcome, CheckError> {
        let mut best: Option<CheckOutcome> = None;
        let mut failure = None;
        for language in languages {
            let outcome = match self.check_in(language, token) {
                Ok(outcome) => outcome,
                Err(CheckError::Dictionary(err)) => {
                    tracing::debug!(
                        language = language.as_str(),
                        error = %err,
                        "skipping candidate"
                    );
                    if failure.is_none() {
                        failure = Some(err);
                    }
                    continue;
                }
                Err(err) => return Err(err),
            };
            if outcome.is_correct() {
                return Ok(outcome);
            }
            let has_suggestions = !outcome.verdict.suggestions().is_empty();
            if best
                .as_ref()
                .is_none_or(|b| has_suggestions && b.verdict.suggestions().is_empty())
            {
                best = Some(outcome);
            }
        }
        match (best, failure) {
            (Some(outcome), _) => Ok(outcome),
            (None, Some(err)) => Err(err.into()),
            (None, None) => {
                let language = self.options.default_language.clone();
                self.check_in(&language, token)
            }
        }
    }

    /// Check `token` against the dictionary of `language`.
    ///
    /// A language the source has no word list for is replaced by the
    /// default language. Suggestions are only computed for tokens that are
    /// not words.
    pub fn check_in(&mut self, language: &str, token: &str) -> Result<CheckOutcome, CheckError> {
        if token.trim().is_empty() {
            return Err(CheckError::EmptyToken);
        }
        let (language, fallback_from) = self.resolve(language);
        self.registry.ensure_loaded(&language, &self.source)?;

        let verdict = if self.registry.is_valid_word(&language, token)? {
            Verdict::Correct
        } else {
            Verdict::Misspelled {
                suggestions: self.registry.suggest(
                    &language,
                    token,
                    self.options.suggestion_limit,
                )?,
            }
        };

        Ok(CheckOutcome {
            token: token.to_owned(),
            language,
            detected: false,
            fallback_from,
            verdict,
        })
    }

    /// The language whose dictionary answers for `language`, plus the
    /// replaced code when the default had to be substituted.
    pub fn resolve(&self, language: &str) -> (String, Option<String>) {
        if self.source.supports(language) {
            return (language.to_owned(), None);
        }
        tracing::info!(
            language,
            default = %self.options.default_language,
            "unsupported language, using default"
        );
        (
            self.options.default_language.clone(),
            Some(language.to_owned()),
        )
    }

    /// Load the dictionary for `language` now instead of on first use.
    pub fn preload(&mut self, language: &str) -> Result<(), CheckError> {
        let (language, _) = self.resolve(language);
        self.registry.ensure_loaded(&language, &self.source)?;
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Set the maximum number of suggestions to return.
    pub fn set_suggestion_limit(&mut self, value: usize) {
        self.options.suggestion_limit = value;
    }

    /// Set the language used for unsupported detections.
    pub fn set_default_language(&mut self, value: impl Into<String>) {
        self.options.default_language = value.into();
    }
}
