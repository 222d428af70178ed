// polyspell-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use polyspell_core::outcome::{CheckOutcome, Verdict};
use polyspell_dict::{
    CheckError, Config, FileSource, LanguageDetector, ScriptDetector, SpellChecker,
    WordListSource,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing` directives).
pub const LOG_ENV: &str = "POLYSPELL_LOG";

/// Config file name looked up in the current directory.
const LOCAL_CONFIG: &str = "polyspell.json";

/// Config file name inside configuration directories.
const CONFIG_FILE: &str = "config.json";

/// Options shared by all tools.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(short, long, env = "POLYSPELL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Word list for a language, overriding the config (repeatable)
    #[arg(short = 'd', long = "dict", value_name = "LANG=PATH", value_parser = parse_dict_entry)]
    pub dicts: Vec<(String, PathBuf)>,

    /// Language used when the detected one has no dictionary
    #[arg(long, value_name = "LANG")]
    pub default_language: Option<String>,

    /// Check every word against this language instead of detecting it
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Maximum number of suggestions
    #[arg(short = 'n', long = "max-suggestions", value_name = "N")]
    pub max_suggestions: Option<usize>,
}

/// Parse a `LANG=PATH` dictionary argument.
pub fn parse_dict_entry(value: &str) -> Result<(String, PathBuf), String> {
    let (language, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LANG=PATH, got '{value}'"))?;
    let (language, path) = (language.trim(), path.trim());
    if language.is_empty() || path.is_empty() {
        return Err(format!("expected LANG=PATH, got '{value}'"));
    }
    Ok((language.to_string(), PathBuf::from(path)))
}

/// Install the stderr log subscriber. Filter from `POLYSPELL_LOG`,
/// `warn` when unset or invalid.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Directories searched for a config file when none is given explicitly.
///
/// Search order:
/// 1. `$XDG_CONFIG_HOME/polyspell/config.json` or `~/.config/polyspell/config.json`
/// 2. `/etc/polyspell/config.json`
/// 3. `./polyspell.json`
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = config_home() {
        paths.push(dir.join("polyspell").join(CONFIG_FILE));
    }
    paths.push(PathBuf::from("/etc/polyspell").join(CONFIG_FILE));
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_CONFIG));
    }

    paths
}

fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
}

/// Read the configuration file named by `explicit`, or the first existing
/// file of `search_paths`, or fall back to the built-in defaults.
pub fn read_config(explicit: Option<&Path>, search_paths: &[PathBuf]) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path).with_context(|| format!("loading {}", path.display()));
    }
    match search_paths.iter().find(|p| p.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            Config::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Apply command-line overrides on top of a loaded configuration.
pub fn apply_args(config: &mut Config, args: &CommonArgs) {
    for (language, path) in &args.dicts {
        config.dictionaries.insert(language.clone(), path.clone());
    }
    if let Some(language) = &args.default_language {
        config.default_language = language.clone();
    }
    if let Some(limit) = args.max_suggestions {
        config.suggestion_limit = limit;
    }
}

/// Build the effective configuration: file, then environment, then flags.
pub fn load_config(args: &CommonArgs) -> anyhow::Result<Config> {
    let mut config = read_config(args.config.as_deref(), &config_search_paths())?;
    config.apply_env();
    apply_args(&mut config, args);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Spell checker over the configured word-list files.
pub fn build_checker(config: &Config) -> SpellChecker<FileSource, ScriptDetector> {
    SpellChecker::new(config.file_source(), config.detector(), config.check_options())
}

/// Check `token` in `language`, or in its detected language when `None`.
pub fn check_token<S, D>(
    checker: &mut SpellChecker<S, D>,
    language: Option<&str>,
    token: &str,
) -> Result<CheckOutcome, CheckError>
where
    S: WordListSource,
    D: LanguageDetector,
{
    match language {
        Some(language) => checker.check_in(language, token),
        None => checker.check(token),
    }
}

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

const PROMPT: &str = "Enter a word to spell check (type 'exit' to quit): ";

/// Whether `line` ends the session (`exit` in any case).
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// Write the human-readable report of one check.
pub fn write_report<W: Write>(out: &mut W, outcome: &CheckOutcome) -> io::Result<()> {
    match (&outcome.fallback_from, outcome.detected) {
        (Some(unsupported), true) => {
            writeln!(out, "Detected Language: {unsupported}")?;
            writeln!(
                out,
                "Unsupported language: {unsupported}. Falling back to default language ({}).",
                outcome.language
            )?;
        }
        (Some(unsupported), false) => {
            writeln!(
                out,
                "Language: {} (no dictionary for {unsupported})",
                outcome.language
            )?;
        }
        (None, true) => writeln!(out, "Detected Language: {}", outcome.language)?,
        (None, false) => writeln!(out, "Language: {}", outcome.language)?,
    }

    match &outcome.verdict {
        Verdict::Correct => {
            writeln!(out, "The spelling of '{}' is correct.", outcome.token)?;
        }
        Verdict::Misspelled { suggestions } if suggestions.is_empty() => {
            writeln!(
                out,
                "The spelling of '{}' is incorrect. No suggestions.",
                outcome.token
            )?;
        }
        Verdict::Misspelled { suggestions } => {
            writeln!(
                out,
                "The spelling of '{}' is incorrect. Suggestions:",
                outcome.token
            )?;
            for (i, suggestion) in suggestions.iter().enumerate() {
                writeln!(out, "{}. {suggestion}", i + 1)?;
            }
        }
    }
    Ok(())
}

/// Prompt for words until `exit` or end of input.
///
/// A failed check is reported and the session goes on.
pub fn run_session<S, D, R, W>(
    checker: &mut SpellChecker<S, D>,
    language: Option<&str>,
    input: R,
    mut out: W,
) -> io::Result<()>
where
    S: WordListSource,
    D: LanguageDetector,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let word = line.trim();

        if is_exit_command(word) {
            writeln!(out, "Exiting spell checker...")?;
            break;
        }
        if word.is_empty() {
            continue;
        }

        match check_token(checker, language, word) {
            Ok(outcome) => write_report(&mut out, &outcome)?,
            Err(err) => {
                tracing::debug!(word, error = %err, "check failed");
                writeln!(out, "Cannot check '{word}': {err}")?;
            }
        }
    }
    Ok(())
}
