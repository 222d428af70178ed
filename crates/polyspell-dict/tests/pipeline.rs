//! End-to-end tests: JSON config and word-list files on disk through the
//! full detect -> load -> validate -> suggest pipeline.

use std::fs;
use std::path::Path;

use polyspell_core::Verdict;
use polyspell_dict::{
    CheckError, Config, DictionaryError, FileSource, ScriptDetector, SourceError, SpellChecker,
};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(dir: &Path) -> Config {
    let en = write(dir, "en.txt", "cat\ncar\n\n  cart  \ndog\n");
    let hi = write(dir, "hi_IN.txt", "नमस्ते\nनमक\r\nपानी\n");
    let json = format!(
        r#"{{
            "default_language": "hi",
            "suggestion_limit": 5,
            "dictionaries": {{ "en": {en:?}, "hi": {hi:?}, "gu": {gu:?} }}
        }}"#,
        en = en.display().to_string(),
        hi = hi.display().to_string(),
        gu = dir.join("gu.txt").display().to_string(),
    );
    let path = write(dir, "polyspell.json", &json);
    let config = Config::load(&path).unwrap();
    config.validate().unwrap();
    config
}

fn checker_for(config: &Config) -> SpellChecker<FileSource, ScriptDetector> {
    SpellChecker::new(config.file_source(), config.detector(), config.check_options())
}

#[test]
fn english_words_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut checker = checker_for(&config);

    assert!(checker.check("cart").unwrap().is_correct());

    let outcome = checker.check("ca").unwrap();
    assert_eq!(outcome.language, "en");
    let mut suggestions = outcome.verdict.suggestions().to_vec();
    suggestions.sort();
    assert_eq!(suggestions, ["car", "cart", "cat"]);
}

#[test]
fn hindi_words_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut checker = checker_for(&config);

    // CRLF line endings are trimmed.
    assert!(checker.check("नमक").unwrap().is_correct());
    let outcome = checker.check("पा").unwrap();
    assert_eq!(outcome.language, "hi");
    assert_eq!(
        outcome.verdict,
        Verdict::Misspelled {
            suggestions: vec!["पानी".to_string()]
        }
    );
}

#[test]
fn missing_word_list_is_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut checker = checker_for(&config);

    // "gu" is configured but its file does not exist.
    let err = checker.check("નમસ્તે").unwrap_err();
    match err {
        CheckError::Dictionary(DictionaryError::Unavailable { language, source }) => {
            assert_eq!(language, "gu");
            assert!(matches!(source, SourceError::Io { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }

    // The session continues with the other languages.
    assert!(checker.check("dog").unwrap().is_correct());
    assert!(!checker.registry().is_loaded("gu"));
}

#[test]
fn unsupported_language_uses_configured_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut checker = checker_for(&config);

    // Cyrillic detects as "ru", which has no dictionary.
    let outcome = checker.check("нет").unwrap();
    assert_eq!(outcome.language, "hi");
    assert_eq!(outcome.fallback_from.as_deref(), Some("ru"));
    assert!(!outcome.is_correct());
}

#[test]
fn each_dictionary_is_read_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let mut checker = checker_for(&config);

    assert!(checker.check("dog").unwrap().is_correct());
    // Remove the file: a second lookup must not need it.
    fs::remove_file(dir.path().join("en.txt")).unwrap();
    assert!(checker.check("cat").unwrap().is_correct());
    assert_eq!(checker.registry().get("en").unwrap().len(), 4);
}

#[test]
fn script_override_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.scripts.insert(polyspell_core::Script::Latin, "hi".into());
    let mut checker = checker_for(&config);

    let outcome = checker.check("cat").unwrap();
    assert_eq!(outcome.language, "hi");
    assert!(outcome.fallback_from.is_none());
    assert!(!outcome.is_correct());
}

#[test]
fn marathi_word_found_next_to_hindi() {
    let dir = tempfile::tempdir().unwrap();
    let hi = write(dir.path(), "hi_IN.txt", "नमस्ते\nपानी\n");
    let mr = write(dir.path(), "mr_IN.txt", "आहे\nआहेत\nमराठी\n");
    let json = format!(
        r#"{{ "default_language": "hi", "dictionaries": {{ "hi": {hi:?}, "mr": {mr:?} }} }}"#,
        hi = hi.display().to_string(),
        mr = mr.display().to_string(),
    );
    let config = Config::from_json(&json).unwrap();
    config.validate().unwrap();
    let mut checker = checker_for(&config);

    let outcome = checker.check("आहे").unwrap();
    assert_eq!(outcome.language, "mr");
    assert!(outcome.is_correct());
    assert!(outcome.fallback_from.is_none());

    let outcome = checker.check("मरा").unwrap();
    assert_eq!(outcome.language, "mr");
    assert_eq!(outcome.verdict.suggestions(), ["मराठी"]);

    assert!(checker.check("नमस्ते").unwrap().is_correct());
    assert_eq!(checker.check("नमस्ते").unwrap().language, "hi");
}
