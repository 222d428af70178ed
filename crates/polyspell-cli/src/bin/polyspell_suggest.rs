// polyspell-suggest: Generate prefix suggestions for words.
//
// Checks each word given on the command line, or each line of stdin when
// no words are given. Correct words are printed as-is; misspelled words
// are followed by the dictionary words that extend them.
//
// Usage:
//   polyspell-suggest [-c CONFIG] [-d LANG=PATH]... [-l LANG] [-n N] [WORD...]

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use polyspell_cli::CommonArgs;
use polyspell_core::Verdict;
use polyspell_dict::{FileSource, ScriptDetector, SpellChecker};

#[derive(Debug, Parser)]
#[command(name = "polyspell-suggest", version, about = "Generate prefix suggestions")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Words to check; read from stdin when absent
    words: Vec<String>,
}

fn suggest_word<W: Write>(
    checker: &mut SpellChecker<FileSource, ScriptDetector>,
    language: Option<&str>,
    word: &str,
    out: &mut W,
) -> io::Result<()> {
    match polyspell_cli::check_token(checker, language, word) {
        Ok(outcome) => match outcome.verdict {
            Verdict::Correct => writeln!(out, "{word} (correct)"),
            Verdict::Misspelled { suggestions } if suggestions.is_empty() => {
                writeln!(out, "{word}: (no suggestions)")
            }
            Verdict::Misspelled { suggestions } => {
                writeln!(out, "{word}:")?;
                for s in &suggestions {
                    writeln!(out, "  {s}")?;
                }
                Ok(())
            }
        },
        Err(err) => {
            tracing::warn!(word, error = %err, "check failed");
            writeln!(out, "{word}: (error: {err})")
        }
    }
}

fn main() -> anyhow::Result<()> {
    polyspell_cli::init_logging();
    let cli = Cli::parse();

    let config = polyspell_cli::load_config(&cli.common)?;
    let mut checker = polyspell_cli::build_checker(&config);
    let language = cli.common.language.as_deref();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(&mut checker, language, word, &mut out)?;
        }
    } else {
        for word in &cli.words {
            suggest_word(&mut checker, language, word, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
