// polyspell-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with --suggest)
//   E: word    (could not be checked; reason on stderr)
//
// Usage:
//   polyspell-spell [-c CONFIG] [-d LANG=PATH]... [-l LANG] [-s] [-n N]

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use polyspell_cli::CommonArgs;

#[derive(Debug, Parser)]
#[command(name = "polyspell-spell", version, about = "Check spelling of words from stdin")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Also print suggestions for misspelled words
    #[arg(short, long)]
    suggest: bool,
}

fn main() -> anyhow::Result<()> {
    polyspell_cli::init_logging();
    let cli = Cli::parse();

    let config = polyspell_cli::load_config(&cli.common)?;
    let mut checker = polyspell_cli::build_checker(&config);
    let language = cli.common.language.as_deref();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

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

        match polyspell_cli::check_token(&mut checker, language, word) {
            Ok(outcome) if outcome.is_correct() => writeln!(out, "C: {word}")?,
            Ok(outcome) => {
                writeln!(out, "W: {word}")?;
                if cli.suggest {
                    for suggestion in outcome.verdict.suggestions() {
                        writeln!(out, "S: {suggestion}")?;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(word, error = %err, "check failed");
                writeln!(out, "E: {word}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
