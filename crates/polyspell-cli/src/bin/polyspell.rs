// polyspell: Interactive multilingual spell checker.
//
// Prompts for one word at a time, detects its language from the script it
// is written in, and reports whether it is spelled correctly. Misspelled
// words get up to N dictionary words that extend them. Type `exit` (any
// case) or end the input to quit.
//
// Usage:
//   polyspell [-c CONFIG] [-d LANG=PATH]... [--default-language LANG] [-l LANG] [-n N]

use std::io;

use clap::Parser;
use polyspell_cli::CommonArgs;

#[derive(Debug, Parser)]
#[command(name = "polyspell", version, about = "Interactive multilingual spell checker")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    polyspell_cli::init_logging();
    let cli = Cli::parse();

    let config = polyspell_cli::load_config(&cli.common)?;
    let mut checker = polyspell_cli::build_checker(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    polyspell_cli::run_session(
        &mut checker,
        cli.common.language.as_deref(),
        stdin.lock(),
        stdout.lock(),
    )?;
    Ok(())
}
