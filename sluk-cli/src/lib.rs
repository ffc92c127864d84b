//! sluk CLI: look up Unicode symbols by name and print them.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use sluk_core::codepoint::{decode, escape_literal};
use sluk_core::dataset::DataSource;
use sluk_core::output::{write_json_pretty, write_ndjson};
use sluk_core::query::SearchQuery;
use sluk_core::search::{search, SymbolMatch};

/// CLI entrypoint for sluk.
#[derive(Debug, Parser)]
#[command(
    name = "sluk",
    about = "sluk (symbol lookup) finds Unicode symbols by name and prints them",
    long_about = "Look up a symbol in the Unicode name database and print it.\n\
                  For example:\n  sluk white heavy check mark\n  \u{2705}"
)]
pub struct Cli {
    /// Words of the search term, joined with spaces
    #[arg(required = true, value_name = "SEARCH-TERM", value_hint = ValueHint::Other)]
    term: Vec<String>,

    /// Only report descriptions equal to the search term
    #[arg(short = 'e', long = "exact-match", action = ArgAction::SetTrue)]
    exact: bool,

    /// Print the unicode escape value next to each symbol
    #[arg(short = 'p', long = "print-unicode", action = ArgAction::SetTrue)]
    print_unicode: bool,

    /// Print the unicode description next to each symbol
    #[arg(short = 'd', long = "print-description", action = ArgAction::SetTrue)]
    print_description: bool,

    /// Print a diagnostic line for every match
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// File of `CODEPOINT ; DESCRIPTION` lines overriding the built-in dataset
    #[arg(short = 'f', long = "db-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    db_file: Option<PathBuf>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", value_enum, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// How plain-text rendering decorates each match.
#[derive(Debug, Clone, Copy)]
struct RenderOptions {
    print_unicode: bool,
    print_description: bool,
    verbose: bool,
    color: bool,
}

/// Parse CLI args and run the lookup.
pub fn run() -> Result<()> {
    run_lookup(Cli::parse())
}

fn run_lookup(cli: Cli) -> Result<()> {
    let query = SearchQuery::new(&cli.term, cli.exact);
    let db = DataSource::from_arg(cli.db_file).load()?;
    let matches = search(&db, &query)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if cli.ndjson {
        write_ndjson(&matches, &mut handle)?;
    } else if cli.json {
        write_json_pretty(&matches, &mut handle)?;
    } else {
        let opts = RenderOptions {
            print_unicode: cli.print_unicode,
            print_description: cli.print_description,
            verbose: cli.verbose,
            color: use_color,
        };
        write_plain(&matches, &mut handle, &opts)?;
    }

    Ok(())
}

fn write_plain(matches: &[SymbolMatch], mut w: impl Write, opts: &RenderOptions) -> Result<()> {
    for item in matches {
        let symbol = decode(&item.code)
            .with_context(|| format!("rendering code point {:?}", item.code))?;
        let rendered = apply_color(&symbol.to_string(), opts.color, AnsiColor::Cyan);
        write!(w, "{rendered}")?;

        if opts.print_unicode {
            write!(w, "\t{}", escape_literal(&item.code))?;
        }
        if opts.print_description {
            write!(w, "\t{}", item.description)?;
        }
        writeln!(w)?;

        if opts.verbose {
            writeln!(w, "{item:?}")?;
        }
    }

    Ok(())
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
