//! sqltok CLI
//!
//! Playground that tokenises a SQL query and prints the result.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqltok::{Fragment, Lexer, Token};

/// Print the tokens of a SQL query.
#[derive(Parser)]
#[command(name = "sqltok")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query to tokenise. Read from --file or stdin when omitted.
    query: Option<String>,

    /// Read the query from a file.
    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, env = "SQLTOK_FORMAT", default_value_t = Format::Text)]
    format: Format,

    /// Print the splitter's fragments instead of tokens.
    #[arg(long)]
    fragments: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per item.
    Text,
    /// A pretty-printed JSON array.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let query = read_query(&cli)?;
    debug!(bytes = query.len(), "read query");

    let lexer = Lexer::new(&query);
    let output = if cli.fragments {
        let fragments = lexer.split().context("failed to split query")?;
        render_fragments(&fragments, cli.format)?
    } else {
        let tokens = lexer.tokenize().context("failed to tokenize query")?;
        render_tokens(&tokens, cli.format)?
    };
    println!("{output}");

    Ok(())
}

fn read_query(cli: &Cli) -> anyhow::Result<String> {
    if let Some(query) = &cli.query {
        return Ok(query.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read query from {}", path.display()));
    }
    let mut query = String::new();
    std::io::stdin()
        .read_to_string(&mut query)
        .context("failed to read query from stdin")?;
    Ok(query)
}

fn render_tokens(tokens: &[Token], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(tokens)?),
    }
}

fn render_fragments(fragments: &[Fragment<'_>], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(fragments
            .iter()
            .map(|f| format!("{}..{}\t{}", f.span.start, f.span.end, f.text))
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(fragments)?),
    }
}
