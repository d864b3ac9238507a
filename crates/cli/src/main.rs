// ABOUTME: CLI for copying credit card transactions out of a saved bank statement page.
// ABOUTME: Reads HTML from a file or stdin and copies the transaction JSON to the clipboard, a file or stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cardscrape_extract::{
    options, Extractor, HtmlDocument, MissingFieldPolicy, SystemClipboard,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Scrape credit card transactions from a statement page and copy them as JSON.
#[derive(Parser, Debug)]
#[command(name = "cardscrape")]
#[command(about = "Copy credit card transactions from a statement page as JSON", long_about = None)]
struct Args {
    /// Saved HTML page. Use "-" to read the page from stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Selector matching one transaction row.
    #[arg(long, default_value = options::DEFAULT_ROW_SELECTOR)]
    row_selector: String,

    /// Selector for the date inside a row.
    #[arg(long, default_value = options::DEFAULT_DATE_SELECTOR)]
    date_selector: String,

    /// Selector for the title inside a row.
    #[arg(long, default_value = options::DEFAULT_TITLE_SELECTOR)]
    title_selector: String,

    /// Selector for the amount inside a row.
    #[arg(long, default_value = options::DEFAULT_AMOUNT_SELECTOR)]
    amount_selector: String,

    /// Drop rows that lack a field instead of failing.
    #[arg(long, default_value_t = false)]
    skip_incomplete: bool,

    /// Print the JSON to stdout instead of copying it.
    #[arg(long, default_value_t = false, conflicts_with = "output")]
    stdout: bool,

    /// Write the JSON to a file instead of copying it.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Clipboard utility to pipe the JSON into (default: detected per platform).
    #[arg(long)]
    clipboard_cmd: Option<String>,

    /// Argument for --clipboard-cmd; repeat for several.
    #[arg(long = "clipboard-arg", requires = "clipboard_cmd", allow_hyphen_values = true)]
    clipboard_args: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let policy = if args.skip_incomplete {
        MissingFieldPolicy::SkipRow
    } else {
        MissingFieldPolicy::Abort
    };
    let extractor = Extractor::builder()
        .row_selector(&args.row_selector)
        .date_selector(&args.date_selector)
        .title_selector(&args.title_selector)
        .amount_selector(&args.amount_selector)
        .missing_field(policy)
        .build()?;

    let page = load_bytes(&args.input)?;
    tracing::debug!(input = %args.input, bytes = page.len(), "loaded page");
    let doc = HtmlDocument::parse_bytes(&page);

    if args.stdout {
        println!("{}", extractor.render(&doc)?);
        return Ok(());
    }

    if let Some(path) = &args.output {
        let json = extractor.render(&doc)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }

    let mut clipboard = match &args.clipboard_cmd {
        Some(program) => SystemClipboard::command(program, args.clipboard_args.iter().cloned()),
        None => SystemClipboard::detect(),
    };
    let copied = extractor.run(&doc, &mut clipboard)?;
    eprintln!(
        "copied {} transaction{} to clipboard",
        copied,
        if copied == 1 { "" } else { "s" }
    );

    Ok(())
}

fn load_bytes(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("reading page from stdin")?;
        return Ok(buf);
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        bail!("file not found: {}", input);
    }
    fs::read(&path).with_context(|| format!("reading {}", path.display()))
}
