//! Demo CLI host for the suggestion engine.
//!
//! Loads a JSON array of records, then answers queries: one-shot from the
//! command line, or line-by-line from stdin to simulate search-as-you-type.
//!
//! ```text
//! suggesto --records products.json --language es "cepillo electrico"
//! suggesto --records products.json          # interactive stdin loop
//! ```

use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use suggesto::{Engine, Hit, Language, RecordInput};

#[derive(Parser)]
#[command(name = "suggesto", about = "Search-as-you-type suggestions over a record file")]
struct Cli {
    /// JSON file containing an array of records:
    /// [{"id": 10, "title": "...", "text": "...", "priority": 0}, ...]
    #[arg(long)]
    records: PathBuf,

    /// Stemming language tag (en, de, es, pt, ru). Unknown tags fall back
    /// to identity stemming with a warning.
    #[arg(long)]
    language: Option<String>,

    /// Maximum number of hits per query.
    #[arg(long, default_value_t = suggesto::DEFAULT_RESULT_LIMIT)]
    limit: usize,

    /// Query to run once. Reads queries from stdin when omitted.
    query: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let raw = fs::read_to_string(&cli.records)?;
    let inputs: Vec<RecordInput> = serde_json::from_str(&raw)?;

    let engine = Engine::with_limit(cli.limit);
    if let Some(tag) = &cli.language {
        let effective = engine.set_language(tag);
        if effective == Language::Identity && Language::parse(tag).is_none() {
            eprintln!("warning: unsupported language '{tag}', using identity stemming");
        }
    }
    engine.set_records(inputs)?;

    if cli.query.is_empty() {
        interactive(&engine)
    } else {
        let query = cli.query.join(" ");
        print_hits(&engine.search(&query));
        Ok(())
    }
}

fn interactive(engine: &Engine) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        print_hits(&engine.search(&line));
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_hits(hits: &[Hit]) {
    if hits.is_empty() {
        println!("(no hits)");
        return;
    }
    for (rank, hit) in hits.iter().enumerate() {
        println!("{:>2}. [{:>6}] {:>7.1}  {}", rank + 1, hit.id, hit.score, hit.highlighted);
    }
}
