use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use little_search::{search::MAX_RESULTS, MasterIndex, Result, SearchEngine};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File listing the documents to index, one path per line
    #[arg(long, default_value = "docs.txt")]
    documents: PathBuf,

    /// File listing the noise words that are never indexed
    #[arg(long, default_value = "noisewords.txt")]
    noise_words: PathBuf,

    /// Maximum number of documents per result
    #[arg(short, long, default_value_t = MAX_RESULTS)]
    limit: usize,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("little_search=info")),
        )
        .init();

    let args = Args::parse();

    let index = MasterIndex::build(&args.documents, &args.noise_words)?;
    let search = SearchEngine::new(index).with_limit(args.limit);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Enter two keywords (or 'exit'):")?;

    for line in stdin.lock().lines() {
        let line = line?.to_lowercase();
        let query = line.trim();

        if query == "exit" {
            break;
        }

        let keywords: Vec<&str> = query.split_whitespace().collect();
        let &[first, second] = keywords.as_slice() else {
            tracing::warn!(query, "Expected exactly two keywords");
            continue;
        };

        let result = search.search(first, second);

        if args.json {
            serde_json::to_writer(&mut stdout, &result)?;
            writeln!(stdout)?;
        } else if result.documents.is_empty() {
            writeln!(stdout, "No documents match '{first}' or '{second}'")?;
        } else {
            for document in &result.documents {
                writeln!(stdout, "{document}")?;
            }
        }

        stdout.flush()?;
    }

    Ok(())
}
