use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use search_core::{read_search_input, Document, SearchConfig, ZeroRelevancePolicy, MAX_RESULT_DOCUMENT_COUNT};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "search")]
#[command(about = "Rank documents against a query with TF-IDF", long_about = None)]
pub struct Cli {
    /// Input file: stop words, document count, documents, query (one per line). Defaults to stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Maximum number of ranked documents to print
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    pub max_results: usize,
    /// Whether documents matching no query word are still listed with relevance 0
    #[arg(long, value_enum, default_value_t = ZeroRelevance::Include)]
    pub zero_relevance: ZeroRelevance,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroRelevance {
    Include,
    Exclude,
}

impl From<ZeroRelevance> for ZeroRelevancePolicy {
    fn from(value: ZeroRelevance) -> Self {
        match value {
            ZeroRelevance::Include => ZeroRelevancePolicy::Include,
            ZeroRelevance::Exclude => ZeroRelevancePolicy::Exclude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ document_id = 1, relevance = 0.650672 }`
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig { max_results: self.max_results, zero_relevance: self.zero_relevance.into() }
    }
}

/// Read the input named by `cli` (or stdin) and print the ranked documents to stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open input {}", path.display()))?;
            run(cli, BufReader::new(file), &mut out)
        }
        None => run(cli, io::stdin().lock(), &mut out),
    }
}

pub fn run<R: BufRead, W: Write>(cli: &Cli, reader: R, out: &mut W) -> Result<()> {
    let input = read_search_input(reader, cli.search_config()).context("failed to read search input")?;
    let results = input.server.find_top_documents(&input.query);
    tracing::info!(query = %input.query, num_results = results.len(), "search complete");
    write_results(&results, cli.format, out)
}

fn write_results<W: Write>(results: &[Document], format: OutputFormat, out: &mut W) -> Result<()> {
    for doc in results {
        match format {
            OutputFormat::Text => writeln!(out, "{doc}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, doc)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
