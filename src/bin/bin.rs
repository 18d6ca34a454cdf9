use anyhow::{Context, Result};
use log::{debug, info, warn};
use logfreq::{input, report, report::Format};
use std::{env, io, path::PathBuf};
use structopt::StructOpt;

/// Used when reading files and no top-k was given
const DEFAULT_TOP_K: i64 = 10;
const TOP_K_VAR: &str = "LOG_CODES_TOP_K";

#[derive(StructOpt)]
struct Options {
    /// How many of the most frequent codes to show
    #[structopt(short = "k", long, allow_hyphen_values = true)]
    top_k: Option<String>,
    /// Output format: table or csv
    #[structopt(short, long, default_value = "table")]
    format: Format,
    /// Log files to read. Without any, lines are read from stdin until a blank line.
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    // Top-k from the flag, then the environment
    let configured_top_k = input::configured_top_k(options.top_k, env::var(TOP_K_VAR).ok())?;

    let (lines, top_k) = if options.files.is_empty() {
        println!("Enter log lines (enter blank line to finish):");
        let lines = input::read_until_blank(&mut stdin)?;
        let top_k = match configured_top_k {
            Some(top_k) => top_k,
            None => input::prompt_top_k(&mut stdin, io::stdout())?,
        };
        (lines, top_k)
    } else {
        let mut lines = Vec::new();
        for path in &options.files {
            let file_lines = input::read_file_lines(path)?;
            debug!("Read {} lines from {}", file_lines.len(), path.display());
            lines.extend(file_lines);
        }
        (lines, configured_top_k.unwrap_or(DEFAULT_TOP_K))
    };
    if top_k <= 0 {
        warn!("Asked for {} top codes, nothing will be listed", top_k);
    }

    info!("Analyzing {} lines", lines.len());
    let ranking = logfreq::analyze(&lines, top_k);
    report::write_report(io::stdout().lock(), &ranking, top_k, options.format).context("failed to write report")?;
    Ok(())
}
