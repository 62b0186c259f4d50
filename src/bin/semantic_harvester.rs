//! Command-line entry point: harvest keywords from a list of sites.
//!
//! ```text
//! semantic-harvester https://example.com https://example.org -o results.json
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use semantic_harvester::{harvest, logging, Options, DEFAULT_OUTPUT_FILE};

/// SemanticHarvester - collect the keyword profile of web sites.
#[derive(Debug, Parser)]
#[command(name = "semantic-harvester", version, about)]
struct Cli {
    /// Site URLs to analyze.
    #[arg(value_name = "SITES", required = true, num_args = 1..)]
    sites: Vec<String>,

    /// Output JSON file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Number of keywords kept per site.
    #[arg(short = 'n', long = "top", value_name = "N", default_value_t = 20)]
    top: usize,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,

    /// Directory with NLTK-style stopword files (`english`, `russian`).
    #[arg(long, value_name = "DIR")]
    stopwords_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            output_path: self.output.clone(),
            top_n: self.top,
            timeout: Duration::from_secs(self.timeout),
            stopwords_dir: self.stopwords_dir.clone(),
            ..Options::default()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    let mut stdout = io::stdout().lock();

    harvest(cli.sites.as_slice(), &options, &mut stdout)
        .with_context(|| format!("harvest of {} site(s) failed", cli.sites.len()))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("semantic-harvester error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
