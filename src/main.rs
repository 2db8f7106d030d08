use anyhow::bail;
use clap::Parser;
use ctorscan::analysis::{self, AnalyzerConfig};
use ctorscan::logging;
use std::io;
use std::path::{Path, PathBuf};
use tracing::error;

/// Report source lines and called symbols reachable from global
/// constructors/destructors in each input binary.
#[derive(Debug, Parser)]
#[command(name = "ctorscan", version, about)]
struct Cli {
    /// Input binaries to analyze
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let config = AnalyzerConfig::default();

    // Each file is processed to completion before the next begins; a bad
    // file is reported and must not abort the rest of the batch.
    let mut failures = 0usize;
    for path in &cli.files {
        if let Err(err) = run_one(path, &config) {
            error!(file = %path.display(), error = %err, "Analysis failed");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} input file(s) failed", cli.files.len());
    }
    Ok(())
}

fn run_one(path: &Path, config: &AnalyzerConfig) -> anyhow::Result<()> {
    let report = analysis::process_file(path, config)?;
    report.write_to(io::stdout().lock())?;
    Ok(())
}
