//! Provenance analysis over the binary access layer.
//!
//! Per input file: discover the constructor/destructor candidate ranges,
//! run the line-attribution sweep over every compilation unit and the
//! call-attribution sweep over every relocation section, and merge the
//! results into one deduplicated report. No state is shared across files.

pub mod calls;
pub mod lines;
pub mod ranges;
pub mod report;

use crate::analysis::report::Report;
use crate::binary::{elf, BinaryAccess};
use crate::core::symbol_range::SymbolRange;
use crate::error::Result;
use crate::io::IOLimits;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Analyzer configuration.
///
/// The marker set defaults to the known compiler-emitted constructor/
/// destructor dispatch names; toolchains with different mangling schemes
/// can extend it.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Symbol names treated as constructor/destructor dispatch entry points
    pub markers: BTreeSet<String>,
    /// Input file mapping limits
    pub limits: IOLimits,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            markers: ranges::default_markers(),
            limits: IOLimits::default(),
        }
    }
}

/// Run both sweeps over an already-materialized access view.
///
/// The report is empty when no candidate symbol exists, and also when a
/// marker-name match turns out not to be a function (the binary is judged
/// to have no real constructors and the file is skipped without error).
pub fn analyze(name: &str, access: &dyn BinaryAccess, config: &AnalyzerConfig) -> Report {
    let mut report = Report::new(name);

    let candidates: Vec<SymbolRange> = match ranges::discover(access.symbols(), &config.markers) {
        Some(candidates) => candidates,
        None => return report,
    };
    if candidates.is_empty() {
        debug!(file = name, "No constructor/destructor candidates");
        return report;
    }

    for unit in access.compilation_units() {
        report.extend(lines::sweep_unit(unit, &candidates));
    }
    for table in access.relocation_tables() {
        report.extend(calls::sweep_table(table, &candidates));
    }

    debug!(file = name, facts = report.len(), "Analysis complete");
    report
}

/// Open one binary from disk and analyze it.
pub fn process_file<P: AsRef<Path>>(path: P, config: &AnalyzerConfig) -> Result<Report> {
    let path = path.as_ref();
    let view = elf::load(path, &config.limits)?;
    Ok(analyze(&path.display().to_string(), &view, config))
}
