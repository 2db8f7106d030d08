//! Per-file fact aggregation and rendering.

use crate::core::fact::ProvenanceFact;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

/// All facts discovered for one input file.
///
/// The set is fully built before any output is produced; rendering sorts
/// the fact texts lexicographically, so a given binary always produces
/// byte-identical output regardless of discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    file: String,
    facts: HashSet<ProvenanceFact>,
}

impl Report {
    pub fn new(file: impl Into<String>) -> Self {
        Report {
            file: file.into(),
            facts: HashSet::new(),
        }
    }

    /// The input file's display name.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Merge facts from one sweep into the report.
    pub fn extend(&mut self, facts: impl IntoIterator<Item = ProvenanceFact>) {
        self.facts.extend(facts);
    }

    /// Render every fact as text, sorted lexicographically.
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.facts.iter().map(ProvenanceFact::to_string).collect();
        lines.sort();
        lines
    }

    /// Write the report, one `<file> <fact>` line per fact.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for line in self.render() {
            writeln!(out, "{} {}", self.file, line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        let mut report = Report::new("a.out");
        report.extend([
            ProvenanceFact::line("zeta.cpp", 10),
            ProvenanceFact::call("puts"),
            ProvenanceFact::line("alpha.cpp", 3),
            ProvenanceFact::call("atexit"),
        ]);
        report
    }

    #[test]
    fn render_is_sorted_lexicographically() {
        let lines = sample_report().render();
        assert_eq!(
            lines,
            vec![
                "call atexit",
                "call puts",
                "line alpha.cpp:3",
                "line zeta.cpp:10",
            ]
        );
    }

    #[test]
    fn render_is_deterministic() {
        // Same facts inserted in a different order render identically.
        let mut other = Report::new("a.out");
        other.extend([
            ProvenanceFact::call("atexit"),
            ProvenanceFact::line("alpha.cpp", 3),
            ProvenanceFact::call("puts"),
            ProvenanceFact::line("zeta.cpp", 10),
        ]);
        assert_eq!(sample_report().render(), other.render());
    }

    #[test]
    fn duplicate_facts_collapse() {
        let mut report = Report::new("a.out");
        report.extend([
            ProvenanceFact::line("a.cpp", 1),
            ProvenanceFact::line("a.cpp", 1),
        ]);
        report.extend([ProvenanceFact::line("a.cpp", 1)]);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn write_to_prefixes_filename() {
        let mut out = Vec::new();
        sample_report().write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "a.out call atexit\na.out call puts\na.out line alpha.cpp:3\na.out line zeta.cpp:10\n"
        );
    }

    #[test]
    fn empty_report_writes_nothing() {
        let report = Report::new("a.out");
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(report.is_empty());
    }
}
