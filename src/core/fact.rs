//! Provenance facts: the unit of analyzer output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One attributable outcome of the analysis: a source line whose
/// instructions live inside a candidate range, or a symbol referenced from
/// inside one.
///
/// Facts are deduplicated by full identity; the `Display` rendering is the
/// exact text the report sorts and prints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvenanceFact {
    /// A source line reachable from a candidate range
    Line { file: String, line: u64 },
    /// A symbol referenced from inside a candidate range
    Call { symbol: String },
}

impl ProvenanceFact {
    pub fn line(file: impl Into<String>, line: u64) -> Self {
        ProvenanceFact::Line {
            file: file.into(),
            line,
        }
    }

    pub fn call(symbol: impl Into<String>) -> Self {
        ProvenanceFact::Call {
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for ProvenanceFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvenanceFact::Line { file, line } => write!(f, "line {}:{}", file, line),
            ProvenanceFact::Call { symbol } => write!(f, "call {}", symbol),
        }
    }
}
