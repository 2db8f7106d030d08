//! ctorscan: static-initializer provenance analysis for compiled binaries.
//!
//! Answers a narrow forensic question about a binary: which source lines,
//! and which called symbols, are reachable from code that runs as part of
//! global object construction/destruction? The analyzer locates the
//! compiler-emitted constructor/destructor dispatch symbols, then correlates
//! their instruction address ranges against line-number debug information
//! and relocation records, producing a deduplicated, sorted report of
//! `line <file>:<line>` and `call <symbol>` facts per input file.
//!
//! Container and DWARF decoding are delegated to the `object` and `gimli`
//! crates behind the narrow [`binary::BinaryAccess`] seam, which keeps the
//! correlation logic in [`analysis`] testable against synthetic streams.

/// Provenance analysis: range discovery, sweeps, reporting
pub mod analysis;
/// Binary access layer over `object`/`gimli`
pub mod binary;
/// Core data types module
pub mod core;
/// Error types
pub mod error;
/// Bounded file mapping
pub mod io;
/// Tracing setup
pub mod logging;

pub use error::{CtorScanError, Result};
