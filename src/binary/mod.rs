//! Binary access layer.
//!
//! The analyzer never touches container bytes directly; it consumes the
//! read-only streams defined here. [`elf`] materializes them from a real
//! file through the `object` and `gimli` crates, and tests substitute
//! synthetic implementations of [`BinaryAccess`].

pub mod elf;

use std::collections::HashMap;

/// Coarse symbol classification from the container's symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Executable code (STT_FUNC and friends)
    Function,
    /// Data object
    Object,
    /// Section symbol
    Section,
    /// Anything else
    Other,
}

/// One symbol-table entry, as the analyzer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub name: String,
    pub kind: SymbolKind,
    /// Start address (st_value)
    pub address: u64,
    /// Size in bytes (st_size)
    pub size: u64,
}

/// One decoded row of a compilation unit's line-number program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRow {
    pub address: u64,
    /// Index into the owning unit's file table
    pub file_id: u64,
    /// Source line number; 0 when the row carries no line
    pub line: u64,
    /// Marks the end of a contiguous instruction sequence
    pub end_sequence: bool,
}

/// A compilation unit's line-table stream plus its file table.
#[derive(Debug, Clone, Default)]
pub struct LineTable {
    /// `file_id -> source filename`, as declared by the line program header
    pub files: HashMap<u64, String>,
    /// Rows in program order
    pub rows: Vec<LineRow>,
}

/// One relocation entry: a reference at `address` to the symbol at
/// `symbol_index` in the owning table's linked symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationRecord {
    pub address: u64,
    pub symbol_index: usize,
}

/// One relocation section together with its linked symbol-name table.
#[derive(Debug, Clone, Default)]
pub struct RelocationTable {
    /// Section name, kept for diagnostics
    pub section: String,
    pub entries: Vec<RelocationRecord>,
    /// Linked symbol table names, index-addressable the way relocation
    /// entries reference them; an empty string is an anonymous symbol
    pub symbols: Vec<String>,
}

/// Read-only view of one opened binary, as consumed by the analyzer.
pub trait BinaryAccess {
    /// Every entry from every symbol table in the binary.
    fn symbols(&self) -> &[SymbolRecord];
    /// One line table per compilation unit carrying line debug info.
    fn compilation_units(&self) -> &[LineTable];
    /// Every relocation section, with its linked symbol table resolved.
    fn relocation_tables(&self) -> &[RelocationTable];
}
