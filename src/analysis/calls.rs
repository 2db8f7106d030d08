//! Call-attribution sweep.
//!
//! A relocation whose own address lies inside a candidate range is read as
//! a reference site physically inside constructor/destructor code. This is
//! a coarse proxy: attribution is by the relocation's own address, not by
//! the instruction it patches. Targets are resolved through
//! the relocation section's linked symbol table; anonymous targets
//! (section symbols, stripped locals) carry no attributable name and are
//! skipped.

use crate::binary::RelocationTable;
use crate::core::fact::ProvenanceFact;
use crate::core::symbol_range::SymbolRange;
use std::collections::HashSet;

/// Sweep one relocation section.
pub fn sweep_table(table: &RelocationTable, candidates: &[SymbolRange]) -> HashSet<ProvenanceFact> {
    let mut facts = HashSet::new();
    for entry in &table.entries {
        if !candidates.iter().any(|c| c.range.contains(entry.address)) {
            continue;
        }
        let name = match table.symbols.get(entry.symbol_index) {
            Some(name) => name,
            None => continue,
        };
        if name.is_empty() {
            continue;
        }
        facts.insert(ProvenanceFact::call(name.clone()));
    }
    facts
}
