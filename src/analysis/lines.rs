//! Line-attribution sweep.
//!
//! Walks a compilation unit's line-table rows in program order. Two
//! consecutive non-end rows with strictly increasing addresses form the
//! closed-open interval `[prev.address, row.address)`, attributed to
//! `prev`'s source position. Attribution tests only the interval's start
//! address against the candidate ranges: an interval that starts outside a
//! range but extends into it is not attributed, and one that starts inside
//! but runs past the range end is still attributed once.

use crate::binary::{LineRow, LineTable};
use crate::core::fact::ProvenanceFact;
use crate::core::symbol_range::SymbolRange;
use std::collections::HashSet;

/// Sweep one compilation unit. No state crosses unit boundaries.
pub fn sweep_unit(unit: &LineTable, candidates: &[SymbolRange]) -> HashSet<ProvenanceFact> {
    let (facts, _) = unit.rows.iter().fold(
        (HashSet::new(), None::<&LineRow>),
        |(facts, prev), row| step(unit, candidates, facts, prev, row),
    );
    facts
}

/// One fold step: emits at most one fact and yields the next carried row.
///
/// An end-of-sequence row terminates the current instruction sequence, so
/// it neither closes an interval nor becomes the carry itself; the row
/// after it starts a fresh sequence.
fn step<'a>(
    unit: &LineTable,
    candidates: &[SymbolRange],
    mut facts: HashSet<ProvenanceFact>,
    prev: Option<&'a LineRow>,
    row: &'a LineRow,
) -> (HashSet<ProvenanceFact>, Option<&'a LineRow>) {
    if row.end_sequence {
        return (facts, None);
    }
    if let Some(prev) = prev {
        if prev.address < row.address
            && candidates.iter().any(|c| c.range.contains(prev.address))
        {
            if let Some(file) = unit.files.get(&prev.file_id) {
                facts.insert(ProvenanceFact::line(file.clone(), prev.line));
            }
        }
    }
    (facts, Some(row))
}
