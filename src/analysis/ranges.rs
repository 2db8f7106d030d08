//! Constructor/destructor candidate range discovery.

use crate::binary::{SymbolKind, SymbolRecord};
use crate::core::address_range::AddressRange;
use crate::core::symbol_range::SymbolRange;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use tracing::debug;

/// GCC's mangled name for the per-TU static initialization/destruction
/// dispatcher. `.init_array` entries point at `_GLOBAL__sub_I_*` stubs
/// which in turn call this function; matching it directly skips that
/// second level of indirection, which section traversal alone cannot see.
static CTOR_DTOR_MARKERS: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| BTreeSet::from(["_Z41__static_initialization_and_destruction_0ii"]));

/// The built-in marker set as an owned, extensible collection.
pub fn default_markers() -> BTreeSet<String> {
    CTOR_DTOR_MARKERS.iter().map(|s| s.to_string()).collect()
}

/// Scan every symbol record for marker names and collect their body ranges.
///
/// Returns `None` when a marker-name match is not a function symbol: the
/// name collision means the binary has no real dispatcher, and analysis of
/// the whole file is abandoned. Degenerate zero-size matches are skipped.
/// An empty result is a normal outcome, not an error.
pub fn discover(symbols: &[SymbolRecord], markers: &BTreeSet<String>) -> Option<Vec<SymbolRange>> {
    let mut candidates = Vec::new();
    for sym in symbols {
        if !markers.contains(sym.name.as_str()) {
            continue;
        }
        if sym.kind != SymbolKind::Function {
            debug!(
                symbol = %sym.name,
                kind = ?sym.kind,
                "Marker symbol is not a function; skipping file"
            );
            return None;
        }
        let range = match AddressRange::new(sym.address, sym.size) {
            Some(range) => range,
            None => continue,
        };
        debug!(symbol = %sym.name, range = %range, "Found constructor/destructor candidate");
        candidates.push(SymbolRange::new(sym.name.clone(), range));
    }
    Some(candidates)
}
