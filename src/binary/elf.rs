//! ELF/DWARF materialization of the binary access layer.
//!
//! Uses `object` for container access (symbol tables, sections, relocation
//! entries) and `gimli` for line-number program decoding. Everything the
//! analyzer needs is copied into owned streams so the memory map can be
//! released before analysis runs.

use crate::binary::{
    BinaryAccess, LineRow, LineTable, RelocationRecord, RelocationTable, SymbolKind, SymbolRecord,
};
use crate::error::Result;
use crate::io::{self, IOLimits};
use object::read::{Object, ObjectSection, ObjectSymbol};
use object::RelocationTarget;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

type Reader<'data> = gimli::EndianSlice<'data, gimli::RunTimeEndian>;

/// Fully materialized access view of one binary.
#[derive(Debug, Default)]
pub struct BinaryView {
    symbols: Vec<SymbolRecord>,
    units: Vec<LineTable>,
    relocations: Vec<RelocationTable>,
}

impl BinaryAccess for BinaryView {
    fn symbols(&self) -> &[SymbolRecord] {
        &self.symbols
    }

    fn compilation_units(&self) -> &[LineTable] {
        &self.units
    }

    fn relocation_tables(&self) -> &[RelocationTable] {
        &self.relocations
    }
}

/// Open `path`, decode it, and return the materialized view.
///
/// The memory map lives only for the duration of this call.
pub fn load<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<BinaryView> {
    let map = io::map_file(path.as_ref(), limits)?;
    parse(&map)
}

/// Decode an in-memory binary image into the access view.
pub fn parse(data: &[u8]) -> Result<BinaryView> {
    let obj = object::File::parse(data)?;

    let symbols = collect_symbols(&obj);
    let units = collect_line_tables(&obj)?;
    let relocations = collect_relocations(&obj);

    debug!(
        symbols = symbols.len(),
        units = units.len(),
        relocation_tables = relocations.len(),
        "Materialized binary view"
    );

    Ok(BinaryView {
        symbols,
        units,
        relocations,
    })
}

fn symbol_kind(kind: object::SymbolKind) -> SymbolKind {
    match kind {
        object::SymbolKind::Text => SymbolKind::Function,
        object::SymbolKind::Data => SymbolKind::Object,
        object::SymbolKind::Section => SymbolKind::Section,
        _ => SymbolKind::Other,
    }
}

/// Every entry from the static and dynamic symbol tables, in table order.
fn collect_symbols(obj: &object::File) -> Vec<SymbolRecord> {
    let mut out = Vec::new();
    for sym in obj.symbols().chain(obj.dynamic_symbols()) {
        out.push(SymbolRecord {
            name: sym.name().unwrap_or("").to_string(),
            kind: symbol_kind(sym.kind()),
            address: sym.address(),
            size: sym.size(),
        });
    }
    out
}

/// Decode every compilation unit's line-number program into rows plus a
/// `file_id -> filename` table.
fn collect_line_tables<'data>(obj: &object::File<'data>) -> Result<Vec<LineTable>> {
    let endian = if obj.is_little_endian() {
        gimli::RunTimeEndian::Little
    } else {
        gimli::RunTimeEndian::Big
    };

    let load_section =
        |id: gimli::SectionId| -> std::result::Result<Cow<'data, [u8]>, gimli::Error> {
            match obj.section_by_name(id.name()) {
                Some(section) => Ok(section.uncompressed_data().unwrap_or(Cow::Borrowed(&[]))),
                None => Ok(Cow::Borrowed(&[])),
            }
        };

    let dwarf_cow = gimli::Dwarf::load(&load_section)?;
    let dwarf = dwarf_cow.borrow(|section| gimli::EndianSlice::new(section, endian));

    let mut out = Vec::new();
    let mut iter = dwarf.units();
    while let Some(header) = iter.next()? {
        let unit = dwarf.unit(header)?;
        let program = match unit.line_program.clone() {
            Some(program) => program,
            None => continue,
        };

        let files = unit_file_table(&dwarf, &unit, program.header())?;

        let mut rows = Vec::new();
        let mut rows_iter = program.rows();
        while let Some((_, row)) = rows_iter.next_row()? {
            rows.push(LineRow {
                address: row.address(),
                file_id: row.file_index(),
                line: row.line().map_or(0, u64::from),
                end_sequence: row.end_sequence(),
            });
        }

        trace!(
            files = files.len(),
            rows = rows.len(),
            "Decoded compilation unit line table"
        );
        out.push(LineTable { files, rows });
    }
    Ok(out)
}

fn unit_file_table<'data>(
    dwarf: &gimli::Dwarf<Reader<'data>>,
    unit: &gimli::Unit<Reader<'data>>,
    header: &gimli::LineProgramHeader<Reader<'data>>,
) -> Result<HashMap<u64, String>> {
    // DWARF 5 numbers file entries from 0; earlier versions from 1.
    let base = if header.encoding().version >= 5 { 0 } else { 1 };

    let mut files = HashMap::new();
    for i in 0..header.file_names().len() as u64 {
        let id = base + i;
        if let Some(entry) = header.file(id) {
            let name = dwarf
                .attr_string(unit, entry.path_name())?
                .to_string_lossy()
                .into_owned();
            files.insert(id, name);
        }
    }
    Ok(files)
}

/// Collect every relocation section, each resolved against its linked
/// symbol table: section relocations against the static table, dynamic
/// relocations against the dynamic one.
fn collect_relocations(obj: &object::File) -> Vec<RelocationTable> {
    let static_names = name_table(obj.symbols());
    let dynamic_names = name_table(obj.dynamic_symbols());

    let mut out = Vec::new();
    for section in obj.sections() {
        let entries: Vec<RelocationRecord> = section
            .relocations()
            .filter_map(|(address, reloc)| match reloc.target() {
                RelocationTarget::Symbol(index) => Some(RelocationRecord {
                    address,
                    symbol_index: index.0,
                }),
                _ => None,
            })
            .collect();
        if entries.is_empty() {
            continue;
        }
        out.push(RelocationTable {
            section: section.name().unwrap_or("").to_string(),
            entries,
            symbols: static_names.clone(),
        });
    }

    let dynamic: Vec<RelocationRecord> = obj
        .dynamic_relocations()
        .into_iter()
        .flatten()
        .filter_map(|(address, reloc)| match reloc.target() {
            RelocationTarget::Symbol(index) => Some(RelocationRecord {
                address,
                symbol_index: index.0,
            }),
            _ => None,
        })
        .collect();
    if !dynamic.is_empty() {
        out.push(RelocationTable {
            section: "dynamic".to_string(),
            entries: dynamic,
            symbols: dynamic_names,
        });
    }
    out
}

/// Symbol names addressable by table index, the way relocation entries
/// reference them. Indices with no named symbol stay empty.
fn name_table<'data: 'file, 'file>(
    symbols: impl Iterator<Item = object::Symbol<'data, 'file>>,
) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for sym in symbols {
        let index = sym.index().0;
        if index >= names.len() {
            names.resize(index + 1, String::new());
        }
        names[index] = sym.name().unwrap_or("").to_string();
    }
    names
}
