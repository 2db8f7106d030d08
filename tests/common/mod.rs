//! Shared fixtures for integration tests.
#![allow(dead_code)]

use object::write::{Object, Relocation, Symbol, SymbolSection};
use object::{
    Architecture, BinaryFormat, Endianness, RelocationEncoding, RelocationFlags, RelocationKind,
    SectionKind, SymbolFlags, SymbolKind, SymbolScope,
};

pub const MARKER: &str = "_Z41__static_initialization_and_destruction_0ii";

/// Build a relocatable ELF with a `.text` section of `body_size` bytes, the
/// dispatcher symbol covering it with `marker_kind`, and one relocation at
/// offset 0x10 targeting an undefined `puts`.
pub fn object_with_marker(marker_kind: SymbolKind, body_size: u64) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, Architecture::X86_64, Endianness::Little);

    let text = obj.add_section(Vec::new(), b".text".to_vec(), SectionKind::Text);
    obj.append_section_data(text, &[0x90u8; 0x40], 16);

    obj.add_symbol(Symbol {
        name: MARKER.as_bytes().to_vec(),
        value: 0,
        size: body_size,
        kind: marker_kind,
        scope: SymbolScope::Linkage,
        weak: false,
        section: SymbolSection::Section(text),
        flags: SymbolFlags::None,
    });

    let puts = obj.add_symbol(Symbol {
        name: b"puts".to_vec(),
        value: 0,
        size: 0,
        kind: SymbolKind::Text,
        scope: SymbolScope::Dynamic,
        weak: false,
        section: SymbolSection::Undefined,
        flags: SymbolFlags::None,
    });

    obj.add_relocation(
        text,
        Relocation {
            offset: 0x10,
            symbol: puts,
            addend: -4,
            flags: RelocationFlags::Generic {
                kind: RelocationKind::Relative,
                encoding: RelocationEncoding::Generic,
                size: 32,
            },
        },
    )
    .unwrap();

    obj.write().unwrap()
}
