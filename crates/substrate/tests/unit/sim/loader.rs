//! # Program Loader Tests
//!
//! Tests for ELF and flat binary placement into the memory window.

use skiff_core::common::error::LoaderError;
use skiff_core::mem::Memory;
use skiff_core::sim::loader;
use std::io::Write;

const BASE: u64 = 0x8000_0000;
const SIZE: usize = 64 * 1024;

/// Builds a minimal 64-bit little-endian ELF executable image.
///
/// The image carries no section headers, just one `PT_LOAD` program
/// header per `(address, bytes)` payload, with the payloads packed after
/// the header table.
fn build_elf(entry: u64, segments: &[(u64, &[u8])]) -> Vec<u8> {
    const EHSIZE: usize = 64;
    const PHSIZE: usize = 56;

    let mut image = Vec::new();
    image.extend_from_slice(&[0x7F, b'E', b'L', b'F', 2, 1, 1, 0]);
    image.extend_from_slice(&[0u8; 8]);
    image.extend_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    image.extend_from_slice(&243u16.to_le_bytes()); // EM_RISCV
    image.extend_from_slice(&1u32.to_le_bytes()); // EV_CURRENT
    image.extend_from_slice(&entry.to_le_bytes());
    image.extend_from_slice(&(EHSIZE as u64).to_le_bytes()); // e_phoff
    image.extend_from_slice(&0u64.to_le_bytes()); // e_shoff
    image.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    image.extend_from_slice(&(EHSIZE as u16).to_le_bytes());
    image.extend_from_slice(&(PHSIZE as u16).to_le_bytes());
    image.extend_from_slice(&(segments.len() as u16).to_le_bytes());
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shentsize
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
    image.extend_from_slice(&0u16.to_le_bytes()); // e_shstrndx

    let mut offset = EHSIZE + PHSIZE * segments.len();
    for (address, data) in segments {
        image.extend_from_slice(&1u32.to_le_bytes()); // PT_LOAD
        image.extend_from_slice(&7u32.to_le_bytes()); // RWX
        image.extend_from_slice(&(offset as u64).to_le_bytes());
        image.extend_from_slice(&address.to_le_bytes()); // p_vaddr
        image.extend_from_slice(&address.to_le_bytes()); // p_paddr
        image.extend_from_slice(&(data.len() as u64).to_le_bytes());
        image.extend_from_slice(&(data.len() as u64).to_le_bytes());
        image.extend_from_slice(&0x1000u64.to_le_bytes());
        offset += data.len();
    }
    for (_, data) in segments {
        image.extend_from_slice(data);
    }
    image
}

#[test]
fn test_load_elf_places_segment_and_returns_entry() {
    let mut mem = Memory::new(BASE, SIZE);
    let program: &[u8] = &[0x13, 0x05, 0x45, 0x03, 0x73, 0x00, 0x00, 0x00];
    let image = build_elf(BASE + 0x40, &[(BASE, program)]);

    let entry = loader::load_elf(&mut mem, &image).unwrap();

    assert_eq!(entry, BASE + 0x40);
    assert_eq!(mem.read_u32(BASE).unwrap(), 0x0345_0513);
    assert_eq!(mem.read_u32(BASE + 4).unwrap(), 0x0000_0073);
}

#[test]
fn test_load_elf_places_multiple_segments() {
    let mut mem = Memory::new(BASE, SIZE);
    let text: &[u8] = &[0xAA; 16];
    let data: &[u8] = &[0xBB; 8];
    let image = build_elf(BASE, &[(BASE, text), (BASE + 0x1000, data)]);

    let _ = loader::load_elf(&mut mem, &image).unwrap();

    assert_eq!(mem.read_u8(BASE).unwrap(), 0xAA);
    assert_eq!(mem.read_u8(BASE + 15).unwrap(), 0xAA);
    assert_eq!(mem.read_u8(BASE + 0x1000).unwrap(), 0xBB);
    assert_eq!(mem.read_u8(BASE + 0x1007).unwrap(), 0xBB);
}

#[test]
fn test_load_elf_skips_empty_segments() {
    let mut mem = Memory::new(BASE, SIZE);
    let image = build_elf(BASE, &[(BASE, &[]), (BASE + 8, &[0xCC, 0xDD])]);

    let _ = loader::load_elf(&mut mem, &image).unwrap();
    assert_eq!(mem.read_u8(BASE + 8).unwrap(), 0xCC);
}

#[test]
fn test_load_elf_rejects_non_elf_image() {
    let mut mem = Memory::new(BASE, SIZE);
    let err = loader::load_elf(&mut mem, b"definitely not an elf").unwrap_err();
    assert!(matches!(err, LoaderError::Parse(_)), "got {err:?}");
}

#[test]
fn test_load_elf_rejects_segment_outside_window() {
    let mut mem = Memory::new(BASE, SIZE);
    let payload: &[u8] = &[0xEE; 4];
    let image = build_elf(0x1000, &[(0x1000, payload)]);

    let err = loader::load_elf(&mut mem, &image).unwrap_err();
    match err {
        LoaderError::Segment { address, size } => {
            assert_eq!(address, 0x1000);
            assert_eq!(size, 4);
        }
        other => panic!("expected a segment error, got {other:?}"),
    }
}

#[test]
fn test_read_image_roundtrip() {
    let image = build_elf(BASE, &[(BASE, &[1, 2, 3, 4])]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&image).unwrap();
    file.flush().unwrap();

    let loaded = loader::read_image(file.path()).unwrap();
    assert_eq!(loaded, image);
}

#[test]
fn test_read_image_missing_file_is_io_error() {
    let err = loader::read_image(std::path::Path::new("/nonexistent/image.elf")).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("/nonexistent/image.elf"));
}

#[test]
fn test_load_binary_places_image_at_address() {
    let mut mem = Memory::new(BASE, SIZE);
    loader::load_binary(&mut mem, BASE + 0x100, &[0x11, 0x22, 0x33]).unwrap();

    assert_eq!(mem.read_u8(BASE + 0x100).unwrap(), 0x11);
    assert_eq!(mem.read_u8(BASE + 0x102).unwrap(), 0x33);
}

#[test]
fn test_load_binary_rejects_image_outside_window() {
    let mut mem = Memory::new(BASE, SIZE);
    let err = loader::load_binary(&mut mem, BASE + SIZE as u64 - 2, &[0; 8]).unwrap_err();
    assert!(matches!(err, LoaderError::Segment { .. }), "got {err:?}");
}
