//! Program image loading.
//!
//! This module places program images into physical memory before a run.
//! It provides:
//! 1. **ELF Loading:** Parses an ELF object, copies every loadable
//!    segment to its load address, and reports the entry point.
//! 2. **Flat Loading:** Copies a raw binary to a fixed address.

use crate::common::data::MarchBits;
use crate::common::error::LoaderError;
use crate::mem::Memory;
use object::{Object, ObjectSegment};
use std::fs;
use std::path::Path;

/// Reads an image file from disk.
///
/// # Errors
/// Returns [`LoaderError::Io`] when the file cannot be read.
pub fn read_image(path: &Path) -> Result<Vec<u8>, LoaderError> {
    fs::read(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads every loadable segment of an ELF `image` into `mem`.
///
/// Segments are placed at their load addresses. Trailing zero-fill (BSS)
/// needs no work because memory starts cleared.
///
/// # Returns
/// The ELF entry point, for the harness to apply as the reset vector.
///
/// # Errors
/// Returns [`LoaderError::Parse`] when the image is not valid ELF, or
/// [`LoaderError::Segment`] when a segment falls outside the mapped range.
pub fn load_elf(mem: &mut Memory, image: &[u8]) -> Result<MarchBits, LoaderError> {
    let file = object::File::parse(image)?;
    for segment in file.segments() {
        let address = segment.address();
        let data = segment.data()?;
        if data.is_empty() {
            continue;
        }
        if !mem.contains(address, data.len() as u64) {
            return Err(LoaderError::Segment {
                address,
                size: data.len() as u64,
            });
        }
        mem.load_at(address, data);
    }
    Ok(file.entry())
}

/// Loads a flat binary image at `address`.
///
/// # Errors
/// Returns [`LoaderError::Segment`] when the image falls outside the
/// mapped range.
pub fn load_binary(mem: &mut Memory, address: MarchBits, image: &[u8]) -> Result<(), LoaderError> {
    if !mem.contains(address, image.len() as u64) {
        return Err(LoaderError::Segment {
            address,
            size: image.len() as u64,
        });
    }
    mem.load_at(address, image);
    Ok(())
}
