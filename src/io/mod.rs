//! Bounded file mapping for binary analysis.
//!
//! Input binaries are memory-mapped read-only and guarded by a size limit
//! so a pathological input cannot exhaust memory. The map acquired for a
//! file is scoped to that file's processing and released unconditionally
//! when dropped, including on early-abort paths.

pub mod error;

use crate::io::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Resource limits for mapping input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IOLimits {
    /// The absolute maximum file size that can be opened.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024 * 1024, // 1GiB
        }
    }
}

/// Memory-map a file read-only, enforcing `limits`.
///
/// Empty files are rejected here; memmap cannot map them and no binary
/// container fits in zero bytes anyway.
pub fn map_file<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Mmap> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();

    debug!(path = %path.display(), size = file_size, "Mapping input file");

    if file_size > limits.max_file_size {
        warn!(
            path = %path.display(),
            size = file_size,
            limit = limits.max_file_size,
            "File is too large"
        );
        return Err(IoError::FileTooLarge {
            limit: limits.max_file_size,
            found: file_size,
        });
    }
    if file_size == 0 {
        return Err(IoError::Empty);
    }

    // Safety: the file is backed by a real file on disk and we only request a read-only map.
    Ok(unsafe { Mmap::map(&file)? })
}
