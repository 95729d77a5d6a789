use std::fs;
use std::io::Write;
use std::path::Path;

use log::error;
use tempfile::NamedTempFile;

use crate::{Result, SteganoError};

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        error!("cannot read {}: {source}", path.display());
        SteganoError::ReadError { source }
    })
}

/// Write `data` to `target` through a temporary file in the same directory.
///
/// Readers of `target` either see the previous content or all of `data`,
/// never a partial write.
pub(crate) fn write_atomically(target: &Path, data: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_error = |source: std::io::Error| {
        error!("cannot write {}: {source}", target.display());
        SteganoError::WriteError { source }
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(data).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(target).map_err(|e| write_error(e.error))?;

    Ok(())
}
