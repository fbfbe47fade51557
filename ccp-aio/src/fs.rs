/*
File: ccp-aio/src/fs.rs
Purpose: Primitive synchronous filesystem operations.
*/
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use ccp_common::error::{CcpError, Result};
use tracing::{debug, error};
use walkdir::WalkDir;

/// One entry produced by [`list_directory_recursive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub is_directory: bool,
    pub file_name: String,
}

fn is_hidden(file_name: &std::ffi::OsStr) -> bool {
    file_name.to_string_lossy().starts_with('.')
}

/// Lists every entry below `root`, depth-first, directories before their contents.
///
/// Entries whose name starts with `.` are skipped, and hidden directories are
/// not descended into. Siblings are visited in file name order so repeated walks
/// over the same tree agree. Errors for individual entries are yielded in-line
/// so callers can skip them and keep walking.
pub fn list_directory_recursive(
    root: &Path,
) -> Result<impl Iterator<Item = Result<DirEntryInfo>>> {
    if !root.is_dir() {
        return Err(CcpError::NotFound(format!(
            "directory '{}' does not exist",
            root.display()
        )));
    }
    debug!("Walking directory: {}", root.display());

    let entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => Some(Ok(DirEntryInfo {
                is_directory: entry.file_type().is_dir(),
                file_name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.into_path(),
            })),
            Err(e) => {
                let location = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                debug!("Error walking '{}': {}", location, e);
                Some(Err(CcpError::Walk(format!("{location}: {e}"))))
            }
        });
    Ok(entries)
}

/// Opens an existing file for reading.
pub fn open_file(path: &Path) -> Result<File> {
    debug!("Opening file: {}", path.display());
    File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            CcpError::NotFound(path.display().to_string())
        } else {
            error!("Failed open file {}: {}", path.display(), e);
            CcpError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })
}

/// Creates (or truncates) a file for writing.
pub fn create_file(path: &Path) -> Result<File> {
    debug!("Creating file: {}", path.display());
    File::create(path).map_err(|e| {
        error!("Failed create file {}: {}", path.display(), e);
        CcpError::from(e)
    })
}

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        CcpError::from(e)
    })
}

/// Copies a file, overwriting the destination. Returns the number of bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    debug!("Copying file from {} to {}", src.display(), dst.display());
    fs::copy(src, dst).map_err(|e| {
        error!(
            "Failed copy file from {} to {}: {}",
            src.display(),
            dst.display(),
            e
        );
        if e.kind() == io::ErrorKind::NotFound {
            CcpError::NotFound(src.display().to_string())
        } else {
            CcpError::from(e)
        }
    })
}
