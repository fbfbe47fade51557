// ccp-core/src/walk.rs
//! Shared walk-and-classify pass used by dependency resolution and baseline scans.
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use ccp_common::error::Result;
use ccp_common::model::PackageExtension;

/// A regular file whose name carries a recognized package suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    pub path: PathBuf,
    /// File name with the package suffix stripped.
    pub base_name: String,
    pub extension: PackageExtension,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub entries: usize,
    pub packages: usize,
    pub errors: usize,
}

/// Walks `root` depth-first and hands every package file to `visit` in walk order.
///
/// Unreadable entries are logged and skipped. The walk stops early when
/// `visit` breaks.
pub fn walk_package_files<F>(root: &Path, mut visit: F) -> Result<WalkSummary>
where
    F: FnMut(&PackageFile) -> ControlFlow<()>,
{
    let mut summary = WalkSummary::default();
    for entry in ccp_aio::list_directory_recursive(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                summary.errors += 1;
                continue;
            }
        };
        summary.entries += 1;
        if entry.is_directory {
            continue;
        }
        let Some((base_name, extension)) = PackageExtension::split_file_name(&entry.file_name)
        else {
            continue;
        };
        summary.packages += 1;
        let file = PackageFile {
            base_name: base_name.to_string(),
            extension,
            path: entry.path,
        };
        if visit(&file).is_break() {
            debug!("Walk of {} stopped early", root.display());
            break;
        }
    }
    debug!(
        "Walked {}: {} entries, {} packages, {} errors",
        root.display(),
        summary.entries,
        summary.packages,
        summary.errors
    );
    Ok(summary)
}
