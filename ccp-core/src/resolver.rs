// ccp-core/src/resolver.rs
//! Locates the file backing each root import by case-insensitive name match.
use std::ops::ControlFlow;
use std::path::Path;

use tracing::{debug, info, warn};

use ccp_common::error::Result;
use ccp_common::model::PackageIdentity;

use crate::guid::read_package_guid_from_file;
use crate::names::NameTable;
use crate::package_table::{PackageLocation, PackageTable};
use crate::walk::{walk_package_files, PackageFile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub resolved: usize,
    pub unresolved: usize,
    /// Matching files whose GUID could not be read.
    pub unreadable: usize,
}

/// Resolves every unresolved entry of `packages` against the files under `root`.
///
/// Files are visited in walk order and the first file matching an entry wins;
/// later files with the same name are ignored. The suffix order `.upk`, `.udk`,
/// `.u` only decides how a file name is split, never which of two differently
/// suffixed files is chosen. A matching file whose GUID cannot be read leaves
/// the entry unresolved so a later file may still claim it.
pub fn resolve_packages(
    root: &Path,
    names: &NameTable,
    packages: &mut PackageTable,
) -> Result<ResolveSummary> {
    debug!(
        "Resolving {} package(s) under {}",
        packages.unresolved_count(),
        root.display()
    );
    let mut summary = ResolveSummary::default();
    let mut remaining = packages.unresolved_count();
    if remaining == 0 {
        return Ok(summary);
    }

    walk_package_files(root, |file| {
        match claim(file, names, packages) {
            Claim::Resolved => {
                summary.resolved += 1;
                remaining -= 1;
            }
            Claim::Unreadable => summary.unreadable += 1,
            Claim::NoMatch => {}
        }
        if remaining == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    summary.unresolved = packages.unresolved_count();
    for package in packages.iter().filter(|p| !p.is_resolved()) {
        info!(
            "Dependency '{}' not found under {}",
            names.display(package.name_index),
            root.display()
        );
    }
    Ok(summary)
}

enum Claim {
    Resolved,
    Unreadable,
    NoMatch,
}

fn claim(file: &PackageFile, names: &NameTable, packages: &mut PackageTable) -> Claim {
    let Some(slot) = packages.iter_mut().find(|package| {
        !package.is_resolved()
            && names
                .get(package.name_index)
                .is_some_and(|name| name.eq_ignore_ascii_case(&file.base_name))
    }) else {
        return Claim::NoMatch;
    };

    match read_package_guid_from_file(&file.path) {
        Ok(guid) => {
            debug!(
                "Resolved '{}' to {} ({})",
                file.base_name,
                file.path.display(),
                guid
            );
            slot.location = Some(PackageLocation {
                path: file.path.clone(),
                identity: PackageIdentity {
                    guid,
                    extension: file.extension,
                },
            });
            Claim::Resolved
        }
        Err(e) => {
            warn!(
                "Could not read GUID of {}: {}. Leaving '{}' unresolved.",
                file.path.display(),
                e,
                file.base_name
            );
            Claim::Unreadable
        }
    }
}
