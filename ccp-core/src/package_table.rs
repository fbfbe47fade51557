// ccp-core/src/package_table.rs
use std::path::{Path, PathBuf};

use ccp_common::model::{Guid, NameIndex, PackageExtension, PackageIdentity};

use crate::imports::ImportTable;

/// Where a root import was found on disk and what it turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    pub path: PathBuf,
    pub identity: PackageIdentity,
}

/// A root package import, possibly resolved to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name_index: NameIndex,
    pub location: Option<PackageLocation>,
}

impl ResolvedPackage {
    pub fn unresolved(name_index: NameIndex) -> Self {
        Self {
            name_index,
            location: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.location.is_some()
    }

    /// The resolved GUID, or all-zero while unresolved.
    pub fn guid(&self) -> Guid {
        self.location
            .as_ref()
            .map_or(Guid::ZERO, |loc| loc.identity.guid)
    }

    pub fn extension(&self) -> PackageExtension {
        self.location
            .as_ref()
            .map_or(PackageExtension::Unknown, |loc| loc.identity.extension)
    }

    pub fn path(&self) -> Option<&Path> {
        self.location.as_ref().map(|loc| loc.path.as_path())
    }
}

/// One slot per root import, in import table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageTable {
    entries: Vec<ResolvedPackage>,
}

impl PackageTable {
    /// Allocates an unresolved slot for every root import. The slot is named
    /// by the import's object name, which is the imported package's name.
    pub fn from_imports(imports: &ImportTable) -> Self {
        let mut entries = Vec::with_capacity(imports.root_count());
        entries.extend(
            imports
                .root_packages()
                .map(|record| ResolvedPackage::unresolved(record.object_name_index)),
        );
        debug_assert_eq!(entries.len(), imports.root_count());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ResolvedPackage] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedPackage> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ResolvedPackage> {
        self.entries.iter_mut()
    }

    pub fn unresolved_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_resolved()).count()
    }
}

impl<'a> IntoIterator for &'a PackageTable {
    type Item = &'a ResolvedPackage;
    type IntoIter = std::slice::Iter<'a, ResolvedPackage>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<ResolvedPackage> for PackageTable {
    fn from_iter<I: IntoIterator<Item = ResolvedPackage>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
