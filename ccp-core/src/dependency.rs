// ccp-core/src/dependency.rs
use tracing::debug;

use crate::baseline::BaselineSet;
use crate::package_table::{PackageTable, ResolvedPackage};

/// Root imports not already present in the baseline, in import table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList<'a> {
    entries: Vec<&'a ResolvedPackage>,
}

impl<'a> DependencyList<'a> {
    /// Keeps every resolved package whose GUID is absent from `baseline`, and
    /// every unresolved package: an unresolved import is still needed and
    /// nothing proves it ships, so its placeholder GUID is never looked up.
    pub fn build(packages: &'a PackageTable, baseline: &BaselineSet) -> Self {
        let entries: Vec<&ResolvedPackage> = packages
            .iter()
            .filter(|package| match &package.location {
                Some(location) => !baseline.contains(&location.identity.guid),
                None => true,
            })
            .collect();
        debug!(
            "{} of {} package(s) are not in the baseline",
            entries.len(),
            packages.len()
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[&'a ResolvedPackage] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ResolvedPackage> + '_ {
        self.entries.iter().copied()
    }

    pub fn unresolved_count(&self) -> usize {
        self.entries.iter().filter(|p| !p.is_resolved()).count()
    }
}
