// ccp-core/src/session.rs
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use ccp_common::error::Result;
use ccp_common::model::{NameIndex, PackageExtension, PackageIdentity};

use crate::baseline::BaselineSet;
use crate::dependency::DependencyList;
use crate::guid::read_package_guid;
use crate::header::HeaderLayout;
use crate::imports::ImportTable;
use crate::names::NameTable;
use crate::package_table::{PackageTable, ResolvedPackage};
use crate::reader::PackageReader;
use crate::resolver::{resolve_packages, ResolveSummary};

/// The package being inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedPackage {
    pub path: PathBuf,
    /// File name without directory or package suffix.
    pub file_stem: String,
    /// First name-table entry matching `file_stem`, ignoring case.
    pub name_index: Option<NameIndex>,
    pub identity: PackageIdentity,
}

/// Everything decoded from one package plus its resolution state.
#[derive(Debug, Clone)]
pub struct ResolutionSession {
    pub package: InspectedPackage,
    pub names: NameTable,
    pub imports: ImportTable,
    pub packages: PackageTable,
}

impl ResolutionSession {
    pub fn open(path: &Path) -> Result<Self> {
        info!("Inspecting {}", path.display());
        let file = ccp_aio::open_file(path)?;
        Self::decode(path, file)
    }

    /// Decodes GUID, name table and import table from `source`. Any
    /// truncation aborts the whole package.
    pub fn decode<R: Read + Seek>(path: &Path, source: R) -> Result<Self> {
        let mut reader = PackageReader::new(source)?;
        let guid = read_package_guid(&mut reader)?;
        let layout = HeaderLayout::read(&mut reader)?;
        let names = NameTable::decode(&mut reader, &layout)?;
        let imports = ImportTable::decode(&mut reader, &layout)?;
        let packages = PackageTable::from_imports(&imports);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (file_stem, extension) = match PackageExtension::split_file_name(&file_name) {
            Some((stem, extension)) => (stem.to_string(), extension),
            None => (
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                PackageExtension::Unknown,
            ),
        };
        let name_index = names.find_ignore_case(&file_stem);
        debug!(
            "Decoded {}: GUID {}, {} names, {} imports, {} root packages",
            path.display(),
            guid,
            names.len(),
            imports.len(),
            packages.len()
        );

        Ok(Self {
            package: InspectedPackage {
                path: path.to_path_buf(),
                file_stem,
                name_index,
                identity: PackageIdentity { guid, extension },
            },
            names,
            imports,
            packages,
        })
    }

    /// The package's own name, as spelled in its name table when present.
    pub fn package_name(&self) -> &str {
        self.package
            .name_index
            .and_then(|index| self.names.get(index))
            .unwrap_or(self.package.file_stem.as_str())
    }

    pub fn name_of(&self, package: &ResolvedPackage) -> std::borrow::Cow<'_, str> {
        self.names.display(package.name_index)
    }

    pub fn resolve_against(&mut self, root: &Path) -> Result<ResolveSummary> {
        let summary = resolve_packages(root, &self.names, &mut self.packages)?;
        info!(
            "Resolved {} of {} package(s) under {}",
            summary.resolved,
            self.packages.len(),
            root.display()
        );
        Ok(summary)
    }

    pub fn dependencies<'a>(&'a self, baseline: &BaselineSet) -> DependencyList<'a> {
        DependencyList::build(&self.packages, baseline)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ccp_common::model::Guid;

    use super::*;
    use crate::test_utils::{repeated_guid, write_dependency, Import, PackageBuilder};

    const NAMES: [&str; 7] = ["Core", "Package", "A", "B", "C", "Texture2D", "dm-custom"];

    fn inspected() -> PackageBuilder {
        PackageBuilder::new()
            .prefix("DM-Custom")
            .guid(Guid::from_words([0xCAFE, 0, 0, 1]))
            .names(&NAMES)
            .imports(&[
                Import::root(1, 2),
                Import::root(1, 3),
                Import::nested(5, 5, 4),
            ])
    }

    #[test]
    fn decodes_inspected_package() {
        let bytes = inspected().build();
        let session =
            ResolutionSession::decode(Path::new("maps/DM-Custom.udk"), Cursor::new(bytes)).unwrap();
        assert_eq!(session.package.identity.guid, Guid::from_words([0xCAFE, 0, 0, 1]));
        assert_eq!(session.package.identity.extension, PackageExtension::Udk);
        assert_eq!(session.package.name_index, Some(NameIndex(6)));
        assert_eq!(session.package_name(), "dm-custom");
        assert_eq!(session.names.len(), NAMES.len());
        assert_eq!(session.imports.len(), 3);
        assert_eq!(session.packages.len(), 2);
    }

    #[test]
    fn falls_back_to_file_stem() {
        let bytes = PackageBuilder::new().names(&["Core"]).build();
        let session =
            ResolutionSession::decode(Path::new("Other.pkg"), Cursor::new(bytes)).unwrap();
        assert_eq!(session.package.name_index, None);
        assert_eq!(session.package.identity.extension, PackageExtension::Unknown);
        assert_eq!(session.package_name(), "Other");
    }

    #[test]
    fn end_to_end_dependency_list() {
        let dir = tempfile::tempdir().unwrap();
        let map = inspected().write_to(dir.path(), "DM-Custom.udk");
        let game = dir.path().join("game");
        write_dependency(&game, "CookedPC/a.upk", repeated_guid(1));
        let b_path = write_dependency(&game, "CookedPC/Sub/b.u", repeated_guid(2));
        write_dependency(&game, "CookedPC/c.upk", repeated_guid(3));

        let mut session = ResolutionSession::open(&map).unwrap();
        let summary = session.resolve_against(&game).unwrap();
        assert_eq!(summary.resolved, 2);

        let baseline: BaselineSet = [repeated_guid(1)].into_iter().collect();
        let deps = session.dependencies(&baseline);
        assert_eq!(deps.len(), 1);
        let b = deps.entries()[0];
        assert_eq!(session.name_of(b), "B");
        assert_eq!(b.path(), Some(b_path.as_path()));
        assert_eq!(b.extension(), PackageExtension::U);
        assert_eq!(b.guid(), repeated_guid(2));
    }

    #[test]
    fn missing_dependency_is_listed_unresolved() {
        let dir = tempfile::tempdir().unwrap();
        let map = PackageBuilder::new()
            .names(&["Core", "Package", "Missing"])
            .imports(&[Import::root(1, 2)])
            .write_to(dir.path(), "Map.upk");
        let game = dir.path().join("game");
        write_dependency(&game, "Unrelated.upk", repeated_guid(8));

        let mut session = ResolutionSession::open(&map).unwrap();
        session.resolve_against(&game).unwrap();
        let deps = session.dependencies(&BaselineSet::new());
        assert_eq!(deps.len(), 1);
        assert_eq!(session.name_of(deps.entries()[0]), "Missing");
        assert!(deps.entries()[0].guid().is_zero());

        // Boundary case: a zero GUID in the baseline does not hide it.
        let zero_baseline: BaselineSet = [Guid::ZERO].into_iter().collect();
        assert_eq!(session.dependencies(&zero_baseline).len(), 1);
    }

    #[test]
    fn truncated_package_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut bytes = inspected().build();
        bytes.truncate(bytes.len() - 10);
        let path = dir.path().join("Broken.upk");
        std::fs::write(&path, bytes).unwrap();
        assert!(ResolutionSession::open(&path).unwrap_err().is_truncated());
    }
}
