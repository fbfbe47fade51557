// ccp-core/src/baseline.rs
//! The set of package GUIDs already shipped with the game.
//!
//! Persisted as a little-endian `u32` count followed by that many GUIDs of
//! four `u32` words each, with no padding.
use std::collections::HashSet;
use std::io::{BufWriter, Read, Seek, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use ccp_common::error::Result;
use ccp_common::model::{Guid, PackageIdentity};

use crate::guid::read_package_guid_from_file;
use crate::reader::PackageReader;
use crate::walk::walk_package_files;

const GUID_LEN: u64 = 16;

/// A package found while scanning the game tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePackage {
    pub name: String,
    pub path: PathBuf,
    pub identity: PackageIdentity,
}

/// Records every recognized package under `root`, whatever its name.
pub fn scan_game_packages(root: &Path) -> Result<Vec<GamePackage>> {
    let mut packages = Vec::new();
    walk_package_files(root, |file| {
        match read_package_guid_from_file(&file.path) {
            Ok(guid) => packages.push(GamePackage {
                name: file.base_name.clone(),
                path: file.path.clone(),
                identity: PackageIdentity {
                    guid,
                    extension: file.extension,
                },
            }),
            Err(e) => warn!("Skipping {}: {}", file.path.display(), e),
        }
        ControlFlow::Continue(())
    })?;
    info!(
        "Found {} game package(s) under {}",
        packages.len(),
        root.display()
    );
    Ok(packages)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaselineSet {
    guids: HashSet<Guid>,
}

impl BaselineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set by scanning a game tree.
    pub fn build(root: &Path) -> Result<Self> {
        Ok(Self::from_game_packages(&scan_game_packages(root)?))
    }

    pub fn from_game_packages(packages: &[GamePackage]) -> Self {
        packages.iter().map(|p| p.identity.guid).collect()
    }

    /// Reads a persisted baseline list.
    pub fn load<R: Read + Seek>(source: R) -> Result<Self> {
        let mut reader = PackageReader::new(source)?;
        let count = reader.read_u32()?;
        reader.ensure_available(u64::from(count) * GUID_LEN)?;
        let mut guids = HashSet::with_capacity(count as usize);
        for _ in 0..count {
            guids.insert(reader.read_guid()?);
        }
        debug!("Loaded baseline with {} GUID(s) ({} listed)", guids.len(), count);
        Ok(Self { guids })
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        debug!("Loading baseline list from {}", path.display());
        Self::load(ccp_aio::open_file(path)?)
    }

    /// Writes the set in GUID order so identical sets produce identical files.
    pub fn persist<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut sorted: Vec<&Guid> = self.guids.iter().collect();
        sorted.sort();
        out.write_all(&(sorted.len() as u32).to_le_bytes())?;
        for guid in sorted {
            out.write_all(&guid.to_le_bytes())?;
        }
        Ok(())
    }

    pub fn persist_file(&self, path: &Path) -> Result<()> {
        debug!(
            "Writing baseline list of {} GUID(s) to {}",
            self.len(),
            path.display()
        );
        let mut out = BufWriter::new(ccp_aio::create_file(path)?);
        self.persist(&mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn contains(&self, guid: &Guid) -> bool {
        self.guids.contains(guid)
    }

    pub fn len(&self) -> usize {
        self.guids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guids.is_empty()
    }
}

impl FromIterator<Guid> for BaselineSet {
    fn from_iter<I: IntoIterator<Item = Guid>>(iter: I) -> Self {
        Self {
            guids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use ccp_common::model::PackageExtension;

    use super::*;
    use crate::test_utils::{repeated_guid, write_dependency};

    #[test]
    fn persisted_layout_is_count_then_words() {
        let baseline: BaselineSet = [Guid::from_words([1, 2, 3, 4])].into_iter().collect();
        let mut out = Vec::new();
        baseline.persist(&mut out).unwrap();
        let expected: Vec<u8> = [1u32, 1, 2, 3, 4]
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn load_of_persist_is_identity() {
        let sets: [Vec<Guid>; 3] = [
            vec![],
            vec![Guid::ZERO],
            vec![repeated_guid(1), repeated_guid(2), Guid::from_words([9, 8, 7, 6])],
        ];
        for guids in sets {
            let baseline: BaselineSet = guids.into_iter().collect();
            let mut out = Vec::new();
            baseline.persist(&mut out).unwrap();
            assert_eq!(BaselineSet::load(Cursor::new(out)).unwrap(), baseline);
        }
    }

    #[test]
    fn truncated_list_fails() {
        let mut bytes = 2u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&repeated_guid(1).to_le_bytes());
        assert!(BaselineSet::load(Cursor::new(bytes)).unwrap_err().is_truncated());
        assert!(BaselineSet::load(Cursor::new(Vec::new())).unwrap_err().is_truncated());
    }

    #[test]
    fn build_records_every_package_regardless_of_name() {
        let dir = tempfile::tempdir().unwrap();
        write_dependency(dir.path(), "Engine.u", repeated_guid(1));
        write_dependency(dir.path(), "Maps/DM-Deck.udk", repeated_guid(2));
        write_dependency(dir.path(), "Textures/Env.UPK", repeated_guid(3));
        fs::write(dir.path().join("Notes.txt"), b"ignored").unwrap();
        fs::write(dir.path().join("Broken.upk"), b"short").unwrap();

        let packages = scan_game_packages(dir.path()).unwrap();
        let summary: Vec<(&str, PackageExtension)> = packages
            .iter()
            .map(|p| (p.name.as_str(), p.identity.extension))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Engine", PackageExtension::U),
                ("DM-Deck", PackageExtension::Udk),
                ("Env", PackageExtension::Upk),
            ]
        );

        let baseline = BaselineSet::build(dir.path()).unwrap();
        assert_eq!(baseline.len(), 3);
        assert!(baseline.contains(&repeated_guid(2)));
        assert!(!baseline.contains(&Guid::ZERO));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("against.bin");
        let baseline: BaselineSet = [repeated_guid(6), repeated_guid(7)].into_iter().collect();
        baseline.persist_file(&path).unwrap();
        assert_eq!(BaselineSet::load_file(&path).unwrap(), baseline);
    }
}
