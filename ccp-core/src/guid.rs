// ccp-core/src/guid.rs
use std::io::{Read, Seek};
use std::path::Path;

use tracing::trace;

use ccp_common::error::Result;
use ccp_common::model::Guid;

use crate::header::HeaderLayout;
use crate::reader::PackageReader;

/// Reads the package GUID from an open package source.
pub fn read_package_guid<R: Read + Seek>(reader: &mut PackageReader<R>) -> Result<Guid> {
    let layout = HeaderLayout::read(reader)?;
    layout.seek_guid(reader)?;
    reader.read_guid()
}

/// Opens `path` and reads its package GUID.
pub fn read_package_guid_from_file(path: &Path) -> Result<Guid> {
    let file = ccp_aio::open_file(path)?;
    let mut reader = PackageReader::new(file)?;
    let guid = read_package_guid(&mut reader)?;
    trace!("{} has GUID {}", path.display(), guid);
    Ok(guid)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_utils::{repeated_guid, write_dependency, PackageBuilder};

    #[test]
    fn guid_follows_prefix() {
        let guid = Guid::from_words([0xDEADBEEF, 1, 2, 3]);
        for prefix in ["", "x", "A-Much-Longer-Folder-Name"] {
            let bytes = PackageBuilder::new().prefix(prefix).guid(guid).build();
            let mut reader = PackageReader::new(Cursor::new(bytes)).unwrap();
            assert_eq!(read_package_guid(&mut reader).unwrap(), guid);
        }
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dependency(dir.path(), "Pkg.upk", repeated_guid(7));
        assert_eq!(read_package_guid_from_file(&path).unwrap(), repeated_guid(7));
    }

    #[test]
    fn short_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.upk");
        std::fs::write(&path, [0u8; 0x20]).unwrap();
        assert!(read_package_guid_from_file(&path).unwrap_err().is_truncated());
    }
}
