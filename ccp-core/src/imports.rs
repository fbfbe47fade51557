// ccp-core/src/imports.rs
use std::io::{Read, Seek};

use tracing::debug;

use ccp_common::error::Result;
use ccp_common::model::NameIndex;

use crate::header::HeaderLayout;
use crate::reader::PackageReader;

/// Name-instance number that follows every name index in this format generation.
const NAME_NUMBER_LEN: u64 = 4;
/// On-disk size of one import record.
const RECORD_LEN: u64 = 4 * 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRecord {
    pub package_name_index: NameIndex,
    pub class_name_index: NameIndex,
    pub package_reference: i32,
    pub object_name_index: NameIndex,
}

impl ImportRecord {
    /// A zero reference means the record names a whole package rather than
    /// an object nested inside one.
    pub fn is_root_package(&self) -> bool {
        self.package_reference == 0
    }

    fn read<R: Read + Seek>(reader: &mut PackageReader<R>) -> Result<Self> {
        let package_name_index = NameIndex(reader.read_u32()?);
        reader.skip(NAME_NUMBER_LEN)?;
        let class_name_index = NameIndex(reader.read_u32()?);
        reader.skip(NAME_NUMBER_LEN)?;
        let package_reference = reader.read_i32()?;
        let object_name_index = NameIndex(reader.read_u32()?);
        reader.skip(NAME_NUMBER_LEN)?;
        Ok(Self {
            package_name_index,
            class_name_index,
            package_reference,
            object_name_index,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    records: Vec<ImportRecord>,
    root_count: usize,
}

impl ImportTable {
    /// Decodes every import record in table order, counting root packages.
    pub fn decode<R: Read + Seek>(
        reader: &mut PackageReader<R>,
        layout: &HeaderLayout,
    ) -> Result<Self> {
        let location = layout.import_table(reader)?;
        debug!(
            "Decoding import table ({} imports at {:08x})",
            location.count, location.offset
        );
        reader.seek_to(u64::from(location.offset))?;
        reader.ensure_available(u64::from(location.count) * RECORD_LEN)?;

        let mut records = Vec::with_capacity(location.count as usize);
        let mut root_count = 0;
        for _ in 0..location.count {
            let record = ImportRecord::read(reader)?;
            if record.is_root_package() {
                root_count += 1;
            }
            records.push(record);
        }
        debug!("{root_count} of {} imports are root packages", records.len());
        Ok(Self {
            records,
            root_count,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ImportRecord] {
        &self.records
    }

    /// Number of root package imports counted while decoding.
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    pub fn root_packages(&self) -> impl Iterator<Item = &ImportRecord> {
        self.records.iter().filter(|r| r.is_root_package())
    }
}

impl FromIterator<ImportRecord> for ImportTable {
    fn from_iter<I: IntoIterator<Item = ImportRecord>>(iter: I) -> Self {
        let records: Vec<ImportRecord> = iter.into_iter().collect();
        let root_count = records.iter().filter(|r| r.is_root_package()).count();
        Self {
            records,
            root_count,
        }
    }
}
