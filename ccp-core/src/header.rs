// ccp-core/src/header.rs
//! Fixed offsets of the package summary for the supported engine generation.
//!
//! The summary starts with a variable-length prefix whose size is stored at
//! `0x0C`. Every other field used here sits at a fixed distance past the end
//! of that prefix.
use std::io::{Read, Seek};

use tracing::trace;

use ccp_common::error::Result;

use crate::reader::PackageReader;

/// Offset of the 32-bit prefix length.
pub const PREFIX_SIZE_OFFSET: u64 = 0x0C;
/// Name count, followed by the name table offset.
pub const NAME_TABLE_FIELDS: u64 = 0x04;
/// Import count, followed by the import table offset.
pub const IMPORT_TABLE_FIELDS: u64 = 0x14;
/// Four 32-bit words of package GUID.
pub const GUID_FIELD: u64 = 0x30;

/// Count/offset pair locating one of the summary's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLocation {
    pub count: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    prefix_end: u64,
}

impl HeaderLayout {
    pub fn read<R: Read + Seek>(reader: &mut PackageReader<R>) -> Result<Self> {
        reader.seek_to(PREFIX_SIZE_OFFSET)?;
        let prefix_len = reader.read_u32()?;
        let prefix_end = reader.position() + u64::from(prefix_len);
        trace!("Header prefix is {prefix_len} bytes, ends at {prefix_end:#x}");
        Ok(Self { prefix_end })
    }

    pub fn prefix_end(&self) -> u64 {
        self.prefix_end
    }

    pub fn name_table<R: Read + Seek>(
        &self,
        reader: &mut PackageReader<R>,
    ) -> Result<TableLocation> {
        self.table_at(reader, NAME_TABLE_FIELDS)
    }

    pub fn import_table<R: Read + Seek>(
        &self,
        reader: &mut PackageReader<R>,
    ) -> Result<TableLocation> {
        self.table_at(reader, IMPORT_TABLE_FIELDS)
    }

    /// Positions the reader on the package GUID.
    pub fn seek_guid<R: Read + Seek>(&self, reader: &mut PackageReader<R>) -> Result<()> {
        reader.seek_to(self.prefix_end + GUID_FIELD)
    }

    fn table_at<R: Read + Seek>(
        &self,
        reader: &mut PackageReader<R>,
        field: u64,
    ) -> Result<TableLocation> {
        reader.seek_to(self.prefix_end + field)?;
        let count = reader.read_u32()?;
        let offset = reader.read_u32()?;
        Ok(TableLocation { count, offset })
    }
}
