// ccp-core/src/names.rs
use std::borrow::Cow;
use std::io::{Read, Seek};

use tracing::debug;

use ccp_common::error::Result;
use ccp_common::model::NameIndex;

use crate::header::HeaderLayout;
use crate::reader::PackageReader;

/// Object flags stored after every name; skipped, not interpreted.
const NAME_FLAGS_LEN: u64 = 8;
/// Smallest possible entry: length field plus flags.
const MIN_ENTRY_LEN: u64 = 4 + NAME_FLAGS_LEN;

/// The package's interned string pool. Indices are stable `0..len`.
/// Duplicates are legal; lookups resolve to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    names: Vec<String>,
}

impl NameTable {
    /// Decodes the name table. A truncated table is discarded as a whole.
    pub fn decode<R: Read + Seek>(
        reader: &mut PackageReader<R>,
        layout: &HeaderLayout,
    ) -> Result<Self> {
        let location = layout.name_table(reader)?;
        debug!(
            "Decoding name table ({} names at {:08x})",
            location.count, location.offset
        );
        reader.seek_to(u64::from(location.offset))?;
        reader.ensure_available(u64::from(location.count) * MIN_ENTRY_LEN)?;

        let mut names = Vec::with_capacity(location.count as usize);
        for _ in 0..location.count {
            names.push(read_name(reader)?);
            reader.skip(NAME_FLAGS_LEN)?;
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: NameIndex) -> Option<&str> {
        self.names.get(index.as_usize()).map(String::as_str)
    }

    /// Name for display; out-of-range indices render as a placeholder.
    pub fn display(&self, index: NameIndex) -> Cow<'_, str> {
        match self.get(index) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("<invalid name {index}>")),
        }
    }

    /// First index whose name equals `name`, ignoring ASCII case.
    pub fn find_ignore_case(&self, name: &str) -> Option<NameIndex> {
        self.position(|candidate| candidate.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NameIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NameIndex(i as u32), name.as_str()))
    }

    fn position(&self, mut pred: impl FnMut(&str) -> bool) -> Option<NameIndex> {
        self.names
            .iter()
            .position(|candidate| pred(candidate))
            .map(|i| NameIndex(i as u32))
    }
}

impl FromIterator<String> for NameTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Reads one length-prefixed name. The length counts the terminator.
/// A negative length marks a UTF-16 name of `-length` code units.
fn read_name<R: Read + Seek>(reader: &mut PackageReader<R>) -> Result<String> {
    let length = reader.read_i32()?;
    if length >= 0 {
        let bytes = reader.read_bytes(u64::from(length.unsigned_abs()))?;
        // ANSI names are Latin-1: every byte maps to the code point of the same value.
        Ok(bytes
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect())
    } else {
        let bytes = reader.read_bytes(u64::from(length.unsigned_abs()) * 2)?;
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .take_while(|&unit| unit != 0)
            .collect();
        Ok(String::from_utf16_lossy(&units))
    }
}
