// ccp-core/src/reader.rs
//! Bounds-checked little-endian cursor over a seekable package source.
use std::io::{Read, Seek, SeekFrom};

use ccp_common::error::{CcpError, Result};
use ccp_common::model::Guid;

pub struct PackageReader<R> {
    inner: R,
    len: u64,
    pos: u64,
}

impl<R: Read + Seek> PackageReader<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len, pos: 0 })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Moves to an absolute offset. Seeking past the end is allowed; the next
    /// read reports the truncation.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.pos = offset;
        Ok(())
    }

    /// Moves forward without reading. The skipped bytes must exist.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let target = self.pos.checked_add(count).ok_or(CcpError::TruncatedInput {
            offset: self.pos,
            wanted: count,
            available: self.len,
        })?;
        self.ensure_available(count)?;
        self.seek_to(target)
    }

    /// Fails with `TruncatedInput` unless `count` bytes remain from the cursor.
    pub fn ensure_available(&self, count: u64) -> Result<()> {
        let remaining = self.len.saturating_sub(self.pos);
        if count > remaining {
            return Err(CcpError::TruncatedInput {
                offset: self.pos,
                wanted: count,
                available: self.len,
            });
        }
        Ok(())
    }

    pub fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure_available(buf.len() as u64)?;
        self.inner.read_exact(buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                CcpError::TruncatedInput {
                    offset: self.pos,
                    wanted: buf.len() as u64,
                    available: self.len,
                }
            } else {
                CcpError::from(e)
            }
        })?;
        self.pos += buf.len() as u64;
        Ok(())
    }

    pub fn read_bytes(&mut self, count: u64) -> Result<Vec<u8>> {
        self.ensure_available(count)?;
        let mut buf = vec![0u8; count as usize];
        self.read_exact_into(&mut buf)?;
        Ok(buf)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact_into(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact_into(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    pub fn read_guid(&mut self) -> Result<Guid> {
        let mut buf = [0u8; 16];
        self.read_exact_into(&mut buf)?;
        Ok(Guid::from_le_bytes(buf))
    }
}
