// ccp-core/src/test_utils.rs
//! Synthesises package files laid out the way the decoders expect.
use std::fs;
use std::path::{Path, PathBuf};

use ccp_common::model::Guid;

/// Summary bytes between the end of the prefix and the first table.
const SUMMARY_TAIL: usize = 0x40;

#[derive(Debug, Clone, Copy)]
pub struct Import {
    pub package: u32,
    pub class: u32,
    pub reference: i32,
    pub object: u32,
}

impl Import {
    /// A root package import: class `Package`, reference 0.
    pub fn root(class: u32, object: u32) -> Self {
        Self {
            package: 0,
            class,
            reference: 0,
            object,
        }
    }

    pub fn nested(class: u32, reference: i32, object: u32) -> Self {
        Self {
            package: 0,
            class,
            reference,
            object,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageBuilder {
    prefix: Vec<u8>,
    names: Vec<String>,
    imports: Vec<Import>,
    guid: Guid,
}

impl PackageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable-length prefix (written NUL terminated).
    pub fn prefix(mut self, text: &str) -> Self {
        self.prefix = text.as_bytes().to_vec();
        self.prefix.push(0);
        self
    }

    pub fn names(mut self, names: &[&str]) -> Self {
        self.names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn imports(mut self, imports: &[Import]) -> Self {
        self.imports = imports.to_vec();
        self
    }

    pub fn guid(mut self, guid: Guid) -> Self {
        self.guid = guid;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        put_u32(&mut out, 0x9E2A_83C1); // tag
        put_u32(&mut out, 868); // version
        put_u32(&mut out, 0); // header size, unused
        put_u32(&mut out, self.prefix.len() as u32);
        out.extend_from_slice(&self.prefix);

        let prefix_end = out.len();
        let name_offset = prefix_end + SUMMARY_TAIL;
        let name_bytes: usize = self.names.iter().map(|n| 4 + n.len() + 1 + 8).sum();
        let import_offset = name_offset + name_bytes;

        put_u32(&mut out, 0); // package flags
        put_u32(&mut out, self.names.len() as u32);
        put_u32(&mut out, name_offset as u32);
        put_u32(&mut out, 0); // export count
        put_u32(&mut out, 0); // export offset
        put_u32(&mut out, self.imports.len() as u32);
        put_u32(&mut out, import_offset as u32);
        out.resize(prefix_end + 0x30, 0);
        for word in self.guid.words() {
            put_u32(&mut out, word);
        }
        assert_eq!(out.len(), name_offset);

        for name in &self.names {
            put_u32(&mut out, name.len() as u32 + 1);
            out.extend_from_slice(name.as_bytes());
            out.push(0);
            out.extend_from_slice(&[0xAA; 8]); // object flags
        }
        for import in &self.imports {
            put_u32(&mut out, import.package);
            put_u32(&mut out, 0);
            put_u32(&mut out, import.class);
            put_u32(&mut out, 0);
            out.extend_from_slice(&import.reference.to_le_bytes());
            put_u32(&mut out, import.object);
            put_u32(&mut out, 0);
        }
        out
    }

    /// Writes the package below `root`, creating parent directories.
    pub fn write_to(&self, root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, self.build()).unwrap();
        path
    }
}

pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// A GUID with every nibble set to `nibble`, e.g. `0x11..11`.
pub fn repeated_guid(nibble: u8) -> Guid {
    let byte = u32::from(nibble & 0x0F) * 0x1111_1111;
    Guid::from_words([byte; 4])
}

/// Writes a dependency file that only needs a readable GUID.
pub fn write_dependency(root: &Path, relative: &str, guid: Guid) -> PathBuf {
    PackageBuilder::new()
        .prefix("None")
        .guid(guid)
        .write_to(root, relative)
}
