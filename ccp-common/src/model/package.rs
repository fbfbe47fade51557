// ccp-common/src/model/package.rs
use std::fmt;

use serde::Serialize;

use super::guid::Guid;

/// Index into a package's name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NameIndex(pub u32);

impl NameIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageExtension {
    Udk,
    Upk,
    U,
    #[default]
    Unknown,
}

/// Suffixes in recognition order. The first one a file name ends with wins.
const RECOGNIZED_SUFFIXES: [(&str, PackageExtension); 3] = [
    (".upk", PackageExtension::Upk),
    (".udk", PackageExtension::Udk),
    (".u", PackageExtension::U),
];

impl PackageExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageExtension::Udk => "udk",
            PackageExtension::Upk => "upk",
            PackageExtension::U => "u",
            PackageExtension::Unknown => "",
        }
    }

    /// Splits a bare file name into its base name and package extension.
    ///
    /// Suffixes are matched case-insensitively in the fixed order
    /// `.upk`, `.udk`, `.u`. Returns `None` for files that are not packages.
    pub fn split_file_name(file_name: &str) -> Option<(&str, PackageExtension)> {
        RECOGNIZED_SUFFIXES
            .iter()
            .find_map(|(suffix, extension)| {
                let stem_len = file_name.len().checked_sub(suffix.len())?;
                if !file_name.is_char_boundary(stem_len) {
                    return None;
                }
                let (stem, tail) = file_name.split_at(stem_len);
                tail.eq_ignore_ascii_case(suffix)
                    .then_some((stem, *extension))
            })
    }
}

impl fmt::Display for PackageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of an on-disk package: what it is, not where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PackageIdentity {
    pub guid: Guid,
    pub extension: PackageExtension,
}
