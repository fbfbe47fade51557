// ccp-common/src/model/guid.rs
use std::fmt;

use serde::{Serialize, Serializer};

/// 128-bit package identifier, stored as the four little-endian words it is
/// read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Guid([u32; 4]);

impl Guid {
    pub const ZERO: Guid = Guid([0; 4]);

    pub const fn from_words(words: [u32; 4]) -> Self {
        Self(words)
    }

    pub const fn words(&self) -> [u32; 4] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 4]
    }

    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }
}

impl From<[u32; 4]> for Guid {
    fn from(words: [u32; 4]) -> Self {
        Self(words)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a:08X}{b:08X}{c:08X}{d:08X}")
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_four_padded_words() {
        let guid = Guid::from_words([0x1, 0xABCDEF, 0xFFFF_FFFF, 0]);
        assert_eq!(guid.to_string(), "0000000100ABCDEFFFFFFFFF00000000");
    }

    #[test]
    fn byte_layout_is_word_wise_little_endian() {
        let guid = Guid::from_words([0x0403_0201, 0, 0, 0x100F_0E0D]);
        let bytes = guid.to_le_bytes();
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[12..], &[0x0D, 0x0E, 0x0F, 0x10]);
        assert_eq!(Guid::from_le_bytes(bytes), guid);
    }

    #[test]
    fn zero_is_default() {
        assert!(Guid::default().is_zero());
        assert!(!Guid::from_words([0, 0, 0, 1]).is_zero());
    }
}
