//! Content digest and duplicate tracking.
//!
//! The digest is only a dedup key, so collision resistance requirements
//! are weak and a fast non-cryptographic 128-bit hash is enough.

use std::collections::HashSet;

use xxhash_rust::xxh3::xxh3_128;

/// 128-bit content digest of a byte buffer, as a 32-digit hex string.
pub fn content_digest(buffer: &[u8]) -> String {
    format!("{:032x}", xxh3_128(buffer))
}

/// Dedup keys seen during one collection run.
#[derive(Debug, Default)]
pub struct DedupTable {
    seen: HashSet<String>,
}

impl DedupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key and report whether it was already present.
    pub fn is_duplicate(&mut self, key: String) -> bool {
        !self.seen.insert(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_hex() {
        let digest = content_digest(b"hello\n");
        assert_eq!(digest.len(), 32);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(digest, content_digest(b"hello\n"));
        assert_ne!(digest, content_digest(b"hello"));
    }

    #[test]
    fn dedup_flags_second_sight() {
        let mut table = DedupTable::new();
        let key = content_digest(b"a\n");

        assert!(!table.is_duplicate(key.clone()));
        assert!(table.is_duplicate(key));
        assert!(!table.is_duplicate(content_digest(b"b\n")));
    }
}
