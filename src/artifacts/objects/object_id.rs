//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They identify
//! blobs and commits in the object database.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters, used for display
//! - Lookup prefix: First 6 characters, used by `find_commit_by_prefix`

use crate::artifacts::objects::{LOOKUP_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use serde::{Deserialize, Serialize};

/// Object identifier (SHA-1 digest)
///
/// A 40-character hexadecimal string that uniquely identifies an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from raw digest bytes
    pub fn from_digest(digest: &[u8]) -> Self {
        Self(digest.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }

    /// Check whether the given abbreviation designates this object
    ///
    /// Only the first 6 characters of the abbreviation are compared; a shorter
    /// abbreviation is compared as a whole.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let significant = prefix
            .chars()
            .take(LOOKUP_PREFIX_LENGTH)
            .collect::<String>()
            .to_ascii_lowercase();

        !significant.is_empty() && self.0.starts_with(&significant)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        Self::try_parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    proptest! {
        #[test]
        fn parsing_accepts_any_40_hex_digits(id in "[0-9a-f]{40}") {
            let oid = ObjectId::try_parse(id.clone()).unwrap();
            assert_eq!(oid.as_ref(), id);
        }

        #[test]
        fn short_prefixes_match_their_object(id in "[0-9a-f]{40}", len in 1usize..6) {
            let oid = ObjectId::try_parse(id.clone()).unwrap();
            assert!(oid.matches_prefix(&id[..len]));
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc".to_string()).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(40)).is_err());
    }

    #[test]
    fn only_six_characters_are_significant_for_lookup() {
        let oid = ObjectId::try_parse(format!("abcdef{}", "0".repeat(34))).unwrap();

        assert!(oid.matches_prefix("abcdef"));
        assert!(oid.matches_prefix("ABCDEF9999"));
        assert!(!oid.matches_prefix("abcdee"));
        assert!(!oid.matches_prefix(""));
    }

    #[test]
    fn digest_bytes_are_hex_encoded() {
        let oid = ObjectId::from_digest(&[0u8, 255, 16, 1]);
        assert_eq!(oid.as_ref(), "00ff1001");
    }
}
