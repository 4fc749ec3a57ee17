//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with a version stamp.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Version stamp supplied by the writer
    pub version: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given version.
    pub fn new(value: String, version: u64) -> Self {
        Self { value, version }
    }

    // == Supersedes ==
    /// Returns true if a write stamped `version` may replace this entry.
    ///
    /// Equal versions are accepted so a rebuild of the same state is idempotent.
    pub fn accepts(&self, version: u64) -> bool {
        version >= self.version
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = CacheEntry::new("[]".to_string(), 3);
        assert_eq!(entry.value, "[]");
        assert_eq!(entry.version, 3);
    }

    #[test]
    fn test_entry_accepts_newer_and_equal() {
        let entry = CacheEntry::new("[]".to_string(), 3);
        assert!(entry.accepts(4));
        assert!(entry.accepts(3));
        assert!(!entry.accepts(2));
    }
}
