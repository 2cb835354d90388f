//! Manager configuration.
//!
//! ```
//! use ddd_rs::config::DddConfig;
//! use ddd_rs::ddd::DddManager;
//!
//! let config = DddConfig::default().with_subtable_bits(8).with_cache_bits(12);
//! let mgr = DddManager::with_config(config);
//! assert_eq!(mgr.num_nodes(), 0);
//! ```

use crate::subtable::DEFAULT_BUCKET_BITS;

/// Sizing parameters of a [`DddManager`][crate::ddd::DddManager].
///
/// All sizes are initial sizes: node storage and caches grow on demand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DddConfig {
    /// Initial capacity of the node storage.
    pub capacity: usize,
    /// Number of bucket bits of each per-variable unique subtable.
    pub subtable_bits: usize,
    /// Initial size (2^bits) of the operation and apply caches.
    pub cache_bits: usize,
}

impl Default for DddConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            subtable_bits: DEFAULT_BUCKET_BITS,
            cache_bits: 12,
        }
    }
}

impl DddConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_subtable_bits(mut self, bits: usize) -> Self {
        assert!(bits <= 31, "Subtable bits should be in the range 0..=31");
        self.subtable_bits = bits;
        self
    }

    pub fn with_cache_bits(mut self, bits: usize) -> Self {
        assert!(bits <= 31, "Cache bits should be in the range 0..=31");
        self.cache_bits = bits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = DddConfig::default().with_capacity(16).with_subtable_bits(4).with_cache_bits(6);
        assert_eq!(config.capacity, 16);
        assert_eq!(config.subtable_bits, 4);
        assert_eq!(config.cache_bits, 6);
    }

    #[test]
    #[should_panic(expected = "Cache bits should be in the range 0..=31")]
    fn test_cache_bits_too_large() {
        DddConfig::default().with_cache_bits(40);
    }
}
