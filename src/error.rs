//! Error type for cache construction.
//!
//! A cache miss is not an error: lookups and removals report absence through
//! `Option`/`bool`. The only failure a caller can observe is asking for a
//! cache that cannot hold anything.

use thiserror::Error;

/// Errors returned when building a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The requested capacity was zero.
    #[error("invalid configuration: capacity must be at least 1, got {capacity}")]
    InvalidConfiguration {
        /// The rejected capacity.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_invalid_configuration_message() {
        let err = CacheError::InvalidConfiguration { capacity: 0 };
        assert_eq!(
            err.to_string(),
            "invalid configuration: capacity must be at least 1, got 0"
        );
    }
}
