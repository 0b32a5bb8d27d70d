//! Engine configuration
//!
//! Defaults reproduce the minimal engine exactly: one cached table cluster
//! and a generous recursion bound. A config can be built in code or loaded
//! from TOML:
//!
//! ```toml
//! table_cache_capacity = 8
//! max_folder_depth = 32
//! ```

use crate::error::{Result, VfsError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

pub const DEFAULT_TABLE_CACHE_CAPACITY: usize = 1;
pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 64;

const MAX_TABLE_CACHE_CAPACITY: usize = 4096;
const MAX_FOLDER_DEPTH_LIMIT: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VfsConfig {
    /// Decrypted table clusters kept in memory
    pub table_cache_capacity: usize,

    /// Deepest folder nesting followed by lookups and traversal
    pub max_folder_depth: usize,
}

impl Default for VfsConfig {
    fn default() -> Self {
        VfsConfig {
            table_cache_capacity: DEFAULT_TABLE_CACHE_CAPACITY,
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
        }
    }
}

impl VfsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table_cache_capacity(mut self, capacity: usize) -> Self {
        self.table_cache_capacity = capacity;
        self
    }

    pub fn with_max_folder_depth(mut self, depth: usize) -> Self {
        self.max_folder_depth = depth;
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: VfsConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.table_cache_capacity == 0 || self.table_cache_capacity > MAX_TABLE_CACHE_CAPACITY {
            return Err(VfsError::InvalidConfig(format!(
                "table_cache_capacity must be between 1 and {}, got {}",
                MAX_TABLE_CACHE_CAPACITY, self.table_cache_capacity
            )));
        }

        if self.max_folder_depth == 0 || self.max_folder_depth > MAX_FOLDER_DEPTH_LIMIT {
            return Err(VfsError::InvalidConfig(format!(
                "max_folder_depth must be between 1 and {}, got {}",
                MAX_FOLDER_DEPTH_LIMIT, self.max_folder_depth
            )));
        }

        Ok(())
    }

    pub(crate) fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.table_cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = VfsConfig::default();
        assert_eq!(config.table_cache_capacity, 1);
        assert_eq!(config.max_folder_depth, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = VfsConfig::from_toml_str("table_cache_capacity = 8\n").unwrap();
        assert_eq!(config.table_cache_capacity, 8);
        assert_eq!(config.max_folder_depth, DEFAULT_MAX_FOLDER_DEPTH);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            VfsConfig::from_toml_str("table_cache_capacity = 0"),
            Err(VfsError::InvalidConfig(_))
        ));
        assert!(VfsConfig::new().with_max_folder_depth(0).validate().is_err());
        assert!(VfsConfig::new()
            .with_table_cache_capacity(MAX_TABLE_CACHE_CAPACITY + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(
            VfsConfig::from_toml_str("cache = 3"),
            Err(VfsError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "max_folder_depth = 12").unwrap();
        temp.flush().unwrap();

        let config = VfsConfig::load(temp.path()).unwrap();
        assert_eq!(config.max_folder_depth, 12);
    }
}
