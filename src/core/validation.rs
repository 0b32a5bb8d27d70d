//! Entry names and lookup paths
//!
//! Lookup paths are split on both `.` and `/`, so neither character can
//! appear inside a name that is meant to be reachable by path.

use crate::core::cluster::NAME_CAPACITY;
use crate::error::{Result, VfsError};

/// Characters that separate path tokens
pub const PATH_SEPARATORS: [char; 2] = ['.', '/'];

/// Split a lookup path into name tokens.
///
/// Empty tokens are dropped, so `"/layers//00000002"` and
/// `"layers.00000002"` both yield `["layers", "00000002"]`.
pub fn path_tokens(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATORS).filter(|token| !token.is_empty())
}

/// A name that fits a directory record and survives path tokenisation
///
/// # Rules
/// - 1 to 31 bytes (the record keeps a terminating NUL)
/// - No `.`, `/` or NUL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryName(String);

impl EntryName {
    /// Longest name in bytes
    pub const MAX_LENGTH: usize = NAME_CAPACITY - 1;

    /// Create a new validated name
    ///
    /// # Examples
    ///
    /// ```
    /// use sai_vfs::core::validation::EntryName;
    ///
    /// assert!(EntryName::new("thumbnail").is_ok());
    /// assert!(EntryName::new("canvas.bin").is_err()); // separator
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(EntryName(name))
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(VfsError::InvalidName("name cannot be empty".to_string()));
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(VfsError::InvalidName(format!(
                "name '{}' too long (max {} bytes)",
                name,
                Self::MAX_LENGTH
            )));
        }

        if name.contains(PATH_SEPARATORS) || name.contains('\0') {
            return Err(VfsError::InvalidName(format!(
                "name '{}' cannot contain '.', '/' or NUL",
                name
            )));
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_tokens() {
        let tokens: Vec<&str> = path_tokens("folderA/folderB/fileC").collect();
        assert_eq!(tokens, vec!["folderA", "folderB", "fileC"]);

        let tokens: Vec<&str> = path_tokens("layers.00000002").collect();
        assert_eq!(tokens, vec!["layers", "00000002"]);

        let tokens: Vec<&str> = path_tokens("/layers//mask/").collect();
        assert_eq!(tokens, vec!["layers", "mask"]);

        assert_eq!(path_tokens("").count(), 0);
        assert_eq!(path_tokens("./.").count(), 0);
    }

    #[test]
    fn test_valid_names() {
        assert!(EntryName::new("canvas").is_ok());
        assert!(EntryName::new("00000002").is_ok());
        assert!(EntryName::new("Thumbnail Image").is_ok());
        assert!(EntryName::new("a".repeat(31)).is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(EntryName::new("").is_err());
        assert!(EntryName::new("a".repeat(32)).is_err());
        assert!(EntryName::new("layer.png").is_err());
        assert!(EntryName::new("layers/1").is_err());
        assert!(EntryName::new("nul\0byte").is_err());
    }
}
