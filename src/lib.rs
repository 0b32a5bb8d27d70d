//! # sai-vfs - Read-only access to SAI document containers
//!
//! A SAI document is an encrypted cluster filesystem: fixed 4 KiB clusters,
//! per-cluster checksums held in table clusters, and a tree of folder
//! listings rooted at cluster 2. `sai-vfs` mounts such a container, verifies
//! every cluster once, and then exposes path lookup, ranged reads and
//! depth-first traversal of the decrypted contents.
//!
//! - **Integrity first**: nothing is readable until every cluster checks out
//! - **Bounded memory**: one scratch cluster plus a small table cache
//! - **Any source**: mount from a path or any `Read + Seek` stream
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sai_vfs::{Result, VirtualFileSystem};
//!
//! # fn main() -> Result<()> {
//! let mut fs = VirtualFileSystem::new();
//! fs.mount("painting.sai")?;
//!
//! let canvas = fs.get_entry("canvas")?;
//! let mut header = [0u8; 64];
//! fs.read(&canvas, 0, &mut header)?;
//!
//! for (path, entry) in fs.list_files()? {
//!     println!("{} ({} bytes)", path, entry.size);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Shared Access
//!
//! ```rust,no_run
//! use sai_vfs::{Result, SharedFileSystem};
//!
//! # fn main() -> Result<()> {
//! let shared = SharedFileSystem::open("painting.sai")?;
//! let worker = shared.clone();
//! std::thread::spawn(move || worker.read_path("thumbnail"));
//! # Ok(())
//! # }
//! ```

pub mod core;

// Re-export core modules internally so crate:: paths in core still work
#[allow(unused_imports)]
pub(crate) use crate::core::{
    cache, catalog, cipher, cluster, config, error, io, validation, vfs,
};

#[cfg(any(test, feature = "test-util"))]
pub use crate::core::builder::ImageBuilder;

pub use crate::core::{
    cache::CacheStats,
    catalog::{Entry, EntryNode, EntryType},
    cluster::{Cluster, CLUSTER_SIZE},
    config::VfsConfig,
    error::{Result, VfsError},
    io::ContainerSource,
    validation::EntryName,
    vfs::{EntryReader, FileSystemVisitor, VirtualFileSystem, ROOT_CLUSTER},
};

use parking_lot::{Mutex, MutexGuard};
use std::path::Path;
use std::sync::Arc;

/// Mount the container at `path` with the default configuration
pub fn open<P: AsRef<Path>>(path: P) -> Result<VirtualFileSystem> {
    open_with_config(path, VfsConfig::default())
}

/// Mount the container at `path` with `config`
pub fn open_with_config<P: AsRef<Path>>(path: P, config: VfsConfig) -> Result<VirtualFileSystem> {
    let mut fs = VirtualFileSystem::with_config(config)?;
    fs.mount(path)?;
    Ok(fs)
}

/// One engine behind a lock, cheap to clone across threads
///
/// Every call takes the lock for its whole duration, so concurrent callers
/// are serialised; the engine itself is never shared unguarded.
#[derive(Debug, Clone)]
pub struct SharedFileSystem {
    inner: Arc<Mutex<VirtualFileSystem>>,
}

impl SharedFileSystem {
    pub fn new(fs: VirtualFileSystem) -> Self {
        SharedFileSystem {
            inner: Arc::new(Mutex::new(fs)),
        }
    }

    /// Mount the container at `path` and wrap it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(open(path)?))
    }

    /// Exclusive access for multi-step work (e.g. an `EntryReader`)
    pub fn lock(&self) -> MutexGuard<'_, VirtualFileSystem> {
        self.inner.lock()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.lock().is_mounted()
    }

    pub fn get_entry(&self, path: &str) -> Result<Entry> {
        self.inner.lock().get_entry(path)
    }

    pub fn read(&self, entry: &Entry, offset: u64, destination: &mut [u8]) -> Result<()> {
        self.inner.lock().read(entry, offset, destination)
    }

    pub fn read_path(&self, path: &str) -> Result<Vec<u8>> {
        self.inner.lock().read_path(path)
    }

    pub fn list_files(&self) -> Result<Vec<(String, Entry)>> {
        self.inner.lock().list_files()
    }

    pub fn unmount(&self) {
        self.inner.lock().unmount();
    }
}

impl From<VirtualFileSystem> for SharedFileSystem {
    fn from(fs: VirtualFileSystem) -> Self {
        Self::new(fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let mut builder = ImageBuilder::new();
        builder.add_folder("layers").unwrap();
        builder.add_file("layers/00000002", b"layer").unwrap();
        builder.add_file("thumbnail", b"thumb").unwrap();

        let path = dir.path().join("sample.sai");
        builder.write_to(&path).unwrap();
        path
    }

    #[test]
    fn test_open_helpers() -> Result<()> {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = sample_path(&temp_dir);

        let mut fs = open(&path)?;
        assert_eq!(fs.read_path("thumbnail")?, b"thumb");

        let config = VfsConfig::new().with_table_cache_capacity(2);
        let fs = open_with_config(&path, config.clone())?;
        assert_eq!(fs.config(), &config);

        Ok(())
    }

    #[test]
    fn test_shared_clone_sees_same_engine() -> Result<()> {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let shared = SharedFileSystem::open(sample_path(&temp_dir))?;
        let other = shared.clone();

        assert_eq!(other.read_path("layers/00000002")?, b"layer");
        shared.unmount();
        assert!(!other.is_mounted());
        assert!(matches!(other.get_entry("thumbnail"), Err(VfsError::NotMounted)));

        Ok(())
    }

    #[test]
    fn test_shared_lock_for_reader() -> Result<()> {
        use std::io::Read;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let shared = SharedFileSystem::open(sample_path(&temp_dir))?;
        let entry = shared.get_entry("thumbnail")?;

        let mut guard = shared.lock();
        let mut reader = guard.open_entry(&entry)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        assert_eq!(text, "thumb");

        Ok(())
    }

    #[test]
    fn test_image_builder_is_opt_in() {
        let manifest = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
            .unwrap();
        let manifest: toml::Value = toml::from_str(&manifest).unwrap();

        let features = &manifest["features"];
        let default = features["default"].as_array().unwrap();
        assert!(default.iter().all(|f| f.as_str() != Some("test-util")));
        assert!(features.get("test-util").is_some());

        let own = &manifest["dev-dependencies"]["sai-vfs"]["features"];
        assert!(own
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f.as_str() == Some("test-util")));
    }
}
