//! SAI container core
//!
//! A SAI document is a flat run of 4 KiB clusters. Every 512th cluster is a
//! table holding the checksums (and data keys) of the 511 clusters after it;
//! all other clusters are data, either raw file bytes or a directory listing
//! of 64 fixed-size records.
//!
//! - [`cipher`] - Table and data cluster transforms, cluster checksum
//! - [`cluster`] - Cluster buffer and typed views of table and directory contents
//! - [`catalog`] - Directory entries and collected trees
//! - [`io`] - Backing byte stream
//! - [`cache`] - Decrypted table cache
//! - [`config`] - Engine configuration
//! - [`validation`] - Path tokenisation and entry names
//! - [`vfs`] - The mounted filesystem engine
//! - `builder` - Synthetic container images (`test-util` feature)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sai_vfs::core::vfs::VirtualFileSystem;
//!
//! let mut fs = VirtualFileSystem::new();
//! fs.mount("painting.sai").unwrap();
//!
//! let thumbnail = fs.get_entry("thumbnail").unwrap();
//! let bytes = fs.read_all(&thumbnail).unwrap();
//! println!("thumbnail: {} bytes", bytes.len());
//! ```

#[cfg(any(test, feature = "test-util"))]
pub mod builder;
pub mod cache;
pub mod catalog;
pub mod cipher;
pub mod cluster;
pub mod config;
pub mod error;
pub mod io;
mod key_table;
pub mod validation;
pub mod vfs;
