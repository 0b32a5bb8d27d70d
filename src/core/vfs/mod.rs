//! Virtual filesystem over a mounted container
//!
//! - [`VirtualFileSystem`]: mount, lookup, ranged reads, traversal
//! - [`EntryReader`]: `Read + Seek` over one file entry
//! - [`FileSystemVisitor`]: traversal callbacks

mod file;
mod visitor;
#[allow(clippy::module_inception)]
mod vfs;


pub use file::EntryReader;
pub use vfs::{VirtualFileSystem, ROOT_CLUSTER};
pub use visitor::{FileSystemVisitor, PathCollector, TreeCollector};
