//! Filesystem engine
//!
//! Mounting opens the backing stream and decrypts and checksums every
//! cluster once; only a fully verified container becomes mounted. All other
//! operations are read-only projections of the mounted container.

use super::file::EntryReader;
use super::visitor::{FileSystemVisitor, PathCollector, TreeCollector};
use crate::core::cache::{CacheStats, ClusterCache};
use crate::core::catalog::{Entry, EntryNode, EntryType};
use crate::core::cluster::{Cluster, ClusterKind, CLUSTER_SIZE};
use crate::core::config::VfsConfig;
use crate::core::io::{ContainerFile, ContainerSource};
use crate::core::validation::path_tokens;
use crate::error::{Result, VfsError};
use std::path::Path;
use tracing::{debug, info, warn};

/// Cluster holding the root directory listing
pub const ROOT_CLUSTER: u32 = 2;

/// State that only exists while mounted
struct Mounted {
    source: ContainerFile,
    cache: ClusterCache,
    /// Output buffer reused by every cluster load
    scratch: Box<Cluster>,
}

impl Mounted {
    fn new(source: ContainerFile, config: &VfsConfig) -> Self {
        Mounted {
            source,
            cache: ClusterCache::new(config.cache_capacity()),
            scratch: Box::default(),
        }
    }

    /// Decrypt `index` into the scratch buffer, returning its recorded checksum
    fn load(&mut self, index: u32) -> Result<u32> {
        self.cache
            .get_cluster(&mut self.source, index, &mut self.scratch)
    }

    fn cluster_count(&self) -> u32 {
        self.source.cluster_count()
    }

    /// Decrypt and checksum every cluster in order
    fn verify(&mut self) -> Result<()> {
        for index in 0..self.cluster_count() {
            let stored = self.load(index)?;
            let is_table = ClusterKind::of(index) == ClusterKind::Table;
            let computed = self.scratch.checksum(is_table);

            if stored != computed {
                warn!(
                    "Checksum mismatch in {} cluster {}: stored {:#010x}, computed {:#010x}",
                    if is_table { "table" } else { "data" },
                    index,
                    stored,
                    computed
                );
                return Err(VfsError::ChecksumMismatch {
                    cluster: index,
                    stored,
                    computed,
                });
            }
        }
        Ok(())
    }

    /// Entries of the listing at `cluster`, in slot order
    fn listing(&mut self, cluster: u32) -> Result<Vec<Entry>> {
        self.load(cluster)?;
        Ok(self
            .scratch
            .as_directory()
            .records()
            .map(|record| Entry::from_record(&record))
            .collect())
    }

    fn visit<V: FileSystemVisitor + ?Sized>(
        &mut self,
        cluster: u32,
        visitor: &mut V,
        depth: usize,
        max_depth: usize,
    ) -> Result<()> {
        if depth > max_depth {
            return Err(VfsError::FolderTooDeep { depth: max_depth });
        }

        // Collected up front: recursion reuses the scratch buffer.
        for entry in self.listing(cluster)? {
            match entry.entry_type {
                EntryType::File => visitor.visit_file(&entry),
                EntryType::Folder => {
                    visitor.visit_folder_begin(&entry);
                    self.visit(entry.cluster, visitor, depth + 1, max_depth)?;
                    visitor.visit_folder_end();
                }
                EntryType::Unknown(tag) => {
                    debug!("Skipping entry '{}' with unknown type {:#04x}", entry.name, tag);
                }
            }
        }
        Ok(())
    }
}

/// Read-only view of a mounted container
pub struct VirtualFileSystem {
    config: VfsConfig,
    mounted: Option<Mounted>,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    /// Create an unmounted engine with the default configuration
    pub fn new() -> Self {
        VirtualFileSystem {
            config: VfsConfig::default(),
            mounted: None,
        }
    }

    /// Create an unmounted engine with a validated configuration
    pub fn with_config(config: VfsConfig) -> Result<Self> {
        config.validate()?;
        Ok(VirtualFileSystem {
            config,
            mounted: None,
        })
    }

    pub fn config(&self) -> &VfsConfig {
        &self.config
    }

    /// Open and verify the container at `path`.
    ///
    /// Any previously mounted container is released first. On failure the
    /// engine is left unmounted and the file is closed.
    pub fn mount<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.unmount();
        info!("Mounting container at {:?}", path.as_ref());
        let source = ContainerFile::open(path)?;
        self.mount_container(source)
    }

    /// Verify and mount a container held by any seekable reader
    pub fn mount_reader<R: ContainerSource + 'static>(&mut self, reader: R) -> Result<()> {
        self.unmount();
        let source = ContainerFile::from_source(reader)?;
        self.mount_container(source)
    }

    fn mount_container(&mut self, source: ContainerFile) -> Result<()> {
        let mut mounted = Mounted::new(source, &self.config);
        mounted.verify()?;

        info!(
            "Mounted container: {} clusters ({} bytes)",
            mounted.cluster_count(),
            mounted.source.len()
        );
        self.mounted = Some(mounted);
        Ok(())
    }

    /// Close the backing stream and drop all cached clusters
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            info!("Unmounted container");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Number of clusters (0 when unmounted)
    pub fn cluster_count(&self) -> u32 {
        self.mounted.as_ref().map_or(0, Mounted::cluster_count)
    }

    /// Bytes covered by whole clusters (0 when unmounted)
    pub fn size(&self) -> u64 {
        u64::from(self.cluster_count()) * CLUSTER_SIZE as u64
    }

    /// Path of the mounted container, if it came from disk
    pub fn path(&self) -> Option<&Path> {
        self.mounted.as_ref().and_then(|m| m.source.path())
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.mounted.as_ref().map(|m| m.cache.stats())
    }

    fn mounted(&mut self) -> Result<&mut Mounted> {
        self.mounted.as_mut().ok_or(VfsError::NotMounted)
    }

    /// Re-run the full integrity scan on the mounted container
    pub fn verify(&mut self) -> Result<()> {
        self.mounted()?.verify()
    }

    /// Decrypt cluster `index` into `out`, returning its recorded checksum.
    pub fn get_cluster(&mut self, index: u32, out: &mut Cluster) -> Result<u32> {
        let mounted = self.mounted()?;
        mounted.cache.get_cluster(&mut mounted.source, index, out)
    }

    /// Resolve a `/`- or `.`-separated path from the root folder.
    ///
    /// Matching is exact and case-sensitive on the stored name bytes; the
    /// first matching slot wins. Every segment but the last must name a
    /// folder. Names that are not valid UTF-8 cannot be reached this way.
    pub fn get_entry(&mut self, path: &str) -> Result<Entry> {
        let max_depth = self.config.max_folder_depth;
        let mounted = self.mounted()?;

        let mut tokens = path_tokens(path);
        let mut token = tokens
            .next()
            .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        let mut cluster = ROOT_CLUSTER;
        let mut depth = 0;

        loop {
            mounted.load(cluster)?;
            let entry = mounted
                .scratch
                .as_directory()
                .find(token)
                .map(|record| Entry::from_record(&record))
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;

            let Some(next) = tokens.next() else {
                debug!("Resolved {} to cluster {}", path, entry.cluster);
                return Ok(entry);
            };

            if !entry.is_folder() {
                return Err(VfsError::NotAFolder(entry.name));
            }

            depth += 1;
            if depth > max_depth {
                return Err(VfsError::FolderTooDeep { depth: max_depth });
            }
            cluster = entry.cluster;
            token = next;
        }
    }

    /// Whether `path` resolves to an entry
    pub fn exists(&mut self, path: &str) -> Result<bool> {
        match self.get_entry(path) {
            Ok(_) => Ok(true),
            Err(VfsError::NotFound(_)) | Err(VfsError::NotAFolder(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Copy `destination.len()` bytes of `entry` starting at `offset`.
    ///
    /// The whole span must lie inside the file; nothing is copied otherwise.
    pub fn read(&mut self, entry: &Entry, offset: u64, destination: &mut [u8]) -> Result<()> {
        let mounted = self.mounted()?;

        if entry.cluster >= mounted.cluster_count() {
            return Err(VfsError::ClusterOutOfRange {
                cluster: entry.cluster,
                cluster_count: mounted.cluster_count(),
            });
        }

        if !entry.is_file() {
            return Err(VfsError::NotAFile(entry.name.clone()));
        }

        let len = destination.len() as u64;
        let size = u64::from(entry.size);
        if offset.checked_add(len).map_or(true, |end| end > size) {
            return Err(VfsError::OutOfRange { offset, len, size });
        }

        debug!("Reading {} bytes of {} at offset {}", len, entry.name, offset);

        let mut written = 0;
        let mut position = offset;
        while written < destination.len() {
            // position < size <= u32::MAX, so the cluster offset fits
            let cluster = entry
                .cluster
                .checked_add((position / CLUSTER_SIZE as u64) as u32)
                .ok_or(VfsError::ClusterOutOfRange {
                    cluster: u32::MAX,
                    cluster_count: mounted.cluster_count(),
                })?;
            let within = (position % CLUSTER_SIZE as u64) as usize;
            let span = (destination.len() - written).min(CLUSTER_SIZE - within);

            mounted.load(cluster)?;
            destination[written..written + span]
                .copy_from_slice(&mounted.scratch.as_bytes()[within..within + span]);

            written += span;
            position += span as u64;
        }
        Ok(())
    }

    /// Read `len` bytes of `entry` at `offset` into a new buffer
    pub fn read_to_vec(&mut self, entry: &Entry, offset: u64, len: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        self.read(entry, offset, &mut buffer)?;
        Ok(buffer)
    }

    /// Read the whole of a file entry
    pub fn read_all(&mut self, entry: &Entry) -> Result<Vec<u8>> {
        self.read_to_vec(entry, 0, entry.size as usize)
    }

    /// Resolve `path` and read the whole file
    pub fn read_path(&mut self, path: &str) -> Result<Vec<u8>> {
        let entry = self.get_entry(path)?;
        self.read_all(&entry)
    }

    /// Seekable reader over one file entry
    pub fn open_entry(&mut self, entry: &Entry) -> Result<EntryReader<'_>> {
        self.mounted()?;
        if !entry.is_file() {
            return Err(VfsError::NotAFile(entry.name.clone()));
        }
        Ok(EntryReader::new(self, entry.clone()))
    }

    /// Depth-first walk from the root folder in slot order.
    ///
    /// Does nothing when unmounted.
    pub fn iterate<V: FileSystemVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<()> {
        let max_depth = self.config.max_folder_depth;
        match self.mounted.as_mut() {
            Some(mounted) => mounted.visit(ROOT_CLUSTER, visitor, 0, max_depth),
            None => Ok(()),
        }
    }

    /// The whole folder tree below the root
    pub fn tree(&mut self) -> Result<Vec<EntryNode>> {
        let mut collector = TreeCollector::new();
        self.iterate(&mut collector)?;
        Ok(collector.into_nodes())
    }

    /// Every file with its `/`-joined path, in traversal order
    pub fn list_files(&mut self) -> Result<Vec<(String, Entry)>> {
        let mut collector = PathCollector::new();
        self.iterate(&mut collector)?;
        Ok(collector.into_files())
    }
}

impl std::fmt::Debug for VirtualFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualFileSystem")
            .field("config", &self.config)
            .field("mounted", &self.is_mounted())
            .field("cluster_count", &self.cluster_count())
            .finish()
    }
}
