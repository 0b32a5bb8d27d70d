//! Decrypted table-cluster cache
//!
//! Only table clusters are cached across calls. Data clusters are decrypted
//! straight into the caller's buffer every time, keyed by the slot of their
//! (cached) owning table. With capacity 1 this is a single table slot; larger
//! capacities keep the most recently used tables in an LRU.
//!
//! A table only enters the cache after it has been read and decrypted in
//! full, so a failed read can never leave ciphertext or a half-decrypted
//! table behind.

use crate::core::cipher;
use crate::core::cluster::{Cluster, ClusterKind};
use crate::core::io::ContainerFile;
use crate::error::{Result, VfsError};
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

/// Table cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Table lookups served from the cache
    pub hits: u64,
    /// Table lookups that had to read and decrypt
    pub misses: u64,
    /// Tables currently held
    pub cached_tables: usize,
    /// Maximum tables held
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

pub struct ClusterCache {
    tables: LruCache<u32, Box<Cluster>>,
    hits: u64,
    misses: u64,
}

impl ClusterCache {
    /// Create a cache holding up to `capacity` decrypted tables
    pub fn new(capacity: NonZeroUsize) -> Self {
        ClusterCache {
            tables: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Single-slot cache
    pub fn single() -> Self {
        Self::new(NonZeroUsize::MIN)
    }

    /// Decrypt cluster `index` into `out`.
    ///
    /// Returns the checksum the container records for that cluster: slot 0
    /// of a table cluster, or the owning table's slot for a data cluster
    /// (which is also the key it was decrypted with).
    pub fn get_cluster(
        &mut self,
        source: &mut ContainerFile,
        index: u32,
        out: &mut Cluster,
    ) -> Result<u32> {
        if index >= source.cluster_count() {
            return Err(VfsError::ClusterOutOfRange {
                cluster: index,
                cluster_count: source.cluster_count(),
            });
        }

        match ClusterKind::of(index) {
            ClusterKind::Table => {
                let table = self.table(source, index)?;
                out.copy_from(table);
                Ok(table.as_table().self_checksum())
            }
            ClusterKind::Data => {
                let key = self.data_key(source, index)?;
                source.read_cluster(index, out)?;
                out.decrypt_data(key);
                Ok(key)
            }
        }
    }

    /// Key (recorded checksum) of a data cluster, from its owning table
    pub fn data_key(&mut self, source: &mut ContainerFile, index: u32) -> Result<u32> {
        let base = cipher::table_base(index);
        let table = self.table(source, base)?;
        Ok(table.as_table().slot((index - base) as usize).checksum)
    }

    /// Decrypted table cluster at `table_index`, loading it on a miss
    fn table(&mut self, source: &mut ContainerFile, table_index: u32) -> Result<&Cluster> {
        if self.tables.contains(&table_index) {
            self.hits += 1;
        } else {
            self.misses += 1;
            debug!("Table cache miss for cluster {}", table_index);
        }

        self.tables
            .try_get_or_insert(table_index, || -> Result<Box<Cluster>> {
                let mut table = Box::<Cluster>::default();
                source.read_cluster(table_index, &mut table)?;
                table.decrypt_table(table_index);
                Ok(table)
            })
            .map(|table| &**table)
    }

    /// Whether the table at `table_index` is currently cached
    pub fn contains(&self, table_index: u32) -> bool {
        self.tables.contains(&table_index)
    }

    /// Drop every cached table
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            cached_tables: self.tables.len(),
            capacity: self.tables.cap().get(),
        }
    }
}
