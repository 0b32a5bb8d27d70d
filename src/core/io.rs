//! Backing byte stream for a mounted container

use crate::core::cluster::{Cluster, CLUSTER_SIZE};
use crate::error::{Result, VfsError};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Container lengths must be a multiple of this; a trailing partial
/// cluster is ignored.
pub const SIZE_ALIGNMENT: u64 = 512;

/// Random-access byte source a container can be mounted from
pub trait ContainerSource: Read + Seek + Send {}

impl<T: Read + Seek + Send> ContainerSource for T {}

/// Read-only handle on a container's bytes
pub struct ContainerFile {
    source: Box<dyn ContainerSource>,
    path: Option<PathBuf>,
    len: u64,
    cluster_count: u32,
}

impl ContainerFile {
    /// Open a container file on disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Every cluster read seeks first, so reads go straight to the file
        let file = File::open(&path)?;
        let mut container = Self::from_source(file)?;
        container.path = Some(path.as_ref().to_path_buf());
        Ok(container)
    }

    /// Wrap any seekable reader (e.g. an in-memory `Cursor`)
    ///
    /// Fails with `SizeMisaligned` unless the length is a multiple of
    /// [`SIZE_ALIGNMENT`]. Bytes past the last whole cluster are never read.
    pub fn from_source<R: ContainerSource + 'static>(mut source: R) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;

        if len % SIZE_ALIGNMENT != 0 {
            return Err(VfsError::SizeMisaligned { size: len });
        }

        let cluster_count = u32::try_from(len / CLUSTER_SIZE as u64)
            .map_err(|_| VfsError::ImageTooLarge { size: len })?;

        Ok(ContainerFile {
            source: Box::new(source),
            path: None,
            len,
            cluster_count,
        })
    }

    /// Read the raw (still encrypted) bytes of one cluster
    pub fn read_cluster(&mut self, cluster_index: u32, out: &mut Cluster) -> Result<()> {
        if cluster_index >= self.cluster_count {
            return Err(VfsError::ClusterOutOfRange {
                cluster: cluster_index,
                cluster_count: self.cluster_count,
            });
        }

        let offset = u64::from(cluster_index) * CLUSTER_SIZE as u64;
        self.source.seek(SeekFrom::Start(offset))?;
        self.source.read_exact(out.as_bytes_mut())?;
        Ok(())
    }

    /// Path the container was opened from, if it came from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Total byte length
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cluster_count(&self) -> u32 {
        self.cluster_count
    }
}

impl std::fmt::Debug for ContainerFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerFile")
            .field("path", &self.path)
            .field("len", &self.len)
            .field("cluster_count", &self.cluster_count)
            .finish()
    }
}
