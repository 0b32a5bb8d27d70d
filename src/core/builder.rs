//! Synthetic container images
//!
//! `ImageBuilder` lays out a folder/file tree in the container format and
//! encrypts it with the inverse cipher transforms, producing bytes that the
//! reader mounts and verifies like a real document. It exists for tests,
//! benchmarks and fuzz seeds; it never edits an existing container, and it
//! is only compiled with the `test-util` feature.
//!
//! Layout: cluster 0 is the first table, cluster 1 a zeroed header, cluster
//! 2 the root listing. Every folder gets one listing cluster and every file a
//! contiguous run of clusters that never straddles a table cluster.

use crate::core::catalog::{Entry, EntryType};
use crate::core::cipher::{self, TABLE_SPAN};
use crate::core::cluster::{Cluster, TableSlot, CLUSTER_SIZE, DIRECTORY_SLOTS};
use crate::core::validation::{path_tokens, EntryName};
use crate::core::vfs::ROOT_CLUSTER;
use crate::error::{Result, VfsError};
use std::path::Path;

/// Flags written into every occupied record and table slot
const OCCUPIED: u32 = 1;

/// Longest file that fits between two table clusters
pub const MAX_FILE_CLUSTERS: u32 = TABLE_SPAN - 1;

#[derive(Debug, Clone)]
enum NodeKind {
    Folder(Vec<usize>),
    File(Vec<u8>),
    Tagged(u8),
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    kind: NodeKind,
    timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct ImageBuilder {
    nodes: Vec<Node>,
    timestamp: u64,
}

impl Default for ImageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBuilder {
    pub fn new() -> Self {
        ImageBuilder {
            nodes: vec![Node {
                name: String::new(),
                kind: NodeKind::Folder(Vec::new()),
                timestamp: 0,
            }],
            timestamp: 0,
        }
    }

    /// FILETIME stamped on entries added after this call
    pub fn with_timestamp(mut self, filetime: u64) -> Self {
        self.timestamp = filetime;
        self
    }

    pub fn set_timestamp(&mut self, filetime: u64) {
        self.timestamp = filetime;
    }

    pub fn add_folder(&mut self, path: &str) -> Result<()> {
        self.insert(path, NodeKind::Folder(Vec::new()))
    }

    pub fn add_file(&mut self, path: &str, data: &[u8]) -> Result<()> {
        let clusters = data.len().div_ceil(CLUSTER_SIZE);
        if clusters > MAX_FILE_CLUSTERS as usize {
            return Err(VfsError::EntryTooLarge {
                name: path.to_string(),
                size: data.len() as u64,
            });
        }
        self.insert(path, NodeKind::File(data.to_vec()))
    }

    /// Add a record with an arbitrary type tag and no payload
    pub fn add_tagged(&mut self, path: &str, tag: u8) -> Result<()> {
        self.insert(path, NodeKind::Tagged(tag))
    }

    fn insert(&mut self, path: &str, kind: NodeKind) -> Result<()> {
        let tokens: Vec<&str> = path_tokens(path).collect();
        let (name, parents) = tokens
            .split_last()
            .ok_or_else(|| VfsError::InvalidName(format!("empty path '{}'", path)))?;
        let name = EntryName::new(*name)?;

        let mut parent = 0;
        for token in parents {
            parent = self
                .child(parent, token)
                .ok_or_else(|| VfsError::NotFound(path.to_string()))?;
        }

        if self.child(parent, name.as_str()).is_some() {
            return Err(VfsError::InvalidName(format!("duplicate entry '{}'", path)));
        }

        let index = self.nodes.len();
        match &mut self.nodes[parent].kind {
            NodeKind::Folder(children) => {
                if children.len() >= DIRECTORY_SLOTS {
                    return Err(VfsError::FolderFull(path.to_string()));
                }
                children.push(index);
            }
            _ => return Err(VfsError::NotAFolder(path.to_string())),
        }

        self.nodes.push(Node {
            name: name.into_string(),
            kind,
            timestamp: self.timestamp,
        });
        Ok(())
    }

    fn child(&self, parent: usize, name: &str) -> Option<usize> {
        match &self.nodes[parent].kind {
            NodeKind::Folder(children) => children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].name == name),
            _ => None,
        }
    }

    /// Lay out, checksum and encrypt the tree
    pub fn build(&self) -> Result<Vec<u8>> {
        let (starts, cluster_count) = self.allocate();
        let mut clusters = vec![Cluster::zeroed(); cluster_count as usize];

        for (index, node) in self.nodes.iter().enumerate() {
            match &node.kind {
                NodeKind::Folder(children) => {
                    let listing = &mut clusters[starts[index] as usize];
                    for (slot, &child) in children.iter().enumerate() {
                        listing.set_record(slot, &self.record(child, starts[child]).to_record());
                    }
                }
                NodeKind::File(data) => {
                    for (offset, chunk) in data.chunks(CLUSTER_SIZE).enumerate() {
                        clusters[starts[index] as usize + offset] = Cluster::from_payload(chunk);
                    }
                }
                NodeKind::Tagged(_) => {}
            }
        }

        seal(&mut clusters);

        let mut image = Vec::with_capacity(clusters.len() * CLUSTER_SIZE);
        for cluster in &clusters {
            image.extend_from_slice(cluster.as_bytes());
        }
        Ok(image)
    }

    /// Build and write the image to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.build()?)?;
        Ok(())
    }

    fn record(&self, index: usize, cluster: u32) -> Entry {
        let node = &self.nodes[index];
        let (entry_type, size) = match &node.kind {
            NodeKind::Folder(_) => (EntryType::Folder, 0),
            NodeKind::File(data) => (EntryType::File, data.len() as u32),
            NodeKind::Tagged(tag) => (EntryType::from_u8(*tag), 0),
        };
        Entry {
            flags: OCCUPIED,
            name: node.name.clone(),
            entry_type,
            cluster,
            size,
            timestamp: node.timestamp,
        }
    }

    /// Starting cluster per node, and the total cluster count
    fn allocate(&self) -> (Vec<u32>, u32) {
        let mut starts = vec![0u32; self.nodes.len()];
        starts[0] = ROOT_CLUSTER;
        let mut next = ROOT_CLUSTER + 1;

        let mut pending = vec![0usize];
        while let Some(folder) = pending.pop() {
            let NodeKind::Folder(children) = &self.nodes[folder].kind else {
                continue;
            };
            for &child in children {
                let count = match &self.nodes[child].kind {
                    NodeKind::Folder(_) => {
                        pending.push(child);
                        1
                    }
                    NodeKind::File(data) => data.len().div_ceil(CLUSTER_SIZE).max(1) as u32,
                    NodeKind::Tagged(_) => 0,
                };
                starts[child] = if count == 0 {
                    0
                } else {
                    allocate_run(&mut next, count)
                };
            }
        }

        (starts, next)
    }
}

/// Reserve `count` contiguous data clusters starting at or after `next`
fn allocate_run(next: &mut u32, count: u32) -> u32 {
    if cipher::is_table_index(*next) {
        *next += 1;
    }
    let next_table = cipher::table_base(*next) + TABLE_SPAN;
    if *next + count > next_table {
        *next = next_table + 1;
    }
    let start = *next;
    *next += count;
    start
}

/// Fill every table's checksum slots, then encrypt all clusters in place.
fn seal(clusters: &mut [Cluster]) {
    for group in clusters.chunks_mut(TABLE_SPAN as usize) {
        let (table, data) = group.split_at_mut(1);
        let table = &mut table[0];
        for (offset, cluster) in data.iter().enumerate() {
            table.set_table_slot(
                offset + 1,
                TableSlot {
                    checksum: cluster.checksum(false),
                    flags: OCCUPIED,
                },
            );
        }
        let own = table.checksum(true);
        table.set_table_slot(0, TableSlot { checksum: own, flags: 0 });
    }

    for (index, cluster) in clusters.iter_mut().enumerate() {
        let index = index as u32;
        if cipher::is_table_index(index) {
            cluster.encrypt_table(index);
        }
    }
    for group_start in (0..clusters.len()).step_by(TABLE_SPAN as usize) {
        let end = (group_start + TABLE_SPAN as usize).min(clusters.len());
        for index in group_start + 1..end {
            let key = clusters[index].checksum(false);
            clusters[index].encrypt_data(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_layout() {
        let image = ImageBuilder::new().build().unwrap();
        assert_eq!(image.len(), 3 * CLUSTER_SIZE);
    }

    #[test]
    fn test_file_runs_skip_table_clusters() {
        let mut next = 500;
        assert_eq!(allocate_run(&mut next, 10), 500);
        assert_eq!(next, 510);
        // 510 + 10 would cross table 512
        assert_eq!(allocate_run(&mut next, 10), 513);
        assert_eq!(next, 523);

        let mut next = 1024;
        assert_eq!(allocate_run(&mut next, 1), 1025);
    }

    #[test]
    fn test_table_slots_hold_plaintext_checksums() {
        let mut builder = ImageBuilder::new();
        builder.add_file("canvas", b"pixels").unwrap();
        let image = builder.build().unwrap();

        let mut table = Cluster::from_payload(&image[..CLUSTER_SIZE]);
        table.decrypt_table(0);
        assert_eq!(table.as_table().self_checksum(), table.checksum(true));

        let key = table.as_table().slot(3).checksum;
        let mut data = Cluster::from_payload(&image[3 * CLUSTER_SIZE..4 * CLUSTER_SIZE]);
        data.decrypt_data(key);
        assert_eq!(&data.as_bytes()[..6], b"pixels");
        assert_eq!(data.checksum(false), key);
    }

    #[test]
    fn test_rejects_bad_trees() {
        let mut builder = ImageBuilder::new();
        builder.add_file("canvas", b"x").unwrap();

        assert!(matches!(builder.add_file("canvas", b"y"), Err(VfsError::InvalidName(_))));
        assert!(matches!(builder.add_file("missing/x", b"y"), Err(VfsError::NotFound(_))));
        assert!(matches!(builder.add_file("canvas/x", b"y"), Err(VfsError::NotAFolder(_))));
        assert!(matches!(builder.add_folder(""), Err(VfsError::InvalidName(_))));
        assert!(matches!(
            builder.add_file("huge", &vec![0u8; 511 * CLUSTER_SIZE + 1]),
            Err(VfsError::EntryTooLarge { .. })
        ));
    }

    #[test]
    fn test_folder_capacity() {
        let mut builder = ImageBuilder::new();
        for i in 0..DIRECTORY_SLOTS {
            builder.add_folder(&format!("f{}", i)).unwrap();
        }
        assert!(matches!(builder.add_folder("extra"), Err(VfsError::FolderFull(_))));
    }
}
