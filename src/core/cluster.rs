//! Fixed-size cluster buffer and its two typed views
//!
//! A cluster is 4096 bytes (1024 little-endian words). The same bytes can be
//! read as a table (512 checksum slots) or as a directory (64 entry records);
//! which view applies is decided by the caller, never stored in the buffer.

use crate::core::cipher;

/// Cluster size in bytes
pub const CLUSTER_SIZE: usize = 4096;

/// Number of 32-bit words in a cluster
pub const CLUSTER_WORDS: usize = CLUSTER_SIZE / 4;

/// Size of one table slot (checksum + flags)
pub const TABLE_SLOT_SIZE: usize = 8;

/// Table slots per cluster
pub const TABLE_SLOTS: usize = CLUSTER_SIZE / TABLE_SLOT_SIZE;

/// Size of one directory record
pub const RECORD_SIZE: usize = 64;

/// Directory records per cluster
pub const DIRECTORY_SLOTS: usize = CLUSTER_SIZE / RECORD_SIZE;

/// Capacity of the name field, including the terminating NUL
pub const NAME_CAPACITY: usize = 32;

/// Role of a cluster, derived purely from its index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterKind {
    /// Index divisible by 512: holds checksum slots for its group
    Table,
    /// Any other index: payload keyed by its owning table's slot
    Data,
}

impl ClusterKind {
    pub fn of(cluster_index: u32) -> Self {
        if cipher::is_table_index(cluster_index) {
            ClusterKind::Table
        } else {
            ClusterKind::Data
        }
    }
}

#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(raw)
}

/// One cluster worth of bytes
#[derive(Clone, PartialEq, Eq)]
pub struct Cluster {
    bytes: [u8; CLUSTER_SIZE],
}

impl Cluster {
    pub fn zeroed() -> Self {
        Cluster {
            bytes: [0u8; CLUSTER_SIZE],
        }
    }

    /// Build a cluster from a payload, zero-padding the tail.
    ///
    /// Payloads longer than a cluster are truncated.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut cluster = Cluster::zeroed();
        let len = payload.len().min(CLUSTER_SIZE);
        cluster.bytes[..len].copy_from_slice(&payload[..len]);
        cluster
    }

    pub fn as_bytes(&self) -> &[u8; CLUSTER_SIZE] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; CLUSTER_SIZE] {
        &mut self.bytes
    }

    pub fn copy_from(&mut self, other: &Cluster) {
        self.bytes.copy_from_slice(&other.bytes);
    }

    pub fn word(&self, index: usize) -> u32 {
        read_u32(&self.bytes, index * 4)
    }

    pub fn words(&self) -> [u32; CLUSTER_WORDS] {
        let mut words = [0u32; CLUSTER_WORDS];
        for (word, chunk) in words.iter_mut().zip(self.bytes.chunks_exact(4)) {
            *word = read_u32(chunk, 0);
        }
        words
    }

    fn store_words(&mut self, words: &[u32; CLUSTER_WORDS]) {
        for (chunk, word) in self.bytes.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }

    fn transform(&mut self, f: impl FnOnce(&mut [u32])) {
        let mut words = self.words();
        f(&mut words);
        self.store_words(&words);
    }

    /// Decrypt in place as a table cluster. Must run exactly once per read.
    pub fn decrypt_table(&mut self, cluster_index: u32) {
        self.transform(|words| cipher::decrypt_table(words, cluster_index));
    }

    /// Decrypt in place as a data cluster. Must run exactly once per read.
    pub fn decrypt_data(&mut self, key: u32) {
        self.transform(|words| cipher::decrypt_data(words, key));
    }

    pub fn encrypt_table(&mut self, cluster_index: u32) {
        self.transform(|words| cipher::encrypt_table(words, cluster_index));
    }

    pub fn encrypt_data(&mut self, key: u32) {
        self.transform(|words| cipher::encrypt_data(words, key));
    }

    pub fn checksum(&self, is_table: bool) -> u32 {
        cipher::checksum(&self.words(), is_table)
    }

    pub fn as_table(&self) -> TableView<'_> {
        TableView { bytes: &self.bytes }
    }

    pub fn as_directory(&self) -> DirectoryView<'_> {
        DirectoryView { bytes: &self.bytes }
    }

    /// Overwrite one table slot. Slots past the end are ignored.
    pub fn set_table_slot(&mut self, slot: usize, entry: TableSlot) {
        if slot >= TABLE_SLOTS {
            return;
        }
        let offset = slot * TABLE_SLOT_SIZE;
        self.bytes[offset..offset + 4].copy_from_slice(&entry.checksum.to_le_bytes());
        self.bytes[offset + 4..offset + 8].copy_from_slice(&entry.flags.to_le_bytes());
    }

    /// Overwrite one directory record. Slots past the end are ignored.
    pub fn set_record(&mut self, slot: usize, record: &[u8; RECORD_SIZE]) {
        if slot >= DIRECTORY_SLOTS {
            return;
        }
        let offset = slot * RECORD_SIZE;
        self.bytes[offset..offset + RECORD_SIZE].copy_from_slice(record);
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Cluster::zeroed()
    }
}

impl std::fmt::Debug for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cluster")
            .field("head", &&self.bytes[..16])
            .finish_non_exhaustive()
    }
}

/// Per-cluster checksum slot inside a table cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSlot {
    /// Checksum of the decrypted cluster, also its decryption key
    pub checksum: u32,
    pub flags: u32,
}

/// Table view of a cluster
#[derive(Clone, Copy)]
pub struct TableView<'a> {
    bytes: &'a [u8; CLUSTER_SIZE],
}

impl<'a> TableView<'a> {
    /// Slot `index` of the table; `index` is taken modulo the slot count.
    pub fn slot(&self, index: usize) -> TableSlot {
        let offset = (index % TABLE_SLOTS) * TABLE_SLOT_SIZE;
        TableSlot {
            checksum: read_u32(self.bytes, offset),
            flags: read_u32(self.bytes, offset + 4),
        }
    }

    /// The table's own checksum, stored in slot 0
    pub fn self_checksum(&self) -> u32 {
        self.slot(0).checksum
    }
}

/// Directory view of a cluster
#[derive(Clone, Copy)]
pub struct DirectoryView<'a> {
    bytes: &'a [u8; CLUSTER_SIZE],
}

impl<'a> DirectoryView<'a> {
    pub fn record(&self, slot: usize) -> Option<DirectoryRecord<'a>> {
        if slot >= DIRECTORY_SLOTS {
            return None;
        }
        let offset = slot * RECORD_SIZE;
        Some(DirectoryRecord {
            bytes: &self.bytes[offset..offset + RECORD_SIZE],
        })
    }

    /// Occupied records in slot order, stopping at the first empty slot.
    pub fn records(&self) -> impl Iterator<Item = DirectoryRecord<'a>> + 'a {
        let view = *self;
        (0..DIRECTORY_SLOTS)
            .filter_map(move |slot| view.record(slot))
            .take_while(|record| record.flags() != 0)
    }

    /// First occupied record whose name equals `name` byte for byte.
    pub fn find(&self, name: &str) -> Option<DirectoryRecord<'a>> {
        self.records()
            .find(|record| record.name_bytes() == name.as_bytes())
    }
}

/// Borrowed 64-byte directory record
#[derive(Clone, Copy)]
pub struct DirectoryRecord<'a> {
    bytes: &'a [u8],
}

impl<'a> DirectoryRecord<'a> {
    pub(crate) const NAME_OFFSET: usize = 4;
    pub(crate) const TYPE_OFFSET: usize = 38;
    pub(crate) const CLUSTER_OFFSET: usize = 40;
    pub(crate) const SIZE_OFFSET: usize = 44;
    pub(crate) const TIMESTAMP_OFFSET: usize = 48;

    pub fn flags(&self) -> u32 {
        read_u32(self.bytes, 0)
    }

    /// Name bytes up to (not including) the first NUL
    pub fn name_bytes(&self) -> &'a [u8] {
        let field = &self.bytes[Self::NAME_OFFSET..Self::NAME_OFFSET + NAME_CAPACITY];
        let end = field.iter().position(|&b| b == 0).unwrap_or(NAME_CAPACITY);
        &field[..end]
    }

    pub fn type_tag(&self) -> u8 {
        self.bytes[Self::TYPE_OFFSET]
    }

    pub fn cluster(&self) -> u32 {
        read_u32(self.bytes, Self::CLUSTER_OFFSET)
    }

    pub fn size(&self) -> u32 {
        read_u32(self.bytes, Self::SIZE_OFFSET)
    }

    pub fn timestamp(&self) -> u64 {
        read_u64(self.bytes, Self::TIMESTAMP_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(flags: u32, name: &[u8]) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        record[0..4].copy_from_slice(&flags.to_le_bytes());
        record[4..4 + name.len()].copy_from_slice(name);
        record
    }

    #[test]
    fn test_debug_shows_head_only() {
        let cluster = Cluster::from_payload(&[0xAB; 20]);
        let text = format!("{:?}", cluster);
        assert!(text.starts_with("Cluster { head: [171, 171"));
        assert!(text.ends_with(", .. }"));
        assert_eq!(text.matches("171").count(), 16);
    }

    #[test]
    fn test_cluster_kind() {
        assert_eq!(ClusterKind::of(0), ClusterKind::Table);
        assert_eq!(ClusterKind::of(2), ClusterKind::Data);
        assert_eq!(ClusterKind::of(1024), ClusterKind::Table);
    }

    #[test]
    fn test_words_are_little_endian() {
        let cluster = Cluster::from_payload(&[0x78, 0x56, 0x34, 0x12, 0xFF]);
        assert_eq!(cluster.word(0), 0x1234_5678);
        assert_eq!(cluster.word(1), 0xFF);
        assert_eq!(cluster.words()[0], 0x1234_5678);
    }

    #[test]
    fn test_decrypt_data_matches_encrypt() {
        let original = Cluster::from_payload(b"layer payload bytes");
        let mut cluster = original.clone();
        cluster.encrypt_data(0xABCD_EF01);
        assert_ne!(cluster, original);
        cluster.decrypt_data(0xABCD_EF01);
        assert_eq!(cluster, original);
    }

    #[test]
    fn test_table_view_slots() {
        let mut cluster = Cluster::zeroed();
        cluster.set_table_slot(0, TableSlot { checksum: 0x11, flags: 0 });
        cluster.set_table_slot(511, TableSlot { checksum: 0x33, flags: 7 });
        let table = cluster.as_table();
        assert_eq!(table.self_checksum(), 0x11);
        assert_eq!(table.slot(511), TableSlot { checksum: 0x33, flags: 7 });
        assert_eq!(cluster.word(1022), 0x33);
        assert_eq!(cluster.word(1023), 7);
    }

    #[test]
    fn test_directory_scan_stops_at_empty_slot() {
        let mut cluster = Cluster::zeroed();
        cluster.set_record(0, &record_with(1, b"canvas"));
        cluster.set_record(1, &record_with(1, b"layers"));
        // Slot 2 empty; slot 3 must never be seen.
        cluster.set_record(3, &record_with(1, b"hidden"));

        let dir = cluster.as_directory();
        let names: Vec<&[u8]> = dir.records().map(|r| r.name_bytes()).collect();
        assert_eq!(names, vec![&b"canvas"[..], &b"layers"[..]]);
        assert!(dir.find("hidden").is_none());
        assert!(dir.find("layers").is_some());
        assert!(dir.find("Layers").is_none());
    }

    #[test]
    fn test_full_directory_is_bounded() {
        let mut cluster = Cluster::zeroed();
        for slot in 0..DIRECTORY_SLOTS {
            cluster.set_record(slot, &record_with(1, b"x"));
        }
        assert_eq!(cluster.as_directory().records().count(), DIRECTORY_SLOTS);
        assert!(cluster.as_directory().record(DIRECTORY_SLOTS).is_none());
    }

    #[test]
    fn test_unterminated_name_uses_full_field() {
        let mut cluster = Cluster::zeroed();
        cluster.set_record(0, &record_with(1, &[b'a'; NAME_CAPACITY]));
        let record = cluster.as_directory().record(0).unwrap();
        assert_eq!(record.name_bytes().len(), NAME_CAPACITY);
    }
}
