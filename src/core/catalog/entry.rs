//! Directory entry model

use crate::core::cluster::{DirectoryRecord, NAME_CAPACITY, RECORD_SIZE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 100ns FILETIME ticks per second
const FILETIME_TICKS_PER_SECOND: u64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01
const FILETIME_UNIX_OFFSET: i64 = 11_644_473_600;

/// Entry type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Regular file
    File,
    /// Folder (its cluster is another directory listing)
    Folder,
    /// Tag this reader does not know; skipped by traversal
    Unknown(u8),
}

impl EntryType {
    pub const FOLDER_TAG: u8 = 0x10;
    pub const FILE_TAG: u8 = 0x80;

    pub fn from_u8(value: u8) -> Self {
        match value {
            Self::FOLDER_TAG => EntryType::Folder,
            Self::FILE_TAG => EntryType::File,
            other => EntryType::Unknown(other),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            EntryType::Folder => Self::FOLDER_TAG,
            EntryType::File => Self::FILE_TAG,
            EntryType::Unknown(tag) => *tag,
        }
    }
}

/// One directory record, copied out of its cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Occupancy flags; never zero for an entry read from a listing
    pub flags: u32,

    /// Entry name, lossily decoded from the record's bytes
    ///
    /// Path lookups compare raw bytes, so a name that was not valid UTF-8
    /// (shown here with U+FFFD) cannot be resolved by path. Such entries are
    /// still reported by traversal and can be read through the `Entry`.
    pub name: String,

    /// File or folder
    pub entry_type: EntryType,

    /// First cluster of the file payload, or the folder's listing cluster
    pub cluster: u32,

    /// Byte size (files only)
    pub size: u32,

    /// Raw Windows FILETIME (100ns ticks since 1601-01-01)
    pub timestamp: u64,
}

impl Entry {
    /// Copy a record out of its listing; invalid UTF-8 in the name is replaced
    pub fn from_record(record: &DirectoryRecord<'_>) -> Self {
        Entry {
            flags: record.flags(),
            name: String::from_utf8_lossy(record.name_bytes()).into_owned(),
            entry_type: EntryType::from_u8(record.type_tag()),
            cluster: record.cluster(),
            size: record.size(),
            timestamp: record.timestamp(),
        }
    }

    /// Encode as a 64-byte directory record.
    ///
    /// Names longer than the field are truncated so the record always stays
    /// NUL-terminated.
    pub fn to_record(&self) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        record[0..4].copy_from_slice(&self.flags.to_le_bytes());

        let name = self.name.as_bytes();
        let len = name.len().min(NAME_CAPACITY - 1);
        let start = DirectoryRecord::NAME_OFFSET;
        record[start..start + len].copy_from_slice(&name[..len]);

        record[DirectoryRecord::TYPE_OFFSET] = self.entry_type.as_u8();
        let cluster = DirectoryRecord::CLUSTER_OFFSET;
        record[cluster..cluster + 4].copy_from_slice(&self.cluster.to_le_bytes());
        let size = DirectoryRecord::SIZE_OFFSET;
        record[size..size + 4].copy_from_slice(&self.size.to_le_bytes());
        let timestamp = DirectoryRecord::TIMESTAMP_OFFSET;
        record[timestamp..timestamp + 8].copy_from_slice(&self.timestamp.to_le_bytes());
        record
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_folder(&self) -> bool {
        self.entry_type == EntryType::Folder
    }

    /// Timestamp as Unix epoch seconds
    pub fn unix_timestamp(&self) -> i64 {
        (self.timestamp / FILETIME_TICKS_PER_SECOND) as i64 - FILETIME_UNIX_OFFSET
    }

    /// Timestamp as a UTC date, if it is representable
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix_timestamp(), 0)
    }

    /// Convert a Unix timestamp (seconds) to a raw FILETIME value.
    ///
    /// Times before 1601 clamp to zero.
    pub fn filetime_from_unix(seconds: i64) -> u64 {
        let since_1601 = seconds.saturating_add(FILETIME_UNIX_OFFSET).max(0) as u64;
        since_1601.saturating_mul(FILETIME_TICKS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cluster::Cluster;

    fn sample() -> Entry {
        Entry {
            flags: 1,
            name: "thumbnail".to_string(),
            entry_type: EntryType::File,
            cluster: 9,
            size: 12_345,
            // 2021-01-01T00:00:00Z
            timestamp: 132_539_328_000_000_000,
        }
    }

    #[test]
    fn test_entry_type_tags() {
        assert_eq!(EntryType::from_u8(0x10), EntryType::Folder);
        assert_eq!(EntryType::from_u8(0x80), EntryType::File);
        assert_eq!(EntryType::from_u8(0x42), EntryType::Unknown(0x42));
        assert_eq!(EntryType::Unknown(0x42).as_u8(), 0x42);
    }

    #[test]
    fn test_record_layout() {
        let entry = sample();
        let mut cluster = Cluster::zeroed();
        cluster.set_record(3, &entry.to_record());

        let record = cluster.as_directory().record(3).unwrap();
        assert_eq!(record.flags(), 1);
        assert_eq!(record.name_bytes(), b"thumbnail");
        assert_eq!(record.type_tag(), 0x80);
        assert_eq!(record.cluster(), 9);
        assert_eq!(record.size(), 12_345);
        assert_eq!(Entry::from_record(&record), entry);

        // Field offsets within the raw record
        let raw = entry.to_record();
        assert_eq!(raw[38], 0x80);
        assert_eq!(&raw[40..44], &9u32.to_le_bytes());
        assert_eq!(&raw[44..48], &12_345u32.to_le_bytes());
    }

    #[test]
    fn test_non_utf8_name_decodes_lossily() {
        let mut raw = sample().to_record();
        raw[4..4 + NAME_CAPACITY].fill(0);
        raw[4] = b'f';
        raw[5] = 0xFF;

        let mut cluster = Cluster::zeroed();
        cluster.set_record(0, &raw);
        let listing = cluster.as_directory();
        let entry = Entry::from_record(&listing.record(0).unwrap());

        assert_eq!(entry.name, "f\u{FFFD}");
        assert_eq!(entry.cluster, 9);
        // The replacement character never matches the stored 0xFF byte
        assert!(listing.find(&entry.name).is_none());
        assert!(listing.find("f").is_none());
    }

    #[test]
    fn test_unix_timestamp_conversion() {
        let entry = sample();
        assert_eq!(entry.unix_timestamp(), 1_609_459_200);
        let date = entry.modified().unwrap();
        assert_eq!(date.to_rfc3339(), "2021-01-01T00:00:00+00:00");
        assert_eq!(Entry::filetime_from_unix(1_609_459_200), entry.timestamp);
    }

    #[test]
    fn test_unix_epoch_and_before() {
        let mut entry = sample();
        entry.timestamp = Entry::filetime_from_unix(0);
        assert_eq!(entry.unix_timestamp(), 0);

        entry.timestamp = 0;
        assert_eq!(entry.unix_timestamp(), -11_644_473_600);
        assert_eq!(Entry::filetime_from_unix(-20_000_000_000), 0);
    }

    #[test]
    fn test_long_name_stays_terminated() {
        let mut entry = sample();
        entry.name = "n".repeat(40);
        let raw = entry.to_record();
        assert_eq!(raw[4 + NAME_CAPACITY - 1], 0);
    }
}
