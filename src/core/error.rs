use thiserror::Error;

#[derive(Error, Debug)]
pub enum VfsError {
    #[error("Filesystem is not mounted")]
    NotMounted,

    #[error("Container size {size} is not a multiple of 512 bytes")]
    SizeMisaligned { size: u64 },

    #[error("Container size {size} exceeds the addressable cluster range")]
    ImageTooLarge { size: u64 },

    #[error("Checksum mismatch in cluster {cluster}: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        cluster: u32,
        stored: u32,
        computed: u32,
    },

    #[error("Cluster {cluster} is out of range (cluster count: {cluster_count})")]
    ClusterOutOfRange { cluster: u32, cluster_count: u32 },

    #[error("Read of {len} bytes at offset {offset} exceeds entry size {size}")]
    OutOfRange { offset: u64, len: u64, size: u64 },

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Entry is not a file: {0}")]
    NotAFile(String),

    #[error("Entry is not a folder: {0}")]
    NotAFolder(String),

    #[error("Invalid entry name: {0}")]
    InvalidName(String),

    #[error("Folder is full: {0}")]
    FolderFull(String),

    #[error("Entry {name} is too large ({size} bytes)")]
    EntryTooLarge { name: String, size: u64 },

    #[error("Folder nesting exceeds the configured depth of {depth}")]
    FolderTooDeep { depth: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VfsError {
    /// True for errors that mean the container bytes themselves are bad
    /// (as opposed to caller mistakes such as a wrong path or offset).
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            VfsError::ChecksumMismatch { .. }
                | VfsError::SizeMisaligned { .. }
                | VfsError::ImageTooLarge { .. }
                | VfsError::FolderTooDeep { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, VfsError>;

impl From<VfsError> for std::io::Error {
    fn from(err: VfsError) -> Self {
        use std::io::ErrorKind;

        let kind = match &err {
            VfsError::NotFound(_) => ErrorKind::NotFound,
            VfsError::OutOfRange { .. } | VfsError::ClusterOutOfRange { .. } => {
                ErrorKind::UnexpectedEof
            }
            VfsError::ChecksumMismatch { .. } | VfsError::SizeMisaligned { .. } => {
                ErrorKind::InvalidData
            }
            _ => ErrorKind::Other,
        };

        match err {
            VfsError::Io(inner) => inner,
            other => std::io::Error::new(kind, other),
        }
    }
}
