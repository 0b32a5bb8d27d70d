//! `std::io` reader over a single file entry

use super::vfs::VirtualFileSystem;
use crate::core::catalog::Entry;
use std::io::{self, Read, Seek, SeekFrom};

/// Seekable reader over one file, borrowing the engine for its lifetime
pub struct EntryReader<'a> {
    fs: &'a mut VirtualFileSystem,
    entry: Entry,
    position: u64,
}

impl<'a> EntryReader<'a> {
    pub(crate) fn new(fs: &'a mut VirtualFileSystem, entry: Entry) -> Self {
        EntryReader {
            fs,
            entry,
            position: 0,
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Current position
    pub fn tell(&self) -> u64 {
        self.position
    }

    pub fn len(&self) -> u64 {
        u64::from(self.entry.size)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.size == 0
    }
}

impl Read for EntryReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.len().saturating_sub(self.position);
        let count = (buf.len() as u64).min(remaining) as usize;
        if count == 0 {
            return Ok(0);
        }

        self.fs.read(&self.entry, self.position, &mut buf[..count])?;
        self.position += count as u64;
        Ok(count)
    }
}

impl Seek for EntryReader<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => self.len().checked_add_signed(delta),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
        };

        match target {
            Some(position) => {
                self.position = position;
                Ok(position)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek to a negative or overflowing position",
            )),
        }
    }
}
