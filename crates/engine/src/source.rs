//! Access to the bytes of the input file.
//!
//! The aligner only needs short windows ("peeks") at arbitrary offsets, so it
//! is written against the [`Peek`] trait. Slices implement it directly, which
//! keeps alignment testable without touching the filesystem.

use crate::error::{EngineError, Result};
use crate::options::IoMode;
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Read-only window access at an absolute offset.
pub trait Peek {
    /// Returns up to `len` bytes starting at `offset`. The result is shorter
    /// than `len` only when end-of-file is reached.
    ///
    /// # Errors
    ///
    /// Implementations backed by a file return [`EngineError::Seek`] or
    /// [`EngineError::Read`].
    fn peek(&self, offset: u64, len: usize) -> Result<Cow<'_, [u8]>>;
}

impl Peek for [u8] {
    #[allow(clippy::cast_possible_truncation)]
    fn peek(&self, offset: u64, len: usize) -> Result<Cow<'_, [u8]>> {
        let start = (offset as usize).min(self.len());
        let end = start.saturating_add(len).min(self.len());
        Ok(Cow::Borrowed(&self[start..end]))
    }
}

enum Backing {
    Mapped(Mmap),
    /// Zero-length files cannot be mapped on every platform.
    Empty,
    Handle(File),
}

/// The opened input file, shared read-only by the driver and all workers.
pub struct InputFile {
    path: PathBuf,
    size: u64,
    backing: Backing,
}

impl InputFile {
    /// Open and stat `path`, mapping it when `mode` is [`IoMode::Mmap`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FileOpen`], [`EngineError::FileStat`] or
    /// [`EngineError::Map`].
    pub fn open(path: &Path, mode: IoMode) -> Result<Self> {
        let file = File::open(path).map_err(|e| EngineError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size = file
            .metadata()
            .map_err(|e| EngineError::FileStat {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        let backing = match mode {
            _ if size == 0 => Backing::Empty,
            IoMode::Mmap => {
                // SAFETY: the map is read-only and lives as long as `InputFile`.
                // Truncating the file underneath a running job is unsupported.
                let map = unsafe { Mmap::map(&file) }.map_err(|e| EngineError::Map {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                Backing::Mapped(map)
            }
            IoMode::Buffered => Backing::Handle(file),
        };

        Ok(Self {
            path: path.to_path_buf(),
            size,
            backing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn size(&self) -> u64 {
        self.size
    }

    /// The whole file as a slice, unless it is being read through a handle.
    pub fn mapped(&self) -> Option<&[u8]> {
        match &self.backing {
            Backing::Mapped(map) => Some(&map[..]),
            Backing::Empty => Some(&[][..]),
            Backing::Handle(_) => None,
        }
    }
}

impl Peek for InputFile {
    fn peek(&self, offset: u64, len: usize) -> Result<Cow<'_, [u8]>> {
        match &self.backing {
            Backing::Mapped(map) => map[..].peek(offset, len),
            Backing::Empty => Ok(Cow::Borrowed(&[][..])),
            Backing::Handle(file) => {
                let mut handle = file;
                handle
                    .seek(SeekFrom::Start(offset))
                    .map_err(|e| EngineError::Seek { offset, source: e })?;
                let mut buf = Vec::with_capacity(len);
                handle
                    .take(len as u64)
                    .read_to_end(&mut buf)
                    .map_err(|e| EngineError::Read { offset, source: e })?;
                Ok(Cow::Owned(buf))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn slice_peek_is_clamped_to_end() {
        let data: &[u8] = b"abcdef";
        assert_eq!(&*data.peek(4, 10).unwrap(), b"ef");
        assert!(data.peek(10, 3).unwrap().is_empty());
    }

    #[test]
    fn both_modes_peek_the_same_bytes() {
        let file = fixture(b"Oslo;1.0\nRome;22.5\n");
        for mode in [IoMode::Mmap, IoMode::Buffered] {
            let input = InputFile::open(file.path(), mode).unwrap();
            assert_eq!(input.size(), 19);
            assert_eq!(&*input.peek(5, 8).unwrap(), b"1.0\nRome");
            assert_eq!(&*input.peek(14, 100).unwrap(), b"22.5\n");
        }
    }

    #[test]
    fn empty_file_is_not_mapped() {
        let file = fixture(b"");
        let input = InputFile::open(file.path(), IoMode::Mmap).unwrap();
        assert_eq!(input.size(), 0);
        assert_eq!(input.mapped(), Some(&[][..]));
        assert!(input.peek(0, 16).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_a_setup_error() {
        let err = InputFile::open(Path::new("/definitely/not/here.txt"), IoMode::Mmap)
            .err()
            .unwrap();
        assert!(matches!(err, EngineError::FileOpen { .. }));
    }
}
