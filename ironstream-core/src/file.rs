//! File-backed channel implementations.
//!
//! Three concrete channels mirror the memory trio: [`FileSource`] for
//! input-only access, [`FileSink`] for output-only access, and
//! [`FileChannel`] for bidirectional access with independent cursors over a
//! single descriptor.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::channel::{Channel, ReadChannel, WriteChannel, resolve_seek};
use crate::error::{Error, Result};

/// Input-only channel over a file opened for reading.
#[derive(Debug)]
pub struct FileSource {
    file: Option<File>,
    path: PathBuf,
    length: u64,
    cursor: u64,
}

impl FileSource {
    /// Opens `path` for reading.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or its length queried.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let length = file.metadata()?.len();
        tracing::debug!(path = %path.display(), length, "opened file source");
        Ok(Self {
            file: Some(file),
            path,
            length,
            cursor: 0,
        })
    }

    fn file_mut(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::Closed)
    }
}

impl Channel for FileSource {
    #[inline]
    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn close(&mut self) {
        if self.file.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file source");
        }
    }
}

impl ReadChannel for FileSource {
    #[inline]
    fn eof(&self) -> bool {
        self.cursor >= self.length
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let advance = buf.len() as u64;
        self.file_mut()?.read_exact(buf)?;
        self.cursor += advance;
        Ok(())
    }

    fn read_position(&mut self) -> Result<u64> {
        let position = self.file_mut()?.stream_position()?;
        self.cursor = position;
        Ok(position)
    }

    fn seek_read(&mut self, position: SeekFrom) -> Result<u64> {
        let cursor = self.file_mut()?.seek(position)?;
        self.cursor = cursor;
        Ok(cursor)
    }
}

/// Output-only channel over a file created (or truncated) for writing.
#[derive(Debug)]
pub struct FileSink {
    file: Option<File>,
    path: PathBuf,
}

impl FileSink {
    /// Creates `path` for writing, truncating any existing content.
    ///
    /// # Errors
    /// Fails if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        tracing::debug!(path = %path.display(), "created file sink");
        Ok(Self {
            file: Some(file),
            path,
        })
    }

    fn file_mut(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::Closed)
    }
}

impl Channel for FileSink {
    #[inline]
    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn close(&mut self) {
        if self.file.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file sink");
        }
    }
}

impl WriteChannel for FileSink {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.file_mut()?.write_all(buf)?;
        Ok(())
    }

    fn write_position(&mut self) -> Result<u64> {
        Ok(self.file_mut()?.stream_position()?)
    }

    fn seek_write(&mut self, position: u64) -> Result<u64> {
        Ok(self.file_mut()?.seek(SeekFrom::Start(position))?)
    }
}

/// Bidirectional channel over a single file descriptor.
///
/// The descriptor carries one operating-system cursor; independent read and
/// write cursors are maintained here and the descriptor is repositioned
/// before every transfer.
#[derive(Debug)]
pub struct FileChannel {
    file: Option<File>,
    path: PathBuf,
    length: u64,
    read_cursor: u64,
    write_cursor: u64,
}

impl FileChannel {
    /// Opens `path` for reading and writing, creating it if absent.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or its length queried.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)?;
        let length = file.metadata()?.len();
        tracing::debug!(path = %path.display(), length, "opened file channel");
        Ok(Self {
            file: Some(file),
            path,
            length,
            read_cursor: 0,
            write_cursor: 0,
        })
    }

    fn file_mut(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::Closed)
    }
}

impl Channel for FileChannel {
    #[inline]
    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn close(&mut self) {
        if self.file.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file channel");
        }
    }
}

impl ReadChannel for FileChannel {
    #[inline]
    fn eof(&self) -> bool {
        self.read_cursor >= self.length
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let cursor = self.read_cursor;
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(cursor))?;
        file.read_exact(buf)?;
        self.read_cursor = cursor + buf.len() as u64;
        Ok(())
    }

    fn read_position(&mut self) -> Result<u64> {
        self.file_mut()?;
        Ok(self.read_cursor)
    }

    fn seek_read(&mut self, position: SeekFrom) -> Result<u64> {
        self.file_mut()?;
        self.read_cursor = resolve_seek(self.length, self.read_cursor, position)?;
        Ok(self.read_cursor)
    }
}

impl WriteChannel for FileChannel {
    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        let cursor = self.write_cursor;
        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(cursor))?;
        file.write_all(buf)?;
        self.write_cursor = cursor + buf.len() as u64;
        self.length = self.length.max(self.write_cursor);
        Ok(())
    }

    fn write_position(&mut self) -> Result<u64> {
        self.file_mut()?;
        Ok(self.write_cursor)
    }

    fn seek_write(&mut self, position: u64) -> Result<u64> {
        self.file_mut()?;
        self.write_cursor = position;
        Ok(self.write_cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_source_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "data.bin");
        std::fs::write(&path, [0x01, 0x02, 0x03, 0x04]).unwrap();

        let mut source = FileSource::open(&path).unwrap();
        assert!(source.is_open());
        assert!(!source.eof());

        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
        assert!(source.eof());
    }

    #[test]
    fn test_source_seek_and_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "data.bin");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let mut source = FileSource::open(&path).unwrap();
        assert_eq!(source.seek_read(SeekFrom::End(-4)).unwrap(), 12);
        assert_eq!(source.read_position().unwrap(), 12);
        assert_eq!(source.seek_read(SeekFrom::Current(2)).unwrap(), 14);
        assert_eq!(source.seek_read(SeekFrom::Start(0)).unwrap(), 0);
    }

    #[test]
    fn test_source_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::open(temp_path(&dir, "missing.bin"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_source_closed_operations_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "data.bin");
        std::fs::write(&path, [1u8]).unwrap();

        let mut source = FileSource::open(&path).unwrap();
        source.close();
        source.close();
        assert!(!source.is_open());

        let mut buf = [0u8; 1];
        assert!(matches!(source.read_exact(&mut buf), Err(Error::Closed)));
        assert!(matches!(source.read_position(), Err(Error::Closed)));
    }

    #[test]
    fn test_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "out.bin");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write_all(&[0xAA, 0xBB]).unwrap();
        assert_eq!(sink.write_position().unwrap(), 2);
        sink.seek_write(0).unwrap();
        sink.write_all(&[0xCC]).unwrap();
        sink.close();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0xCC, 0xBB]);
    }

    #[test]
    fn test_channel_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "rw.bin");

        let mut channel = FileChannel::open(&path).unwrap();
        channel.write_all(&[0x10, 0x20, 0x30]).unwrap();
        assert_eq!(channel.write_position().unwrap(), 3);

        let mut buf = [0u8; 3];
        channel.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0x10, 0x20, 0x30]);
        assert!(channel.eof());
    }

    #[test]
    fn test_channel_cursors_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "rw.bin");

        let mut channel = FileChannel::open(&path).unwrap();
        channel.write_all(&[1, 2, 3, 4]).unwrap();

        let mut buf = [0u8; 2];
        channel.read_exact(&mut buf).unwrap();
        assert_eq!(channel.read_position().unwrap(), 2);
        assert_eq!(channel.write_position().unwrap(), 4);

        channel.write_all(&[5]).unwrap();
        assert_eq!(channel.read_position().unwrap(), 2);
    }

    #[test]
    fn test_channel_eof_tracks_written_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "rw.bin");

        let mut channel = FileChannel::open(&path).unwrap();
        assert!(channel.eof());

        channel.write_all(&[9]).unwrap();
        assert!(!channel.eof());
    }
}
