//! Rotating file writer with size-based rotation and backup retention.
//!
//! Used as the `tracing-subscriber` writer when a `log_file` is configured.
//! Editor integrations usually swallow stderr, so a log file is the only way
//! to see what a lookup did.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds the size limit it is renamed to
/// `<name>.<unix timestamp>` and a new file is started. Backups beyond the
/// retention limit are removed, oldest first.
///
/// The file is opened lazily on the first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_file_size: u64,
    max_backups: usize,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Writer rotating at [`MAX_FILE_SIZE_BYTES`] and keeping
    /// [`MAX_BACKUP_FILES`] backups.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_file_size: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_file_size,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf` to the file, rotating first if it has grown too large.
    ///
    /// # Errors
    ///
    /// Fails on permission problems, a full disk, or a poisoned lock.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_file_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let mut backup_name = self.file_path.clone().into_os_string();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Keeps the newest `max_backups` backups. Individual removal errors are
    /// ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let backup_prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&backup_prefix))
                    .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time).then_with(|| b.cmp(a))
        });

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_file_size", &self.max_file_size)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counterpart.log");
        let writer = FileWriter::new(path.clone());
        assert!(!path.exists());

        writer.append(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counterpart.log");
        let writer = FileWriter::with_limits(path.clone(), 16, MAX_BACKUP_FILES);

        writer.append(b"0123456789abcdefghi\n").unwrap();
        writer.append(b"after\n").unwrap();

        let backups: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| p != &path)
            .collect();
        assert_eq!(backups.len(), 1);

        let backup_name = backups[0].file_name().unwrap().to_str().unwrap();
        let stamp = backup_name.strip_prefix("counterpart.log.").unwrap();
        assert!(!stamp.is_empty() && stamp.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789abcdefghi\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
    }

    #[test]
    fn file_under_limit_is_not_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counterpart.log");
        let writer = FileWriter::with_limits(path.clone(), 64, MAX_BACKUP_FILES);

        writer.append(b"short\n").unwrap();
        writer.append(b"short\n").unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\nshort\n");
    }

    #[test]
    fn cleanup_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counterpart.log");
        for stamp in 1..=5 {
            fs::write(dir.path().join(format!("counterpart.log.{stamp}")), "x").unwrap();
        }
        fs::write(dir.path().join("counterpart.log.keep-me"), "x").unwrap();

        FileWriter::new(path).cleanup_old_backups().unwrap();

        let remaining = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, MAX_BACKUP_FILES + 1);
        assert!(dir.path().join("counterpart.log.keep-me").exists());
    }
}
