//! Rolling log file with an in-memory tail.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

/// Size and retention limits
#[derive(Debug, Clone)]
pub struct RollingConfig {
    /// Rotate once the active file would grow past this many bytes
    pub max_bytes: u64,
    /// Rotated files kept as `<name>.log.1` .. `<name>.log.N`
    pub max_backups: usize,
    /// Lines retained in memory for `recent_lines`
    pub buffer_lines: usize,
    /// Also print formatted events to stderr
    pub echo_stderr: bool,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_backups: 3,
            buffer_lines: 500,
            echo_stderr: false,
        }
    }
}

pub(crate) struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    config: RollingConfig,
    recent: VecDeque<String>,
}

impl RollingFile {
    pub(crate) fn open(dir: &Path, app_name: &str, config: RollingConfig) -> io::Result<Self> {
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        let mut rolling = Self {
            path,
            file,
            written,
            recent: VecDeque::with_capacity(config.buffer_lines),
            config,
        };
        // Earlier runs' lines are part of the tail
        if written > 0 {
            let existing = fs::read(&rolling.path)?;
            rolling.remember(&existing);
        }
        Ok(rolling)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn append(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.config.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    /// Last `n` lines, oldest first
    pub(crate) fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.recent.len().saturating_sub(n);
        self.recent.iter().skip(skip).cloned().collect()
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.config.buffer_lines == 0 {
            return;
        }
        for line in String::from_utf8_lossy(buf).lines() {
            if self.recent.len() == self.config.buffer_lines {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.config.max_backups == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = backup_path(&self.path, self.config.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.config.max_backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, backup_path(&self.path, 1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

pub(crate) fn backup_path(path: &Path, index: usize) -> PathBuf {
    PathBuf::from(format!("{}.{}", path.display(), index))
}

/// Cloneable handle handed to tracing as the event writer
#[derive(Clone)]
pub(crate) struct SharedWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl SharedWriter {
    pub(crate) fn new(file: RollingFile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(file)),
        }
    }

    pub(crate) fn recent(&self, n: usize) -> Vec<String> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).recent(n)
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).path().to_path_buf()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

impl<'a> MakeWriter<'a> for SharedWriter {
    type Writer = SharedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
