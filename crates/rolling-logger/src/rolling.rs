//! Rolling File + Recent Lines Buffer

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Rotation and buffer limits
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    /// Rotate once the active file would grow past this size
    pub max_file_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_backups: usize,
    /// Lines kept in memory for [`LogHandle::recent_lines`]
    pub recent_capacity: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_backups: 3,
            recent_capacity: 200,
        }
    }
}

struct RollingLog {
    path: PathBuf,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    config: RollingConfig,
}

impl RollingLog {
    fn append(&mut self, buf: &[u8]) -> io::Result<()> {
        let len = buf.len() as u64;
        if self.written > 0 && self.written + len > self.config.max_file_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += len;

        for line in String::from_utf8_lossy(buf).lines() {
            if line.is_empty() {
                continue;
            }
            if self.recent.len() == self.config.recent_capacity {
                self.recent.pop_front();
            }
            if self.config.recent_capacity > 0 {
                self.recent.push_back(line.to_string());
            }
        }
        Ok(())
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
        for n in (1..self.config.max_backups).rev() {
            let from = backup_path(&self.path, n);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, n + 1))?;
            }
        }
        fs::rename(&self.path, backup_path(&self.path, 1))?;

        self.file = File::create(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", n));
    PathBuf::from(name)
}

/// Shared handle on the log file. Clones write to the same file.
#[derive(Clone)]
pub struct LogHandle {
    inner: Arc<Mutex<RollingLog>>,
}

impl LogHandle {
    /// Open (append to) `<dir>/<name>.log`, creating `dir` if needed
    pub fn open(dir: &Path, name: &str, config: RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(RollingLog {
                path,
                file,
                written,
                recent: VecDeque::with_capacity(config.recent_capacity),
                config,
            })),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.inner.lock().path.clone()
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.inner.lock().recent.iter().cloned().collect()
    }

    /// Write one line, adding the trailing newline
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut log = self.inner.lock();
        log.append(format!("{}\n", line).as_bytes())
    }
}

impl Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogHandle {
    type Writer = LogHandle;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
