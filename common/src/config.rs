use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_TEMPLATES_DIR: &str = "Fuzzingtemplates-/";
pub const DEFAULT_LOG_FILE: &str = "spiderscan.log";
pub const URLS_FILE_NAME: &str = "urls.txt";

/// How often a failing command is attempted and how long to wait in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Target domain handed to the discovery tool as-is.
    pub domain: String,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
    /// Directory commands run in and tool repositories are cloned into.
    pub workdir: PathBuf,
    pub retry: RetryPolicy,
    /// Skips cloning repositories and installing dependencies.
    pub skip_setup: bool,
}

impl Config {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            workdir: PathBuf::from("."),
            retry: RetryPolicy::default(),
            skip_setup: false,
        }
    }

    /// Makes the work directory absolute against the process directory.
    ///
    /// Commands run inside the work directory, so every path handed to them
    /// must already be absolute or it would be resolved there twice.
    pub fn anchored(mut self) -> std::io::Result<Self> {
        self.workdir = std::path::absolute(&self.workdir)?;
        Ok(self)
    }

    /// Anchors a relative path on the work directory. Absolute paths pass through.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.workdir.join(path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.resolve(&self.templates_dir)
    }

    pub fn urls_file(&self) -> PathBuf {
        self.output_dir().join(URLS_FILE_NAME)
    }
}
