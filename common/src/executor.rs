//! The outbound port for running shell commands.
//!
//! Everything SpiderScan asks of the outside world goes through
//! [`CommandExecutor`]. The production adapter lives in `spiderscan-core`;
//! tests plug in fakes that record what would have been run.

use std::path::Path;

use async_trait::async_trait;

use crate::error::PipelineError;

/// What a finished process left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Runs `command` once and waits for it to exit.
    ///
    /// A non-zero exit status is not an error here, it is reported through
    /// [`CommandOutput::code`]. Only failing to start the process is.
    async fn execute(&self, command: &str, cwd: Option<&Path>)
    -> Result<CommandOutput, PipelineError>;
}
