//! Retrying wrapper around the [`CommandExecutor`] port.
//!
//! Every external tool invocation in the pipeline goes through
//! [`CommandRunner::run`]. A command is considered failed when it exits
//! non-zero or cannot be spawned; failures are retried according to the
//! configured [`RetryPolicy`], and the last failure is returned once the
//! attempts are used up.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use spiderscan_common::config::RetryPolicy;
use spiderscan_common::error::PipelineError;
use spiderscan_common::executor::{CommandExecutor, CommandOutput};

pub struct CommandRunner {
    executor: Arc<dyn CommandExecutor>,
    policy: RetryPolicy,
}

impl CommandRunner {
    pub fn new(executor: Arc<dyn CommandExecutor>, policy: RetryPolicy) -> Self {
        Self { executor, policy }
    }

    /// Runs `command` until it succeeds or the retry policy is exhausted.
    ///
    /// The delay is only slept between attempts, never after the last one.
    pub async fn run(
        &self,
        command: &str,
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, PipelineError> {
        let mut attempt: u32 = 1;

        loop {
            info!("Running command: {command}");

            let failure = match self.executor.execute(command, cwd).await {
                Ok(output) if output.is_success() => {
                    let stdout = output.stdout.trim_end();
                    if !stdout.is_empty() {
                        info!("{stdout}");
                    }
                    return Ok(output);
                }
                Ok(output) => {
                    error!(
                        "Error occurred while running command: `{command}` returned non-zero exit status {}",
                        output
                            .code
                            .map_or_else(|| "(signal)".to_string(), |c| c.to_string())
                    );
                    let stderr = output.stderr.trim_end();
                    if !stderr.is_empty() {
                        error!("{stderr}");
                    }
                    PipelineError::CommandFailed {
                        command: command.to_string(),
                        attempts: attempt,
                        code: output.code,
                        stderr: stderr.to_string(),
                    }
                }
                Err(e) => {
                    error!("Error occurred while running command: {e}");
                    e
                }
            };

            if attempt >= self.policy.attempts {
                return Err(failure);
            }

            warn!(
                "Retrying in {:.1}s (attempt {}/{})",
                self.policy.delay.as_secs_f64(),
                attempt + 1,
                self.policy.attempts
            );
            tokio::time::sleep(self.policy.delay).await;
            attempt += 1;
        }
    }

    /// Runs `command` exactly once and reports whether it exited cleanly.
    ///
    /// Output is discarded. Used for "is this tool installed?" checks where
    /// failure is an expected answer rather than an error.
    pub async fn probe(&self, command: &str, cwd: Option<&Path>) -> bool {
        match self.executor.execute(command, cwd).await {
            Ok(output) => output.is_success(),
            Err(e) => {
                debug!("probe `{command}` could not run: {e}");
                false
            }
        }
    }
}
