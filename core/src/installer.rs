use std::path::Path;

use tracing::{info, warn};

use spiderscan_common::error::PipelineError;

use crate::runner::CommandRunner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    AlreadyPresent,
    Installed,
    /// The install command succeeded but the check still fails.
    Unverified,
}

/// Installs a tool with `install_cmd` unless `check_cmd` already succeeds.
///
/// The check runs once without retries; only the install goes through the
/// retrying runner. A failed post-install check is logged, not raised.
pub async fn ensure_dependency(
    runner: &CommandRunner,
    check_cmd: &str,
    install_cmd: &str,
    cwd: Option<&Path>,
) -> Result<InstallOutcome, PipelineError> {
    if runner.probe(check_cmd, cwd).await {
        return Ok(InstallOutcome::AlreadyPresent);
    }

    info!("{check_cmd} not found. Installing...");
    runner.run(install_cmd, cwd).await?;

    if runner.probe(check_cmd, cwd).await {
        Ok(InstallOutcome::Installed)
    } else {
        warn!("`{check_cmd}` still fails after installing, later steps may break");
        Ok(InstallOutcome::Unverified)
    }
}
