use std::path::Path;

use tracing::info;

use spiderscan_common::error::PipelineError;
use spiderscan_common::tools;

use crate::runner::CommandRunner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    AlreadyPresent,
    Cloned,
}

/// Clones `repo_url` into `dir` unless `dir` already exists.
///
/// An existing directory is trusted whatever it contains.
pub async fn fetch_repository(
    runner: &CommandRunner,
    repo_url: &str,
    dir: &Path,
    cwd: Option<&Path>,
) -> Result<FetchOutcome, PipelineError> {
    if dir.exists() {
        info!("Repository {} already exists.", dir.display());
        return Ok(FetchOutcome::AlreadyPresent);
    }

    runner.run(&tools::clone_cmd(repo_url, dir), cwd).await?;
    Ok(FetchOutcome::Cloned)
}
