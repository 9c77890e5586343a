use std::path::Path;

use tracing::{error, info};

use spiderscan_common::error::PipelineError;
use spiderscan_common::executor::CommandOutput;
use spiderscan_common::tools;

use crate::runner::CommandRunner;

/// Runs nuclei over `url_file` with the templates in `template_dir`.
///
/// Both inputs are checked before anything is spawned. Results are left to
/// nuclei's own reporting.
pub async fn run_scan(
    runner: &CommandRunner,
    url_file: &Path,
    template_dir: &Path,
    cwd: Option<&Path>,
) -> Result<CommandOutput, PipelineError> {
    info!("Running Nuclei with templates from: {}", template_dir.display());

    if !url_file.exists() {
        error!("URL file not found: {}", url_file.display());
        return Err(PipelineError::MissingUrlFile(url_file.to_path_buf()));
    }

    if !template_dir.exists() {
        error!("Template directory not found: {}", template_dir.display());
        return Err(PipelineError::MissingTemplates(template_dir.to_path_buf()));
    }

    runner
        .run(&tools::nuclei_cmd(url_file, template_dir), cwd)
        .await
}
