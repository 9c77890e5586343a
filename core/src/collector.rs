//! URL collection through ParamSpider.
//!
//! ParamSpider writes its findings to a scratch file in the work directory.
//! The lines are moved verbatim into `<output_dir>/urls.txt` and the scratch
//! file is removed.

use std::path::{Path, PathBuf};

use tracing::info;

use spiderscan_common::config::URLS_FILE_NAME;
use spiderscan_common::error::PipelineError;
use spiderscan_common::tools::{self, DISCOVERY_TEMP_FILE};

use crate::runner::CommandRunner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedUrls {
    pub path: PathBuf,
    pub count: usize,
}

pub async fn collect_urls(
    runner: &CommandRunner,
    domain: &str,
    output_dir: &Path,
    workdir: &Path,
) -> Result<CollectedUrls, PipelineError> {
    info!("Collecting URLs for domain: {domain}");

    let temp_file = workdir.join(DISCOVERY_TEMP_FILE);
    runner
        .run(&tools::paramspider_cmd(domain, &temp_file), Some(workdir))
        .await?;

    if !temp_file.exists() {
        return Err(PipelineError::MissingDiscoveryOutput(temp_file));
    }

    let raw = tokio::fs::read_to_string(&temp_file).await?;
    let urls: Vec<&str> = raw.lines().collect();

    let mut contents = String::with_capacity(raw.len() + 1);
    for url in &urls {
        contents.push_str(url);
        contents.push('\n');
    }

    let path = output_dir.join(URLS_FILE_NAME);
    if let Err(e) = tokio::fs::write(&path, contents).await {
        let _ = tokio::fs::remove_file(&temp_file).await;
        return Err(e.into());
    }
    tokio::fs::remove_file(&temp_file).await?;

    info!("{} URLs saved to {}", urls.len(), path.display());
    Ok(CollectedUrls {
        path,
        count: urls.len(),
    })
}
