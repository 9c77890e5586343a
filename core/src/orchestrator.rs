//! # Scan Pipeline
//!
//! Drives one end-to-end run for a single domain:
//! 1. create the output directory,
//! 2. fetch ParamSpider and the fuzzing templates, install their dependencies,
//! 3. collect URLs,
//! 4. scan the collected URLs with nuclei.
//!
//! Collection and scanning are submitted to the [`StageExecutor`] one after
//! the other; the scan only starts once `urls.txt` is on disk.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::info;

use spiderscan_common::config::Config;
use spiderscan_common::executor::CommandExecutor;
use spiderscan_common::tools::{FUZZING_TEMPLATES, NUCLEI, PARAMSPIDER, PARAMSPIDER_REQUIREMENTS_CMD};

use crate::collector::{self, CollectedUrls};
use crate::fetcher;
use crate::installer;
use crate::runner::CommandRunner;
use crate::scan;
use crate::stages::StageExecutor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Setup,
    Collect,
    Scan,
}

type StageCallback = Box<dyn Fn(Stage) + Send + Sync>;

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub urls_file: PathBuf,
    pub url_count: usize,
    pub elapsed: Duration,
}

pub struct Orchestrator {
    runner: Arc<CommandRunner>,
    stages: StageExecutor,
    on_stage: Option<StageCallback>,
}

impl Orchestrator {
    pub fn new(executor: Arc<dyn CommandExecutor>, cfg: &Config) -> Self {
        Self {
            runner: Arc::new(CommandRunner::new(executor, cfg.retry)),
            stages: StageExecutor::default(),
            on_stage: None,
        }
    }

    /// Registers a callback invoked whenever the pipeline enters a new stage.
    pub fn with_progress(mut self, on_stage: impl Fn(Stage) + Send + Sync + 'static) -> Self {
        self.on_stage = Some(Box::new(on_stage));
        self
    }

    pub async fn run(&self, cfg: &Config) -> anyhow::Result<RunSummary> {
        let start = Instant::now();
        let cfg = &cfg
            .clone()
            .anchored()
            .with_context(|| format!("resolving work directory {}", cfg.workdir.display()))?;
        let output_dir = cfg.output_dir();

        tokio::fs::create_dir_all(&output_dir)
            .await
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;

        if cfg.skip_setup {
            info!("Skipping repository and dependency setup");
        } else {
            self.notify(Stage::Setup);
            self.prepare_tools(cfg).await?;
        }

        self.notify(Stage::Collect);
        let collected: CollectedUrls = {
            let runner = self.runner.clone();
            let domain = cfg.domain.clone();
            let workdir = cfg.workdir.clone();
            self.stages
                .submit("collect", async move {
                    collector::collect_urls(&runner, &domain, &output_dir, &workdir).await
                })
                .wait()
                .await
                .with_context(|| format!("collecting URLs for {}", cfg.domain))?
        };

        self.notify(Stage::Scan);
        {
            let runner = self.runner.clone();
            let urls_file = collected.path.clone();
            let templates = cfg.templates_dir();
            let workdir = cfg.workdir.clone();
            self.stages
                .submit("scan", async move {
                    scan::run_scan(&runner, &urls_file, &templates, Some(&workdir)).await
                })
                .wait()
                .await
                .context("running nuclei")?;
        }

        Ok(RunSummary {
            urls_file: collected.path,
            url_count: collected.count,
            elapsed: start.elapsed(),
        })
    }

    async fn prepare_tools(&self, cfg: &Config) -> anyhow::Result<()> {
        let workdir = cfg.workdir.as_path();

        fetcher::fetch_repository(
            &self.runner,
            PARAMSPIDER.repo_url,
            &workdir.join(PARAMSPIDER.clone_dir),
            Some(workdir),
        )
        .await
        .with_context(|| format!("fetching {}", PARAMSPIDER.name))?;

        self.runner
            .run(PARAMSPIDER_REQUIREMENTS_CMD, Some(workdir))
            .await
            .with_context(|| format!("installing {} requirements", PARAMSPIDER.name))?;

        fetcher::fetch_repository(
            &self.runner,
            FUZZING_TEMPLATES.repo_url,
            &cfg.templates_dir(),
            Some(workdir),
        )
        .await
        .with_context(|| format!("fetching {}", FUZZING_TEMPLATES.name))?;

        installer::ensure_dependency(&self.runner, NUCLEI.check_cmd, NUCLEI.install_cmd, Some(workdir))
            .await
            .with_context(|| format!("installing {}", NUCLEI.name))?;

        Ok(())
    }

    fn notify(&self, stage: Stage) {
        if let Some(cb) = &self.on_stage {
            cb(stage);
        }
    }
}
