#![cfg(test)]
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spiderscan_common::config::{Config, RetryPolicy};
use spiderscan_common::error::PipelineError;
use spiderscan_core::orchestrator::Orchestrator;

use crate::support::SimulatedToolchain;

const DISCOVERED: &str = "https://shop.example/?q=FUZZ\n\
https://shop.example/item?id=FUZZ\n\
https://shop.example/search?term=FUZZ&page=FUZZ\n";

fn config(workdir: &Path) -> Config {
    let mut cfg = Config::new("shop.example");
    cfg.workdir = workdir.to_path_buf();
    cfg.retry = RetryPolicy::new(3, Duration::ZERO);
    cfg
}

/// A fresh work directory gets both checkouts, the requirements and nuclei
/// before ParamSpider and nuclei are run, in that order.
#[tokio::test]
async fn fresh_workdir_runs_every_step_in_order() {
    let work = tempfile::tempdir().unwrap();
    let tools = Arc::new(SimulatedToolchain::new(DISCOVERED));
    let cfg = config(work.path());

    let summary = Orchestrator::new(tools.clone(), &cfg)
        .run(&cfg)
        .await
        .expect("pipeline should succeed");

    let prefixes: Vec<&str> = tools
        .commands()
        .iter()
        .map(|c| {
            let mut words = c.split_whitespace();
            match (words.next(), words.next()) {
                (Some("nuclei"), Some("-l")) => "scan",
                (Some(first), _) => match first {
                    "git" => "clone",
                    "pip" => "pip",
                    "go" => "install",
                    "nuclei" => "check",
                    "python" => "collect",
                    _ => "other",
                },
                _ => "other",
            }
        })
        .collect();

    assert_eq!(
        prefixes,
        vec!["clone", "pip", "clone", "check", "install", "check", "collect", "scan"]
    );
    assert!(work.path().join("ParamSpider").is_dir());
    assert!(work.path().join("Fuzzingtemplates-").is_dir());

    assert_eq!(summary.url_count, 3);
    assert_eq!(std::fs::read_to_string(&summary.urls_file).unwrap(), DISCOVERED);
    assert!(!work.path().join("temp_urls.txt").exists());
}

#[tokio::test]
async fn existing_checkouts_are_not_cloned_again() {
    let work = tempfile::tempdir().unwrap();
    std::fs::create_dir(work.path().join("ParamSpider")).unwrap();
    std::fs::create_dir(work.path().join("Fuzzingtemplates-")).unwrap();
    let tools = Arc::new(SimulatedToolchain::new(DISCOVERED).with_nuclei_installed());
    let cfg = config(work.path());

    Orchestrator::new(tools.clone(), &cfg)
        .run(&cfg)
        .await
        .unwrap();

    assert_eq!(tools.count("git clone"), 0);
    assert_eq!(tools.count("go install"), 0);
    assert_eq!(tools.count("nuclei -l"), 1);
}

#[tokio::test]
async fn urls_survive_a_failed_scan() {
    let work = tempfile::tempdir().unwrap();
    let tools = Arc::new(
        SimulatedToolchain::new(DISCOVERED)
            .with_nuclei_installed()
            .failing_scan(),
    );
    let cfg = config(work.path());

    let err = Orchestrator::new(tools.clone(), &cfg)
        .run(&cfg)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::CommandFailed { attempts: 3, .. })
    ));
    assert_eq!(tools.count("nuclei -l"), 3);
    assert_eq!(
        std::fs::read_to_string(cfg.urls_file()).unwrap(),
        DISCOVERED
    );
}

#[tokio::test]
async fn broken_install_aborts_before_collection() {
    let work = tempfile::tempdir().unwrap();
    let tools = Arc::new(SimulatedToolchain::new(DISCOVERED).failing_install());
    let cfg = config(work.path());

    let result = Orchestrator::new(tools.clone(), &cfg).run(&cfg).await;

    assert!(result.is_err());
    assert_eq!(tools.count("go install"), 3);
    assert_eq!(tools.count("python"), 0);
    assert!(!cfg.urls_file().exists());
}

#[tokio::test]
async fn missing_templates_fail_without_scanning() {
    let work = tempfile::tempdir().unwrap();
    let tools = Arc::new(SimulatedToolchain::new(DISCOVERED).with_nuclei_installed());
    let mut cfg = config(work.path());
    cfg.skip_setup = true;

    let err = Orchestrator::new(tools.clone(), &cfg)
        .run(&cfg)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::MissingTemplates(_))
    ));
    assert_eq!(tools.count("nuclei -l"), 0);
    assert!(cfg.urls_file().exists());
}

/// A relative work directory is anchored once; nothing ends up nested inside
/// a second copy of it.
#[tokio::test]
async fn relative_workdir_is_resolved_once() {
    let work = tempfile::Builder::new()
        .prefix("relative-wd")
        .tempdir_in(".")
        .unwrap();
    let relative = work.path().strip_prefix(".").unwrap_or(work.path()).to_path_buf();
    assert!(relative.is_relative());

    let tools = Arc::new(SimulatedToolchain::new(DISCOVERED));
    let cfg = config(&relative);

    let summary = Orchestrator::new(tools.clone(), &cfg)
        .run(&cfg)
        .await
        .expect("pipeline should succeed with a relative work directory");

    assert!(relative.join("ParamSpider").is_dir());
    assert!(relative.join("Fuzzingtemplates-").is_dir());
    assert!(!relative.join(&relative).exists());
    assert!(!relative.join("temp_urls.txt").exists());

    assert!(summary.urls_file.is_absolute());
    assert_eq!(summary.url_count, 3);
    assert_eq!(std::fs::read_to_string(relative.join("output/urls.txt")).unwrap(), DISCOVERED);

    let scan = tools
        .commands()
        .into_iter()
        .find(|c| c.starts_with("nuclei -l "))
        .unwrap();
    assert!(scan.contains(&summary.urls_file.display().to_string()));
}
