use std::sync::Arc;

use colored::*;

use spiderscan_common::config::Config;
use spiderscan_core::orchestrator::{Orchestrator, RunSummary, Stage};
use spiderscan_core::shell::ShellExecutor;

use crate::terminal::{colors, print, spinner};

pub async fn scan(cfg: &Config) -> anyhow::Result<()> {
    print::header(&format!("target {}", cfg.domain));
    print::aligned_line("Output", cfg.output_dir().display().to_string(), 9);
    print::aligned_line("Templates", cfg.templates_dir().display().to_string(), 9);

    let orchestrator =
        Orchestrator::new(Arc::new(ShellExecutor), cfg).with_progress(spinner::report_stage);

    let result = orchestrator.run(cfg).await;
    spinner::finish();

    let summary: RunSummary = result?;
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let urls: ColoredString = format!("{} URLs", summary.url_count).bold().green();
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64())
        .bold()
        .yellow();
    let output = format!("Scan Complete: {urls} scanned in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
    print::aligned_line("URL list", summary.urls_file.display().to_string(), 9);
}
