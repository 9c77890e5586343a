use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use spiderscan_core::orchestrator::Stage;

use crate::terminal::colors;

const TICKS: &[&str] = &["▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁"];

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(|| {
        let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);
        let pb = ProgressBar::new_spinner().with_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    })
}

fn stage_message(stage: Stage) -> String {
    let (step, text) = match stage {
        Stage::Setup => ("1/3", "Fetching tools and installing dependencies..."),
        Stage::Collect => ("2/3", "Collecting URLs with ParamSpider..."),
        Stage::Scan => ("3/3", "Scanning collected URLs with nuclei..."),
    };
    format!("[{}] {}", step.color(colors::ACCENT).bold(), text)
}

/// Shows `stage` on the spinner, restarting its elapsed clock.
pub fn report_stage(stage: Stage) {
    let pb = get_spinner();
    pb.reset_elapsed();
    pb.set_message(stage_message(stage));
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Console sink for log lines. Writes to stderr with the spinner suspended so
/// the two never interleave.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match SPINNER.get() {
            Some(pb) => pb.suspend(|| io::stderr().write_all(buf))?,
            None => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
