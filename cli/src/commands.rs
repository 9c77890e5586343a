pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use spiderscan_common::config::{
    Config, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATES_DIR, RetryPolicy,
};

#[derive(Parser, Debug)]
#[command(name = "spiderscan", version)]
#[command(about = "SpiderScan - collect parameterised URLs for a domain and fuzz them with nuclei.")]
pub struct CommandLine {
    /// Domain to scan (e.g., example.com)
    #[arg(short, long)]
    pub domain: String,

    /// Directory for saving collected URLs
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Path to nuclei templates
    #[arg(short, long, default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Directory tools are cloned into and commands run from
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// File every log line is appended to
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Attempts per external command before giving up
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub retries: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value_t = 5)]
    pub retry_delay: u64,

    /// Assume ParamSpider, the templates and nuclei are already in place
    #[arg(long)]
    pub skip_setup: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            domain: self.domain.clone(),
            output_dir: self.output_dir.clone(),
            templates_dir: self.templates.clone(),
            workdir: self.workdir.clone(),
            retry: RetryPolicy::new(self.retries, Duration::from_secs(self.retry_delay)),
            skip_setup: self.skip_setup,
        }
    }
}
