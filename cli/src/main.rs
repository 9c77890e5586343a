mod commands;
mod terminal;

use std::process::ExitCode;

use tracing::{error, info};

use commands::{CommandLine, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if let Err(e) = logging::init_logging(&commands.log_file) {
        eprintln!("failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    print::banner(commands.no_banner);
    info!("SpiderScan started.");

    let cfg = commands.to_config();
    match scan::scan(&cfg).await {
        Ok(()) => {
            info!("SpiderScan completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("SpiderScan encountered an error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
