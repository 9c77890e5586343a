//! # SpiderScan Core
//!
//! The sequencing layer between the CLI and the external tools. Nothing in
//! here discovers URLs or tests for vulnerabilities; it clones, installs,
//! invokes and hands files from one tool to the next.
//!
//! All process spawning goes through the
//! [`CommandExecutor`](spiderscan_common::executor::CommandExecutor) port, so
//! each piece can be exercised without the real tools present.

pub mod collector;
pub mod fetcher;
pub mod installer;
pub mod orchestrator;
pub mod runner;
pub mod scan;
pub mod shell;
pub mod stages;

#[cfg(test)]
pub(crate) mod fake;
