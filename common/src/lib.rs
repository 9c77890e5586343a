//! Shared building blocks for SpiderScan.
//!
//! Holds the pieces every layer agrees on: runtime [`config`], the [`error`]
//! taxonomy, the catalogue of external [`tools`] and the [`executor`] port
//! through which all shell commands leave the process.

pub mod config;
pub mod error;
pub mod executor;
pub mod tools;
