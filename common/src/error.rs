//! Failure taxonomy of the pipeline.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("command `{command}` failed after {attempts} attempt(s) (exit code: {}): {stderr}", exit_code(.code))]
    CommandFailed {
        command: String,
        attempts: u32,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("URL file not found: {}", .0.display())]
    MissingUrlFile(PathBuf),

    #[error("Template directory not found: {}", .0.display())]
    MissingTemplates(PathBuf),

    #[error("discovery tool produced no output file: {}", .0.display())]
    MissingDiscoveryOutput(PathBuf),

    #[error("stage '{stage}' aborted: {reason}")]
    StageAborted { stage: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}
