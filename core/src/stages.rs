//! A small bounded executor for pipeline stages.
//!
//! Stages are spawned as tokio tasks, at most [`STAGE_SLOTS`] running at once.
//! The orchestrator awaits each handle before submitting the next stage, so in
//! practice stages run back to back.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::debug;

use spiderscan_common::error::PipelineError;

pub const STAGE_SLOTS: usize = 2;

pub struct StageExecutor {
    slots: Arc<Semaphore>,
}

impl Default for StageExecutor {
    fn default() -> Self {
        Self::new(STAGE_SLOTS)
    }
}

impl StageExecutor {
    pub fn new(slots: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(slots.max(1))),
        }
    }

    pub fn submit<F, T>(&self, stage: &'static str, work: F) -> StageHandle<T>
    where
        F: Future<Output = Result<T, PipelineError>> + Send + 'static,
        T: Send + 'static,
    {
        let slots = self.slots.clone();
        let handle = tokio::spawn(async move {
            let _permit = slots
                .acquire_owned()
                .await
                .map_err(|e| PipelineError::StageAborted {
                    stage,
                    reason: e.to_string(),
                })?;
            debug!(stage, "stage started");
            work.await
        });

        StageHandle { stage, handle }
    }
}

pub struct StageHandle<T> {
    stage: &'static str,
    handle: JoinHandle<Result<T, PipelineError>>,
}

impl<T> StageHandle<T> {
    /// Waits for the stage. A panicked or cancelled task becomes
    /// [`PipelineError::StageAborted`].
    pub async fn wait(self) -> Result<T, PipelineError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(PipelineError::StageAborted {
                stage: self.stage,
                reason: e.to_string(),
            }),
        }
    }
}
