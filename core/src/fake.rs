use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use spiderscan_common::error::PipelineError;
use spiderscan_common::executor::{CommandExecutor, CommandOutput};

type Hook = Box<dyn Fn(&str, Option<&Path>) + Send + Sync>;

/// Scripted stand-in for the shell. Replies are consumed in order; once the
/// script runs dry every command succeeds with empty output.
#[derive(Default)]
pub struct FakeExecutor {
    replies: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<(String, Option<PathBuf>)>>,
    hook: Option<Hook>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: impl IntoIterator<Item = CommandOutput>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Runs `hook` for every command before replying, e.g. to drop files
    /// the real tool would have written.
    pub fn on_execute(
        mut self,
        hook: impl Fn(&str, Option<&Path>) + Send + Sync + 'static,
    ) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    async fn execute(
        &self,
        command: &str,
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, PipelineError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), cwd.map(Path::to_path_buf)));
        if let Some(hook) = &self.hook {
            hook(command, cwd);
        }
        let reply = self.replies.lock().unwrap().pop_front();
        Ok(reply.unwrap_or_else(|| CommandOutput::success("")))
    }
}
