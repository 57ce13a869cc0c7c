//! One-shot, abandonable remote catalog load.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;

use crate::client::FetchError;

/// How a remote load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote segment was merged; `added` remote products survived dedup.
    Merged { added: usize },
    /// The fetch failed; the session keeps its local-only catalog.
    Failed(FetchError),
    /// The load was cancelled before its result could be applied.
    Abandoned,
}

/// Handle to an in-flight remote load.
///
/// Cancelling (or dropping the handle) marks the load abandoned: the fetch may
/// still complete, but its response is discarded instead of applied.
#[derive(Debug)]
pub struct RemoteLoad {
    cancellation: Arc<AtomicBool>,
    task: Option<JoinHandle<LoadOutcome>>,
}

impl RemoteLoad {
    pub(crate) fn new(cancellation: Arc<AtomicBool>, task: JoinHandle<LoadOutcome>) -> Self {
        Self {
            cancellation,
            task: Some(task),
        }
    }

    /// Abandon the load.
    pub fn cancel(&self) {
        self.cancellation.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.load(Ordering::Acquire)
    }

    /// Wait for the load to finish.
    pub async fn wait(mut self) -> LoadOutcome {
        // Stays in `self.task` until joined; `Drop` cancels an unfinished wait.
        let Some(task) = self.task.as_mut() else {
            return LoadOutcome::Abandoned;
        };
        let joined = task.await;
        self.task = None;

        match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("remote catalog load task failed: {e}");
                LoadOutcome::Abandoned
            }
        }
    }
}

impl Drop for RemoteLoad {
    fn drop(&mut self) {
        // Teardown before completion abandons the load.
        if self.task.is_some() {
            self.cancel();
        }
    }
}
