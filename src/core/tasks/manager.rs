use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::api;

/// Runs fetches off the UI thread and hands the results back over a channel
/// that the app drains once per frame. Dropping the manager drops the
/// receiver, so a fetch that outlives the app has nowhere to deliver to and
/// its result is discarded.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// One best-effort fetch of the whole deck. Each call is independent;
    /// there is no de-duplication guard.
    pub fn fetch_cards(&self, endpoint: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Fetching flashcards...".to_string()));

            let result = runtime.block_on(async {
                api::fetch_flashcards(&endpoint).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::CardsLoaded(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
