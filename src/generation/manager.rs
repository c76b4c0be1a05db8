use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use crate::core::CardSet;

pub type GenerationResult = Result<CardSet, String>;

/// Runs generation requests off the UI thread and hands results back
/// through a channel drained once per frame. Strictly sequential: a
/// request made while one is outstanding is refused, and the pending
/// flag gates the UI's add flow.
pub struct GenerationManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<GenerationResult>,
    sender: mpsc::Sender<GenerationResult>,
    pending: bool,
}

impl GenerationManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create generation runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, pending: false }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn request(&mut self, input: String) {
        if self.pending {
            return;
        }
        self.pending = true;

        let sender = self.sender.clone();
        let runtime = self.runtime.clone();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { super::api::generate(&input).await.map_err(|e| e.to_string()) });

            let _ = sender.send(result);
        });
    }

    pub fn poll(&mut self) -> Option<GenerationResult> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.pending = false;
                Some(result)
            }
            Err(_) => None,
        }
    }
}

impl Default for GenerationManager {
    fn default() -> Self {
        Self::new()
    }
}
