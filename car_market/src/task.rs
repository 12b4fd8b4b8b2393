//! Screen-bound asynchronous work.
//!
//! A screen spawns its store and oracle calls through [`ScreenTasks`].
//! Tearing the screen down cancels whatever is still pending, and results
//! that arrive afterwards are dropped instead of being applied to a screen
//! that no longer exists.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct ScreenTasks {
    screen: &'static str,
    token: CancellationToken,
}

impl ScreenTasks {
    pub fn new(screen: &'static str) -> Self {
        Self {
            screen,
            token: CancellationToken::new(),
        }
    }

    pub fn screen(&self) -> &'static str {
        self.screen
    }

    /// Run `fut` until it completes or the screen is torn down
    pub fn spawn<F, T>(&self, fut: F) -> TaskHandle<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let token = self.token.child_token();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => None,
                out = fut => Some(out),
            }
        });
        TaskHandle {
            screen: self.screen,
            token,
            handle,
        }
    }

    /// Cancel every pending task of this screen
    pub fn teardown(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Tearing down tasks of screen {}", self.screen);
        }
        self.token.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ScreenTasks {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

pub struct TaskHandle<T> {
    screen: &'static str,
    token: CancellationToken,
    handle: JoinHandle<Option<T>>,
}

impl<T> TaskHandle<T> {
    /// Wait for the task. `None` if the screen was torn down before the
    /// result could be used.
    pub async fn join(self) -> Option<T> {
        let result = match self.handle.await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Task of screen {} did not complete: {}", self.screen, e);
                None
            }
        };
        if self.token.is_cancelled() {
            tracing::trace!("Discarding result for torn down screen {}", self.screen);
            return None;
        }
        result
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
