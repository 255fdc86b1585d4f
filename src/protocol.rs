//! Template backend calls
//!
//! The wizard talks to the template backend over a request/response call
//! that is slow relative to the UI: a call runs on a worker thread and the
//! result comes back over a channel. Dropping the pending call abandons it;
//! the worker notices the closed channel and discards the response.
//!
//! Backend calls are made from the shell on explicit user action, never from
//! inside property listeners.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{AppforgeError, Result};

/// A backend the caller can dispatch to. The stock implementation simulates
/// the real template service; tests substitute their own.
pub trait Backend: Send + Sync + 'static {
    fn call(&self, input: &str) -> Result<i32>;
}

/// Stand-in backend used when no template service is attached: answers with
/// the input length after a short simulated round trip.
pub struct EchoBackend {
    latency: Duration,
}

impl EchoBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for EchoBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Backend for EchoBackend {
    fn call(&self, input: &str) -> Result<i32> {
        thread::sleep(self.latency);
        Ok(input.chars().count() as i32)
    }
}

/// Dispatches calls to a backend on worker threads.
pub struct BackendCaller {
    backend: Arc<dyn Backend>,
}

impl BackendCaller {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Start a call. Returns immediately; the result arrives on the handle.
    pub fn call(&self, input: impl Into<String>) -> PendingCall {
        let input = input.into();
        let backend = Arc::clone(&self.backend);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            tracing::debug!(input = %input, "backend call started");
            let result = backend.call(&input);
            // The handle may have been dropped while we worked; the failed
            // send is the cancellation path, nothing to do about it.
            if tx.send(result).is_err() {
                tracing::debug!("backend call abandoned, dropping response");
            }
        });

        PendingCall { rx }
    }
}

impl Default for BackendCaller {
    fn default() -> Self {
        Self::new(Arc::new(EchoBackend::default()))
    }
}

/// Handle to an in-flight backend call. Drop it to abandon the call.
pub struct PendingCall {
    rx: mpsc::Receiver<Result<i32>>,
}

impl PendingCall {
    /// Block until the response arrives.
    pub fn wait(self) -> Result<i32> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(AppforgeError::backend("worker dropped the response")))
    }

    /// Non-blocking poll, for the shell's event loop.
    pub fn try_result(&self) -> Option<Result<i32>> {
        self.rx.try_recv().ok()
    }
}
