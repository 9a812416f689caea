use std::sync::Arc;
use std::time::{Duration, Instant};

use paddlex_core::errors::{ExError, ExErrorKind};
use paddlex_store::PaddleStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PaddleStore>,
    pub db_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<PaddleStore>, db_timeout: Duration) -> Self {
        Self { store, db_timeout }
    }

    /// Run a storage call on the blocking pool under the configured deadline
    ///
    /// # Errors
    /// * `Timeout` - the call did not finish within `db_timeout`
    /// * `Internal` - the blocking task panicked
    /// * whatever the storage call itself returns
    pub async fn run<T, F>(&self, op: &'static str, call: F) -> Result<T, ExError>
    where
        F: FnOnce(&PaddleStore) -> paddlex_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let task = tokio::task::spawn_blocking(move || call(store.as_ref()));

        match tokio::time::timeout(self.db_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(ExError::new(ExErrorKind::Internal)
                .with_op(op)
                .with_message(join_err.to_string())),
            Err(_) => Err(ExError::new(ExErrorKind::Timeout)
                .with_op(op)
                .with_message(format!(
                    "storage call exceeded {} ms",
                    self.db_timeout.as_millis()
                ))),
        }
    }

    /// Run a write on the blocking pool, handing it a deadline instead of
    /// abandoning it
    ///
    /// The call is always awaited to completion; it is expected to roll back
    /// and return `Timeout` once the deadline passes, so the response always
    /// matches what was stored.
    ///
    /// # Errors
    /// * `Internal` - the blocking task panicked
    /// * whatever the storage call itself returns
    pub async fn run_until<T, F>(&self, op: &'static str, call: F) -> Result<T, ExError>
    where
        F: FnOnce(&PaddleStore, Instant) -> paddlex_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let deadline = Instant::now() + self.db_timeout;

        tokio::task::spawn_blocking(move || call(store.as_ref(), deadline))
            .await
            .map_err(|join_err| {
                ExError::new(ExErrorKind::Internal)
                    .with_op(op)
                    .with_message(join_err.to_string())
            })?
    }
}
