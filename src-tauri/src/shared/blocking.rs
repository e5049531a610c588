//! Usage: Run synchronous filesystem work on the blocking pool without stalling async callers.

pub(crate) async fn run<T, F>(label: &'static str, f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, String> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(task = label, "blocking task failed: {}", err);
            Err(format!("TASK_JOIN: {label}: {err}"))
        }
    }
}
