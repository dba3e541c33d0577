use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::analysis_api::{self, FetchError};

#[derive(Debug)]
pub(crate) struct FetchJob {
    /// Normalized base URL; doubles as the cache key.
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

#[derive(Debug)]
pub(crate) struct FetchResult {
    pub(crate) base_url: String,
    pub(crate) result: Result<Value, FetchError>,
}

struct PendingFetch {
    base_url: String,
    rx: Receiver<FetchResult>,
}

/// Runs at most one blocking analyze call on a worker thread.
///
/// The worker owns the only sender, so a worker that dies without reporting
/// surfaces as a disconnect instead of a fetch that never ends.
pub(super) struct FetchJobs {
    pending: Option<PendingFetch>,
}

impl FetchJobs {
    pub(super) fn new() -> Self {
        Self { pending: None }
    }

    pub(super) fn in_progress(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a fetch unless one is already running. Returns whether it started.
    pub(super) fn begin_fetch(&mut self, job: FetchJob) -> bool {
        self.begin_with(job, |job| {
            analysis_api::fetch_analysis(&job.base_url, job.timeout)
        })
    }

    fn begin_with<F>(&mut self, job: FetchJob, run: F) -> bool
    where
        F: FnOnce(&FetchJob) -> Result<Value, FetchError> + Send + 'static,
    {
        if self.pending.is_some() {
            return false;
        }
        let (tx, rx) = mpsc::channel();
        self.pending = Some(PendingFetch {
            base_url: job.base_url.clone(),
            rx,
        });
        thread::spawn(move || {
            let result = run(&job);
            let _ = tx.send(FetchResult {
                base_url: job.base_url,
                result,
            });
        });
        true
    }

    pub(super) fn try_recv(&mut self) -> Result<FetchResult, TryRecvError> {
        let Some(pending) = &self.pending else {
            return Err(TryRecvError::Empty);
        };
        let message = match pending.rx.try_recv() {
            Ok(message) => message,
            Err(TryRecvError::Empty) => return Err(TryRecvError::Empty),
            Err(TryRecvError::Disconnected) => {
                tracing::error!("Fetch worker for {} exited without a result", pending.base_url);
                FetchResult {
                    base_url: pending.base_url.clone(),
                    result: Err(FetchError::Transport(
                        "fetch worker stopped unexpectedly".to_string(),
                    )),
                }
            }
        };
        self.pending = None;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(base_url: &str) -> FetchJob {
        FetchJob {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    fn wait_for(jobs: &mut FetchJobs) -> FetchResult {
        for _ in 0..500 {
            if let Ok(message) = jobs.try_recv() {
                return message;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("job did not finish");
    }

    #[test]
    fn second_fetch_is_refused_while_one_runs() {
        let mut jobs = FetchJobs::new();
        let (release_tx, release_rx) = mpsc::channel::<()>();
        assert!(jobs.begin_with(job("http://a"), move |_| {
            let _ = release_rx.recv();
            Ok(Value::Null)
        }));
        assert!(!jobs.begin_with(job("http://b"), |_| Ok(Value::Null)));
        release_tx.send(()).unwrap();

        let message = wait_for(&mut jobs);
        assert_eq!(message.base_url, "http://a");
        assert!(!jobs.in_progress());
    }

    #[test]
    fn panicking_worker_ends_the_fetch_with_an_error() {
        let mut jobs = FetchJobs::new();
        assert!(jobs.begin_with(job("http://a"), |_| panic!("worker blew up")));

        let message = wait_for(&mut jobs);
        assert!(!jobs.in_progress());
        assert_eq!(message.base_url, "http://a");
        let err = message.result.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(jobs.begin_with(job("http://a"), |_| Ok(Value::Null)));
    }
}
