// src/scrape/pool.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicBool, AtomicUsize, Ordering }}
};

use crate::config::{consts::JITTER_MS, options::NetOptions};

/// Shared stop flag. Workers check it before taking the next job; a job
/// already in flight runs to completion.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self { Self::default() }
    pub fn cancel(&self) { self.0.store(true, Ordering::Relaxed); }
    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::Relaxed) }
}

#[derive(Clone, Copy, Debug)]
pub struct PoolConfig {
    pub workers: usize,
    pub pause_ms: u64,
    pub jitter_ms: u64,
}

impl PoolConfig {
    pub fn from_net(net: &NetOptions) -> Self {
        Self { workers: net.worker_count(), pause_ms: net.pause_ms, jitter_ms: JITTER_MS }
    }

    fn pause_after(&self, job: usize) -> Duration {
        if self.pause_ms == 0 {
            return Duration::ZERO;
        }
        let jitter = if self.jitter_ms > 0 { job as u64 % self.jitter_ms } else { 0 };
        Duration::from_millis(self.pause_ms + jitter)
    }
}

/// Run `work` over `jobs` on at most `cfg.workers` threads.
///
/// Results arrive as `(job index, result)` in completion order. The
/// channel closes once every worker has exited, so callers can simply
/// iterate the receiver. Dropping the receiver stops the workers after
/// their current job.
pub fn spawn<T, R, F>(
    jobs: Vec<T>,
    cfg: PoolConfig,
    cancel: &CancelToken,
    work: F,
) -> mpsc::Receiver<(usize, R)>
where
    T: Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel::<(usize, R)>();
    if jobs.is_empty() {
        return rx;
    }

    let workers = cfg.workers.min(jobs.len()).max(1);
    let jobs = Arc::new(jobs);
    let next = Arc::new(AtomicUsize::new(0));
    let work = Arc::new(work);

    for _ in 0..workers {
        let jobs = Arc::clone(&jobs);
        let next = Arc::clone(&next);
        let work = Arc::clone(&work);
        let cancel = cancel.clone();
        let tx = tx.clone();

        thread::spawn(move || {
            loop {
                if cancel.is_cancelled() {
                    break;
                }
                let i = next.fetch_add(1, Ordering::Relaxed);
                if i >= jobs.len() {
                    break;
                }
                let result = work(&jobs[i]);
                if tx.send((i, result)).is_err() {
                    break; // nobody listening any more
                }
                thread::sleep(cfg.pause_after(i)); // be polite
            }
        });
    }
    rx
}
