use super::config::PacingConfig;
use super::error::EngineError;
use super::progress::RecordTicker;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// Fixed-interval admission shared by every worker: at most one acquisition per
/// `interval`, globally.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Blocks until the caller's slot comes up. The first acquisition is immediate.
    pub fn acquire(&self) {
        if self.interval.is_zero() {
            return;
        }
        let wait = {
            let mut next = self.next_slot.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let slot = next.map_or(now, |n| n.max(now));
            *next = Some(slot + self.interval);
            slot - now
        };
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}

/// A bounded rayon pool whose tasks each pass through a shared [`Throttle`].
pub struct WorkerPool {
    pool: ThreadPool,
    throttle: Throttle,
}

impl WorkerPool {
    pub fn new(pacing: &PacingConfig) -> Result<Self, EngineError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(pacing.concurrency)
            .thread_name(|i| format!("xylopipe-worker-{i}"))
            .build()?;
        Ok(Self {
            pool,
            throttle: Throttle::new(pacing.request_delay),
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Applies `task` to every item. Results come back in input order whatever the
    /// number of workers.
    pub fn map<T, R, F>(&self, items: &[T], ticker: &RecordTicker<'_, '_>, task: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        self.pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    self.throttle.acquire();
                    let result = task(item);
                    ticker.tick();
                    result
                })
                .collect()
        })
    }
}
