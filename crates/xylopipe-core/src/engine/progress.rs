use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Events emitted while a workflow runs. Front ends render them; the library never
/// depends on how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    StageStart { name: &'static str },
    StageFinish,

    /// A per-record loop of `total` items is about to start.
    RecordsStart { total: u64 },
    RecordDone,
    RecordsFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

/// Counts finished records of one loop, shared by all workers.
///
/// Every completion is forwarded to the reporter; every `interval`-th completion and
/// the last one are also logged.
pub struct RecordTicker<'r, 'a> {
    reporter: &'r ProgressReporter<'a>,
    label: &'static str,
    total: usize,
    interval: usize,
    done: AtomicUsize,
}

impl<'r, 'a> RecordTicker<'r, 'a> {
    pub fn start(
        reporter: &'r ProgressReporter<'a>,
        label: &'static str,
        total: usize,
        interval: usize,
    ) -> Self {
        reporter.report(Progress::RecordsStart {
            total: total as u64,
        });
        Self {
            reporter,
            label,
            total,
            interval: interval.max(1),
            done: AtomicUsize::new(0),
        }
    }

    pub fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.reporter.report(Progress::RecordDone);
        if done % self.interval == 0 || done == self.total {
            info!("{}: {}/{} done.", self.label, done, self.total);
        }
    }

    pub fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }

    pub fn finish(self) {
        self.reporter.report(Progress::RecordsFinish);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn ticker_forwards_every_event() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|e| {
            events.lock().unwrap().push(e);
        }));

        let ticker = RecordTicker::start(&reporter, "Sequence backfill", 3, 20);
        for _ in 0..3 {
            ticker.tick();
        }
        assert_eq!(ticker.done(), 3);
        ticker.finish();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.first(), Some(&Progress::RecordsStart { total: 3 }));
        assert_eq!(events.iter().filter(|e| **e == Progress::RecordDone).count(), 3);
        assert_eq!(events.last(), Some(&Progress::RecordsFinish));
    }

    #[test]
    fn silent_reporter_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("nobody listens".into()));
        let ticker = RecordTicker::start(&reporter, "Annotation", 0, 0);
        ticker.finish();
    }
}
