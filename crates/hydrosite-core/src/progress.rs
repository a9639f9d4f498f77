//! Progress reporting seam.
//!
//! The library reports coarse progress events through an optional callback
//! and never draws anything itself; front-ends decide how (or whether) to
//! surface them.

use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub enum Progress {
    /// A named phase (discovery, rendering) has begun.
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// A counted batch of per-site steps has begun.
    BatchStart { total_steps: u64 },
    BatchIncrement,
    BatchFinish,

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

/// Runs `f`, logging the wall time it took under `label`.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    info!(
        "Total time running {}: {:.2} seconds",
        label,
        start.elapsed().as_secs_f64()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn reporter_without_callback_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchStart { total_steps: 3 });
        reporter.report(Progress::BatchFinish);
    }

    #[test]
    fn callback_sees_every_event() {
        let count = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|_| {
            count.fetch_add(1, Ordering::SeqCst);
        }));
        reporter.report(Progress::BatchStart { total_steps: 2 });
        reporter.report(Progress::BatchIncrement);
        reporter.report(Progress::BatchIncrement);
        reporter.report(Progress::BatchFinish);
        drop(reporter);
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn timed_returns_the_closure_result() {
        assert_eq!(timed("addition", || 2 + 2), 4);
    }
}
