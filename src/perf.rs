//! Performance instrumentation for the pointer hot path.
//!
//! Pointer-move handlers run for every mouse event during a drag, so they
//! are wrapped in scoped timers. With the `profiling` feature enabled the
//! timings are aggregated per operation; without it a timer only warns when
//! an operation blows through its threshold.
//!
//! ```ignore
//! fn on_pointer_move(&mut self, point: Vec2) {
//!     profile_scope!("on_pointer_move");
//!     // ...
//! }
//! ```

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Budget for a single pointer event (one 60 FPS frame)
pub const POINTER_EVENT_BUDGET_MS: f64 = 16.67;

/// Number of samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

static OPERATION_STATS: Lazy<Mutex<HashMap<&'static str, OperationStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// Rolling timing statistics for one operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    /// Total number of recorded invocations, including evicted samples
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Add a sample to the global per-operation statistics.
pub fn record_operation(name: &'static str, elapsed_ms: f64) {
    OPERATION_STATS.lock().entry(name).or_default().record(elapsed_ms);
}

/// Snapshot of the statistics for one operation.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    OPERATION_STATS.lock().get(name).cloned()
}

pub fn reset_operation_stats() {
    OPERATION_STATS.lock().clear();
}

/// A timer that reports its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the per-event budget as threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, POINTER_EVENT_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            record_operation(self.name, elapsed_ms);
            trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
