//! Frame and operation timing.
//!
//! Tracks animation-frame durations for the page tick and per-operation
//! statistics for layout passes, so slow frames show up in the logs.
//!
//! Enable detailed instrumentation with the `profiling` feature:
//! ```toml
//! [dependencies]
//! showcase = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn layout() {
//!     showcase::profile_scope!("layout");
//!     // ... work ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{debug, warn};
#[cfg(feature = "profiling")]
use tracing::trace;

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of frame samples kept for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Warn when a frame takes this many times the target
const WARN_THRESHOLD: f64 = 2.0;

/// Number of samples kept per operation
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros
// ============================================================================

/// Time the enclosing scope. Compiles to nothing without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Frame Monitor
// ============================================================================

/// Frame time and per-operation statistics for the page tick.
pub struct PerfMonitor {
    /// Recent frame times in milliseconds
    frame_times: VecDeque<f64>,
    frame_start: Option<Instant>,
    slow_frame_count: u64,
    total_frames: u64,
    operation_stats: HashMap<&'static str, OperationStats>,
}

/// Rolling statistics for one named operation.
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

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frame_count: 0,
            total_frames: 0,
            operation_stats: HashMap::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Close the frame opened by `begin_frame`. Returns its duration in ms.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.record_frame(ms);
        Some(ms)
    }

    /// Add one frame of `ms` to the rolling window.
    pub fn record_frame(&mut self, ms: f64) {
        if self.frame_times.len() == SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            warn!(frame_ms = %format!("{ms:.2}"), "Page frame over budget");
        }
    }

    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64) {
        self.operation_stats.entry(name).or_default().record(elapsed_ms);
    }

    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frame_count as f64 / self.total_frames as f64) * 100.0
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    pub fn get_operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operation_stats.get(name)
    }

    /// Warn with a summary when the rolling average misses the frame budget.
    /// Returns true if a summary was logged.
    pub fn log_summary_if_slow(&self) -> bool {
        let avg = self.average_frame_time();
        if avg <= TARGET_FRAME_MS {
            return false;
        }
        warn!(
            avg_ms = %format!("{avg:.2}"),
            worst_ms = %format!("{:.2}", self.max_frame_time()),
            fps = %format!("{:.0}", self.estimated_fps()),
            over_budget = %format!("{:.1}%", self.slow_frame_percentage()),
            "Page frames running slow"
        );
        for (name, stats) in &self.operation_stats {
            debug!(
                operation = *name,
                avg_ms = stats.average(),
                worst_ms = stats.max(),
                calls = stats.count(),
                "Operation timing"
            );
        }
        true
    }

    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.slow_frame_count = 0;
        self.total_frames = 0;
        self.operation_stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs the scope's duration on drop when it exceeds the threshold.
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

    /// Timer with a 1ms threshold
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        #[cfg(not(feature = "profiling"))]
        {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and return its result with the elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
