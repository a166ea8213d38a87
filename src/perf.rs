//! Timing for the engine's hot paths.
//!
//! Every move or resize ends in a full repack, so packing is the operation
//! most likely to show up as a dropped frame. [`Operation`] names each timed
//! path together with its budget; an [`OperationTimer`] that overruns its
//! budget reports through `tracing`.
//!
//! Build with the `profiling` feature to time the library's own scopes:
//! ```toml
//! [dependencies]
//! gridboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use gridboard::perf::Operation;
//! use gridboard::profile_scope;
//!
//! fn repack() {
//!     profile_scope!(Operation::Pack);
//!     // ... work ...
//! }
//! ```

use crate::constants::{REPLAY_BUDGET_MS, SLOW_OPERATION_MS};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;

/// Runtime switch for scope timers; only consulted by `profiling` builds.
static TIMING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Operations
// ============================================================================

/// A timed code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// One call to the packing engine
    Pack,
    /// One layout intent, including its repack
    ApplyIntent,
    /// A whole replay script
    Replay,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Pack => "pack",
            Operation::ApplyIntent => "apply_intent",
            Operation::Replay => "replay",
        }
    }

    /// Time after which the operation is reported as slow, in milliseconds.
    pub fn budget_ms(self) -> f64 {
        match self {
            Operation::Pack | Operation::ApplyIntent => SLOW_OPERATION_MS,
            Operation::Replay => REPLAY_BUDGET_MS,
        }
    }
}

// ============================================================================
// Scope Timing (compiled out without the `profiling` feature)
// ============================================================================

/// Time the enclosing scope as the given [`Operation`].
#[macro_export]
macro_rules! profile_scope {
    ($operation:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::OperationTimer::start($operation);
        #[cfg(not(feature = "profiling"))]
        let _ = $operation;
    };
}

pub use profile_scope;

pub fn set_timing_enabled(enabled: bool) {
    TIMING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

/// Reports its operation on drop if it ran over budget and timing is enabled.
pub struct OperationTimer {
    operation: Operation,
    started: Instant,
}

impl OperationTimer {
    pub fn start(operation: Operation) -> Self {
        Self {
            operation,
            started: Instant::now(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        if is_timing_enabled() {
            report_if_slow(self.operation, self.elapsed_ms());
        }
    }
}

// ============================================================================
// Explicit Timing
// ============================================================================

/// Run `f` as `operation`, returning its result and the elapsed milliseconds.
/// Overruns are always reported, whatever the build features.
pub fn time<T, F: FnOnce() -> T>(operation: Operation, f: F) -> (T, f64) {
    let started = Instant::now();
    let result = f();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    report_if_slow(operation, elapsed_ms);
    (result, elapsed_ms)
}

fn report_if_slow(operation: Operation, elapsed_ms: f64) {
    let budget_ms = operation.budget_ms();
    if elapsed_ms > budget_ms {
        warn!(
            operation = operation.name(),
            elapsed_ms = format!("{:.2}", elapsed_ms),
            budget_ms = format!("{:.2}", budget_ms),
            "Slow operation"
        );
    }
}
