use std::fmt;
use std::time::{Duration, Instant};

/// Cumulative stopwatch over the monotonic clock.
///
/// Elapsed time is the sum of all closed start/stop segments plus the
/// currently open one, if any. `start` and `stop` are idempotent, so a
/// stray extra call never skews the total.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    /// Some while ticking; captures when the open segment began.
    started_at: Option<Instant>,
    /// Time accumulated from segments closed before the current start.
    elapsed: Duration,
}

impl Timer {
    /// Create a stopped timer with zero accumulated time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timer that starts ticking immediately.
    pub fn start_new() -> Self {
        let mut timer = Self::new();
        timer.start();
        timer
    }

    /// Start ticking, or resume where a previous `stop` left off.
    /// No effect if already ticking.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stop ticking, folding the open segment into the accumulated total.
    /// No effect if not ticking.
    pub fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.elapsed += started.elapsed();
        }
    }

    /// Stop ticking and discard all accumulated time, including any open
    /// segment.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
    }

    /// Total elapsed time: closed segments plus the open one, if ticking.
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.time_since_start()
    }

    /// Total elapsed time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Duration of the current open segment only, ignoring previously
    /// accumulated time. Zero if not ticking.
    pub fn time_since_start(&self) -> Duration {
        self.started_at.map(|s| s.elapsed()).unwrap_or_default()
    }

    /// Whether the timer is currently measuring an open segment.
    pub fn is_ticking(&self) -> bool {
        self.started_at.is_some()
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.elapsed_secs())
    }
}

/// Run a closure and return its result alongside the wall time it took.
pub fn time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}
