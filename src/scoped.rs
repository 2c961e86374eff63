use tracing::trace;

use crate::timer::Timer;

/// Guard that brackets a [`Timer`] around a lexical scope.
///
/// Starts the borrowed timer on construction and stops it when dropped, on
/// every exit path including unwinding. The exclusive borrow means the timer
/// outlives the guard and cannot be touched elsewhere while the guard exists.
///
/// ```
/// use tictoc::{ScopedTimer, Timer};
///
/// let mut timer = Timer::new();
/// {
///     let _guard = ScopedTimer::new(&mut timer);
///     // ...work
/// }
/// assert!(!timer.is_ticking());
/// ```
pub struct ScopedTimer<'a> {
    timer: &'a mut Timer,
}

impl<'a> ScopedTimer<'a> {
    /// Borrow a timer and start it.
    pub fn new(timer: &'a mut Timer) -> Self {
        timer.start();
        Self { timer }
    }

    /// Resume the timer after an explicit in-scope `stop`.
    pub fn start(&mut self) {
        self.timer.start();
    }

    /// Stop the timer early; the drop at scope exit is then a no-op.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Reset the underlying timer to zero, stopped.
    pub fn reset(&mut self) {
        self.timer.reset();
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        self.timer.stop();
        trace!(elapsed = ?self.timer.elapsed(), "scope timed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn stops_timer_on_scope_exit() {
        let mut timer = Timer::new();
        {
            let _guard = ScopedTimer::new(&mut timer);
            sleep(Duration::from_millis(20));
        }
        assert!(!timer.is_ticking());
        assert!(timer.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn stops_timer_on_early_error_return() {
        fn failing_work(timer: &mut Timer) -> Result<(), String> {
            let _guard = ScopedTimer::new(timer);
            sleep(Duration::from_millis(20));
            Err("work failed".to_string())?;
            unreachable!()
        }

        let mut timer = Timer::new();
        assert!(failing_work(&mut timer).is_err());
        assert!(!timer.is_ticking());
        assert!(timer.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn explicit_stop_does_not_double_count() {
        let mut timer = Timer::new();
        {
            let mut guard = ScopedTimer::new(&mut timer);
            sleep(Duration::from_millis(10));
            guard.stop();
            // Runs while stopped; the drop must not fold it in.
            sleep(Duration::from_millis(100));
        }
        assert!(!timer.is_ticking());
        assert!(timer.elapsed() >= Duration::from_millis(10));
        assert!(timer.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn guard_allows_explicit_control() {
        let mut timer = Timer::new();
        {
            let mut guard = ScopedTimer::new(&mut timer);
            sleep(Duration::from_millis(10));
            guard.reset();
            guard.start();
            sleep(Duration::from_millis(10));
        }
        assert!(timer.elapsed() >= Duration::from_millis(10));
        assert!(timer.elapsed() < Duration::from_millis(60));
    }

    #[test]
    fn accumulates_across_consecutive_scopes() {
        let mut timer = Timer::new();
        for _ in 0..2 {
            let _guard = ScopedTimer::new(&mut timer);
            sleep(Duration::from_millis(10));
        }
        assert!(timer.elapsed() >= Duration::from_millis(20));
    }
}
