//! Stopwatch-style timing utilities.
//!
//! [`Timer`] accumulates wall-clock time across start/stop segments and
//! [`ScopedTimer`] brackets a timer around a lexical scope:
//!
//! ```
//! use tictoc::{ScopedTimer, Timer};
//!
//! let mut timer = Timer::start_new();
//! // ...do stuff
//! let secs = timer.elapsed_secs();
//!
//! let mut phase = Timer::new();
//! {
//!     let _guard = ScopedTimer::new(&mut phase);
//!     // ...timed no matter how this block exits
//! }
//! assert!(!phase.is_ticking());
//! # let _ = secs;
//! ```
//!
//! A `Timer` is not synchronized; sharing one across threads needs external
//! locking.

pub mod logger;
pub mod scoped;
pub mod timer;

pub use crate::logger::init_logging;
pub use crate::scoped::ScopedTimer;
pub use crate::timer::{Timer, time};
