use std::fmt;
use std::time::{Duration, Instant};

use crate::kernel::masked_triangle_sum;

/// Runs the kernel once and measures the elapsed wall-clock time.
///
/// Captures a timestamp immediately before and after one call to
/// [`masked_triangle_sum`] and reports the difference, together with the
/// computed value. The value is retained rather than discarded so callers can
/// verify the run did the expected work, and so the optimizer cannot remove
/// the computation being timed.
///
/// Wall-clock time includes whatever else the host was doing, so treat a
/// single measurement as indicative rather than precise.
///
/// # Examples
///
/// ```
/// use busywork::timed_masked_triangle_sum;
///
/// let timed = timed_masked_triangle_sum(200);
///
/// assert_eq!(timed.value(), busywork::masked_triangle_sum(200));
/// println!("took {} ms", timed.wall_time().as_millis());
/// ```
#[must_use]
pub fn timed_masked_triangle_sum(bound: i64) -> TimedSum {
    let start = Instant::now();
    let value = masked_triangle_sum(bound);
    let wall_time = start.elapsed();

    TimedSum { value, wall_time }
}

/// The outcome of one timed kernel run.
///
/// Displays as the elapsed whole milliseconds, which is the line format the
/// `busywork_elapsed` driver emits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimedSum {
    value: i64,
    wall_time: Duration,
}

impl TimedSum {
    /// The value the kernel computed during the timed run.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Wall-clock time the run took, at the resolution of the host's
    /// monotonic clock.
    #[must_use]
    pub fn wall_time(&self) -> Duration {
        self.wall_time
    }
}

impl fmt::Display for TimedSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wall_time.as_millis())
    }
}
