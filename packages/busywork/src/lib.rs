#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Deterministic CPU-burning kernels for timing interpreters and harnesses.
//!
//! The kernel is a doubly-nested integer loop that folds `i & j` into a running
//! sum. It computes nothing domain-meaningful; its entire purpose is to exercise
//! loop and arithmetic dispatch in a host for a precisely known amount of work,
//! so that wall-clock measurements of the host are comparable across runs.
//!
//! The work is intentionally quadratic: a bound of `n` performs exactly
//! `n * (n + 1) / 2` inner iterations, so doubling the bound roughly quadruples
//! the runtime.
//!
//! # Computing the sum
//!
//! ```
//! use busywork::masked_triangle_sum;
//!
//! // Small bounds have hand-checkable results.
//! assert_eq!(masked_triangle_sum(0), 1);
//! assert_eq!(masked_triangle_sum(3), 6);
//!
//! // The canonical workload.
//! assert_eq!(busywork::masked_triangle_sum(busywork::DEFAULT_BOUND), 1_083_876_708);
//! ```
//!
//! # Timing a run
//!
//! ```
//! use busywork::timed_masked_triangle_sum;
//!
//! let timed = timed_masked_triangle_sum(500);
//!
//! // The wrapper preserves the kernel result alongside the measurement.
//! assert_eq!(timed.value(), busywork::masked_triangle_sum(500));
//! println!("took {:?}", timed.wall_time());
//! ```
//!
//! # Verifying loop extent
//!
//! ```
//! use busywork::masked_triangle_sum_traced;
//!
//! let (value, activity) = masked_triangle_sum_traced(10);
//! assert_eq!(value, busywork::masked_triangle_sum(10));
//! assert_eq!(activity.outer_iterations(), 10);
//! assert_eq!(activity.inner_iterations(), 55);
//! ```

mod kernel;
mod timed;

pub use kernel::*;
pub use timed::*;
