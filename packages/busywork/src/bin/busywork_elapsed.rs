#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Driver that runs the kernel once with the canonical bound and prints the
//! elapsed wall-clock milliseconds instead of the computed value.
//!
//! Takes no arguments and emits exactly one decimal line on stdout. The
//! computed value feeds a `black_box` so the timed work cannot be optimized
//! away even though this driver never prints it.

use std::hint::black_box;

use busywork::{DEFAULT_BOUND, timed_masked_triangle_sum};

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() {
    let timed = timed_masked_triangle_sum(black_box(DEFAULT_BOUND));

    black_box(timed.value());

    println!("{timed}");
}
