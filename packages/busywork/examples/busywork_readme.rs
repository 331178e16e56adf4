//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! Runs the kernel at a few bounds, shows the loop-extent trace, and times
//! the canonical workload.
//!
//! Run with: `cargo run --example busywork_readme`.

use busywork::{
    DEFAULT_BOUND, masked_triangle_sum, masked_triangle_sum_traced, timed_masked_triangle_sum,
};

fn main() {
    println!("=== Busywork README Example ===");

    // Small bounds have hand-checkable results.
    for bound in [0, 1, 4, 16] {
        println!("masked_triangle_sum({bound}) = {}", masked_triangle_sum(bound));
    }

    // The traced variant proves how much work a run performed.
    let (value, activity) = masked_triangle_sum_traced(100);
    println!("masked_triangle_sum(100) = {value} ({activity})");

    // The canonical workload, timed.
    let timed = timed_masked_triangle_sum(DEFAULT_BOUND);
    println!(
        "masked_triangle_sum({DEFAULT_BOUND}) = {} in {:?}",
        timed.value(),
        timed.wall_time()
    );

    println!("README example completed successfully!");
}
