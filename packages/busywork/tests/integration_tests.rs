//! Integration tests exercising the public API end to end, including the
//! canonical workload the drivers run.

use busywork::{
    DEFAULT_BOUND, masked_triangle_sum, masked_triangle_sum_traced, timed_masked_triangle_sum,
};

/// The value the `busywork` driver prints: the kernel result for the
/// canonical bound, computed independently via the literal loop semantics.
const DEFAULT_BOUND_SUM: i64 = 1_083_876_708;

#[test]
fn canonical_workload_matches_golden_value() {
    assert_eq!(masked_triangle_sum(DEFAULT_BOUND), DEFAULT_BOUND_SUM);
}

#[test]
fn canonical_workload_is_repeatable() {
    assert_eq!(
        masked_triangle_sum(DEFAULT_BOUND),
        masked_triangle_sum(DEFAULT_BOUND)
    );
}

#[test]
fn canonical_workload_executes_expected_extent() {
    let (value, activity) = masked_triangle_sum_traced(DEFAULT_BOUND);

    assert_eq!(value, DEFAULT_BOUND_SUM);
    assert_eq!(activity.outer_iterations(), 2117);
    // 2117 * 2118 / 2 inner iterations in total.
    assert_eq!(activity.inner_iterations(), 2_241_903);
}

#[test]
fn timed_canonical_workload_preserves_the_value() {
    let timed = timed_masked_triangle_sum(DEFAULT_BOUND);

    assert_eq!(timed.value(), DEFAULT_BOUND_SUM);
}

#[test]
fn timed_display_is_a_single_decimal_token() {
    // The `busywork_elapsed` driver prints this rendering as its only output
    // line, so it must be nothing but digits.
    let rendered = timed_masked_triangle_sum(100).to_string();

    assert!(rendered.chars().all(|c| c.is_ascii_digit()));
}
