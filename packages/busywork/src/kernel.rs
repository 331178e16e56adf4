use std::fmt;

/// The canonical bound fed to the kernel by the `busywork` drivers.
///
/// Large enough that one run takes a measurable slice of wall-clock time on an
/// interpreted host, small enough that the sum stays far inside `i64` range.
pub const DEFAULT_BOUND: i64 = 2117;

/// Computes the masked triangle sum for the given bound.
///
/// Starting from an accumulator of 1, iterates `i` over `0..bound` and, for
/// each `i`, iterates `j` from 0 while `j <= i`, adding `i & j` to the
/// accumulator after each increment of `j`. The increment precedes the AND, so
/// the mask observes `j` in `1..=i+1`.
///
/// The function is pure and deterministic. A non-positive bound skips the
/// outer loop entirely and returns the initial accumulator value of 1.
///
/// # Examples
///
/// ```
/// use busywork::masked_triangle_sum;
///
/// assert_eq!(masked_triangle_sum(0), 1);
/// assert_eq!(masked_triangle_sum(-7), 1);
/// assert_eq!(masked_triangle_sum(4), 12);
/// ```
#[expect(
    clippy::arithmetic_side_effects,
    reason = "counters stay below the bound and the sum stays far below i64::MAX for any bound that completes in reasonable time"
)]
#[must_use]
pub fn masked_triangle_sum(bound: i64) -> i64 {
    let mut x: i64 = 1;
    let mut i: i64 = 0;

    while i < bound {
        let mut j: i64 = 0;

        while j <= i {
            j += 1;
            x += i & j;
        }

        i += 1;
    }

    x
}

/// Computes the masked triangle sum and reports exact loop extents.
///
/// Returns the same value as [`masked_triangle_sum`] for the same bound,
/// together with a [`LoopActivity`] recording how many times each loop body
/// executed. Useful for verifying that a host executed the expected amount of
/// work rather than short-circuiting it.
///
/// Kept as a separate implementation so the counter bookkeeping cannot distort
/// the cost profile of the uninstrumented kernel.
///
/// # Examples
///
/// ```
/// use busywork::masked_triangle_sum_traced;
///
/// let (value, activity) = masked_triangle_sum_traced(4);
/// assert_eq!(value, 12);
/// assert_eq!(activity.outer_iterations(), 4);
/// assert_eq!(activity.inner_iterations(), 10);
/// ```
#[expect(
    clippy::arithmetic_side_effects,
    reason = "counters stay below the bound and the sum stays far below i64::MAX for any bound that completes in reasonable time"
)]
#[must_use]
pub fn masked_triangle_sum_traced(bound: i64) -> (i64, LoopActivity) {
    let mut activity = LoopActivity {
        outer_iterations: 0,
        inner_iterations: 0,
    };

    let mut x: i64 = 1;
    let mut i: i64 = 0;

    while i < bound {
        activity.outer_iterations += 1;

        let mut j: i64 = 0;

        while j <= i {
            activity.inner_iterations += 1;

            j += 1;
            x += i & j;
        }

        i += 1;
    }

    (x, activity)
}

/// Loop-extent counters captured by [`masked_triangle_sum_traced`].
///
/// For a non-negative bound `n` the kernel executes exactly `n` outer
/// iterations and `n * (n + 1) / 2` inner iterations; a negative bound
/// executes none of either.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LoopActivity {
    outer_iterations: u64,
    inner_iterations: u64,
}

impl LoopActivity {
    /// How many times the outer loop body executed.
    #[must_use]
    pub fn outer_iterations(&self) -> u64 {
        self.outer_iterations
    }

    /// How many times the inner loop body executed, summed across all outer
    /// iterations.
    #[must_use]
    pub fn inner_iterations(&self) -> u64 {
        self.inner_iterations
    }
}

impl fmt::Display for LoopActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} outer iterations; {} inner iterations",
            self.outer_iterations, self.inner_iterations
        )
    }
}
