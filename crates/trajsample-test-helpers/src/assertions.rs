//! Custom assertion macros for floating-point curve checks.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use trajsample_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f64, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert closeness relative to the larger magnitude, with an absolute floor of 1.
///
/// `|left - right| <= tolerance * max(1, |left|, |right|)`.
///
/// # Example
///
/// ```rust
/// use trajsample_test_helpers::assert_close_rel;
///
/// assert_close_rel!(1.0e6, 1.0e6 + 1.0e-4, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_close_rel {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let scale = 1.0_f64.max(left.abs()).max(right.abs());
        let diff = (left - right).abs();
        if !(diff <= $tolerance * scale) {
            panic!(
                "assertion failed: `(left ≈ right)` (relative)\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  scale: `{:?}`",
                left, right, diff, scale
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let scale = 1.0_f64.max(left.abs()).max(right.abs());
        let diff = (left - right).abs();
        if !(diff <= $tolerance * scale) {
            panic!(
                "assertion failed: `(left ≈ right)` (relative)\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  scale: `{:?}`: {}",
                left, right, diff, scale, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two float sequences have equal length and agree element-wise.
///
/// # Example
///
/// ```rust
/// use trajsample_test_helpers::assert_sequence_close;
///
/// assert_sequence_close!(&[1.0_f64, 2.0], &[1.0_f64, 2.0 + 1e-12], 1e-9);
/// ```
#[macro_export]
macro_rules! assert_sequence_close {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        if left.len() != right.len() {
            panic!(
                "assertion failed: sequences differ in length\n  left: `{}`,\n right: `{}`",
                left.len(),
                right.len()
            );
        }
        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            let diff: f64 = (l - r).abs();
            if !(diff <= $tolerance) {
                panic!(
                    "assertion failed: sequences differ at index {}\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`",
                    i, l, r, diff
                );
            }
        }
    };
}
