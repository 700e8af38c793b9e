//! Property-based tests for boundary-value curves.
//!
//! These tests verify that every constructed curve reproduces the boundary
//! conditions it was solved from.

use quickcheck_macros::quickcheck;
use trajsample_curves::{
    Curve, KinematicState1D, PiecewiseQuinticPolynomial, QuarticPolynomial, QuinticPolynomial,
    Waypoint,
};

const TOLERANCE: f64 = 1e-9;

fn sanitize(v: f64, min: f64, max: f64) -> f64 {
    if v.is_finite() { v.clamp(min, max) } else { 0.0 }
}

fn sanitize_time(v: f64) -> f64 {
    if v.is_finite() {
        v.abs().clamp(0.5, 20.0)
    } else {
        1.0
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * 1.0_f64.max(a.abs()).max(b.abs())
}

#[quickcheck]
fn prop_quintic_reproduces_both_ends(x0: f64, v0: f64, a0: f64, xe: f64, t: f64) -> bool {
    let start = KinematicState1D::new(
        sanitize(x0, -50.0, 50.0),
        sanitize(v0, -10.0, 10.0),
        sanitize(a0, -5.0, 5.0),
    );
    let end = KinematicState1D::stationary(sanitize(xe, -50.0, 50.0));
    let t = sanitize_time(t);

    let curve = match QuinticPolynomial::from_kinematic_states(start, end, t) {
        Ok(c) => c,
        Err(_) => return false,
    };

    let s = curve.state_at(0.0);
    let e = curve.state_at(t);
    close(s.value, start.value)
        && close(s.first_derivative, start.first_derivative)
        && close(s.second_derivative, start.second_derivative)
        && close(e.value, end.value)
        && close(e.first_derivative, 0.0)
        && close(e.second_derivative, 0.0)
}

#[quickcheck]
fn prop_quartic_reproduces_terminal_derivatives(x0: f64, v0: f64, a0: f64, ve: f64, t: f64) -> bool {
    let start = KinematicState1D::new(
        sanitize(x0, -50.0, 50.0),
        sanitize(v0, -10.0, 30.0),
        sanitize(a0, -5.0, 5.0),
    );
    let ve = sanitize(ve, 0.0, 30.0);
    let t = sanitize_time(t);

    let curve = match QuarticPolynomial::from_kinematic_states(start, ve, 0.0, t) {
        Ok(c) => c,
        Err(_) => return false,
    };

    close(curve.evaluate(0.0, 0), start.value)
        && close(curve.evaluate(0.0, 1), start.first_derivative)
        && close(curve.evaluate(0.0, 2), start.second_derivative)
        && close(curve.evaluate(t, 1), ve)
        && close(curve.evaluate(t, 2), 0.0)
}

#[quickcheck]
fn prop_evaluation_is_idempotent(x0: f64, xe: f64, t: f64, query: f64, order: u8) -> bool {
    let t = sanitize_time(t);
    let curve = match QuinticPolynomial::from_kinematic_states(
        KinematicState1D::stationary(sanitize(x0, -10.0, 10.0)),
        KinematicState1D::stationary(sanitize(xe, -10.0, 10.0)),
        t,
    ) {
        Ok(c) => c,
        Err(_) => return false,
    };
    let query = sanitize(query, -2.0 * t, 2.0 * t);
    let order = usize::from(order % 8);

    let first = curve.evaluate(query, order);
    let second = curve.evaluate(query, order);
    first.to_bits() == second.to_bits()
}

#[quickcheck]
fn prop_orders_beyond_degree_vanish(query: f64, extra: u8) -> bool {
    let curve = match QuarticPolynomial::from_kinematic_states(
        KinematicState1D::new(1.0, 2.0, 3.0),
        4.0,
        0.0,
        2.0,
    ) {
        Ok(c) => c,
        Err(_) => return false,
    };
    let order = QuarticPolynomial::DEGREE + 1 + usize::from(extra);
    curve.evaluate(sanitize(query, -100.0, 100.0), order) == 0.0
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn piecewise_is_c2_at_every_knot(
            values in proptest::collection::vec(-5.0f64..5.0, 1..5),
            delta_t in 0.5f64..15.0,
            v0 in -3.0f64..3.0,
        ) {
            let mut knots = vec![Waypoint::new(0.0, 0.0, v0, 0.0)];
            for (i, value) in values.iter().enumerate() {
                knots.push(Waypoint::stationary((i as f64 + 1.0) * delta_t, *value));
            }

            let curve = PiecewiseQuinticPolynomial::from_knots(&knots)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(curve.segment_count(), values.len());

            for (i, pair) in curve.segments().windows(2).enumerate() {
                if let [before, after] = pair {
                    for order in 0..=2 {
                        let left = before.evaluate(before.end_time(), order);
                        let right = after.evaluate(0.0, order);
                        prop_assert!(
                            close(left, right),
                            "knot {} order {}: {} vs {}", i + 1, order, left, right
                        );
                    }
                }
            }

            for knot in &knots {
                let state = curve.state_at(knot.time);
                prop_assert!(close(state.value, knot.value));
                prop_assert!(close(state.first_derivative, knot.first_derivative));
                prop_assert!(close(state.second_derivative, knot.second_derivative));
            }
        }

        #[test]
        fn quintic_interior_is_finite(
            xe in -100.0f64..100.0,
            t in 0.1f64..30.0,
            q in 0.0f64..1.0,
        ) {
            let curve = QuinticPolynomial::from_kinematic_states(
                KinematicState1D::default(),
                KinematicState1D::stationary(xe),
                t,
            ).map_err(|e| TestCaseError::fail(e.to_string()))?;
            for order in 0..=QuinticPolynomial::DEGREE {
                prop_assert!(curve.evaluate(q * t, order).is_finite());
            }
        }
    }
}
