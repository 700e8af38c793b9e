//! Snapshot tests for stable coefficient and error output using insta.

use trajsample_curves::{
    CurveError, KinematicState1D, PiecewiseQuinticPolynomial, QuarticPolynomial,
    QuinticPolynomial, Waypoint,
};

#[test]
fn snapshot_minimum_jerk_quintic() -> Result<(), CurveError> {
    let curve = QuinticPolynomial::from_kinematic_states(
        KinematicState1D::default(),
        KinematicState1D::stationary(1.0),
        1.0,
    )?;
    insta::assert_snapshot!(
        format!("{:?}", curve.coefficients()),
        @"[0.0, 0.0, 0.0, 10.0, -15.0, 6.0]"
    );
    Ok(())
}

#[test]
fn snapshot_unit_speed_quartic() -> Result<(), CurveError> {
    let curve =
        QuarticPolynomial::from_kinematic_states(KinematicState1D::default(), 1.0, 0.0, 1.0)?;
    insta::assert_snapshot!(
        format!("{:?}", curve.coefficients()),
        @"[0.0, 0.0, 0.0, 1.0, -0.5]"
    );
    Ok(())
}

#[test]
fn snapshot_invalid_domain_message() {
    let err = QuinticPolynomial::from_kinematic_states(
        KinematicState1D::default(),
        KinematicState1D::stationary(1.0),
        -2.0,
    );
    let msg = match err {
        Err(e) => e.to_string(),
        Ok(_) => String::from("unexpected success"),
    };
    insta::assert_snapshot!(msg, @"Invalid curve domain: end_time must be finite and > 0, got -2");
}

#[test]
fn snapshot_insufficient_knots_message() {
    let msg = match PiecewiseQuinticPolynomial::from_knots(&[Waypoint::stationary(0.0, 0.0)]) {
        Err(e) => e.to_string(),
        Ok(_) => String::from("unexpected success"),
    };
    insta::assert_snapshot!(msg, @"Piecewise curve needs at least 2 knots, got 1");
}
