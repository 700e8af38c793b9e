//! Coefficient-level polynomial helpers.
//!
//! Coefficients are stored in ascending power order: `c[i]` multiplies `t^i`.

/// Evaluate the `order`-th derivative of `sum(c[i] * t^i)` at `t`.
///
/// Uses Horner's scheme over the differentiated coefficients. Returns
/// `0.0` when `order` exceeds the degree.
///
/// # Example
///
/// ```
/// use trajsample_curves::polynomial::evaluate;
///
/// // p(t) = 1 + 2t + 3t^2
/// let c = [1.0, 2.0, 3.0];
/// assert!((evaluate(&c, 2.0, 0) - 17.0).abs() < 1e-12);
/// assert!((evaluate(&c, 2.0, 1) - 14.0).abs() < 1e-12);
/// assert!((evaluate(&c, 2.0, 2) - 6.0).abs() < 1e-12);
/// assert_eq!(evaluate(&c, 2.0, 3), 0.0);
/// ```
#[inline]
pub fn evaluate(coefficients: &[f64], t: f64, order: usize) -> f64 {
    let mut terms = coefficients
        .iter()
        .enumerate()
        .skip(order)
        .rev()
        .map(|(power, &c)| c * falling_factorial(power, order));

    match terms.next() {
        Some(leading) => terms.fold(leading, |acc, term| acc * t + term),
        None => 0.0,
    }
}

/// `n * (n - 1) * ... * (n - k + 1)`, the factor `d^k/dt^k t^n` contributes.
#[inline]
pub fn falling_factorial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    ((n - k + 1)..=n).fold(1.0, |acc, factor| acc * factor as f64)
}
