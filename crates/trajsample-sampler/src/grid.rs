//! Candidate grid enumeration.

/// All length-`repeat` sequences over `candidates`, in lexicographic order.
///
/// Matches the order of a k-fold cartesian product: the last position
/// varies fastest. Yields `candidates.len().pow(repeat)` sequences; a
/// `repeat` of 0 yields one empty sequence and an empty candidate set
/// yields nothing for any `repeat >= 1`.
///
/// # Example
///
/// ```
/// use trajsample_sampler::grid::ProductIter;
///
/// let picks: Vec<Vec<f64>> = ProductIter::new(&[1.0, 2.0], 2).collect();
/// assert_eq!(
///     picks,
///     vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![2.0, 1.0], vec![2.0, 2.0]]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ProductIter<'a> {
    candidates: &'a [f64],
    /// Odometer digits, one candidate index per position.
    digits: Vec<usize>,
    done: bool,
}

impl<'a> ProductIter<'a> {
    /// Enumerate `candidates^repeat`.
    pub fn new(candidates: &'a [f64], repeat: usize) -> Self {
        let done = candidates.is_empty() && repeat > 0;
        Self {
            candidates,
            digits: if done { Vec::new() } else { vec![0; repeat] },
            done,
        }
    }

    fn current(&self) -> Vec<f64> {
        self.digits
            .iter()
            .filter_map(|&digit| self.candidates.get(digit).copied())
            .collect()
    }

    /// Advance the odometer; returns `false` once it wraps around.
    fn advance(&mut self) -> bool {
        let base = self.candidates.len();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < base {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for ProductIter<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.done {
            return None;
        }
        let item = self.current();
        self.done = !self.advance();
        Some(item)
    }
}

/// Size of `candidates^repeat`, saturating at `usize::MAX`.
pub fn product_len(candidates: usize, repeat: usize) -> usize {
    u32::try_from(repeat)
        .ok()
        .and_then(|exp| candidates.checked_pow(exp))
        .unwrap_or(if candidates <= 1 { candidates } else { usize::MAX })
}

/// Outer-major, inner-minor pairs `(outer, inner)` of two candidate sets.
pub fn pairs<'a>(outer: &'a [f64], inner: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    outer
        .iter()
        .flat_map(move |&o| inner.iter().map(move |&i| (o, i)))
}
