//! Deferred-construction sequence.
//!
//! A [`LazySequence`] stores one builder closure per element and runs it
//! every time the element is requested. Nothing is cached: peak memory is
//! bounded by the captured builder arguments, and a consumer may stream
//! through a large candidate space, keeping only the elements it wants.

use core::fmt;
use core::ops::Range;

type Builder<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Largest number of builder slots [`LazySequence::with_capacity`] reserves.
pub const MAX_RESERVED_BUILDERS: usize = 1 << 16;

/// Ordered, finite, restartable sequence of on-demand elements.
///
/// Each access to an element invokes its builder again; two reads of the
/// same index produce two independently built values.
///
/// # Concurrency
///
/// Builders are `Send + Sync` and independent of each other, so disjoint
/// index ranges ([`LazySequence::iter_range`]) can be consumed from
/// different threads. The sequence itself does not track which elements
/// have been built.
///
/// # Example
///
/// ```
/// use trajsample_sampler::LazySequence;
///
/// let mut squares = LazySequence::new();
/// for i in 0..4u64 {
///     squares.push(move || i * i);
/// }
///
/// assert_eq!(squares.len(), 4);
/// assert_eq!(squares.get(3), Some(9));
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
/// // Restartable: a second pass rebuilds every element.
/// assert_eq!(squares.iter().sum::<u64>(), 14);
/// ```
pub struct LazySequence<T> {
    builders: Vec<Builder<T>>,
}

impl<T> LazySequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Create an empty sequence with room for up to `capacity` builders.
    ///
    /// The reservation is capped at [`MAX_RESERVED_BUILDERS`], so a saturated
    /// candidate count is a safe hint; `push` grows the storage past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            builders: Vec::with_capacity(capacity.min(MAX_RESERVED_BUILDERS)),
        }
    }

    /// Append a builder; it owns everything it captures.
    pub fn push<F>(&mut self, builder: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.builders.push(Box::new(builder));
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Build the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.builders.get(index).map(|build| build())
    }

    /// Iterate from the start, building each element as it is reached.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.builders.iter(),
        }
    }

    /// Iterate over the elements whose indices fall in `range`.
    ///
    /// The range is clipped to the sequence length, so an out-of-range
    /// request yields fewer (possibly zero) elements instead of panicking.
    pub fn iter_range(&self, range: Range<usize>) -> Iter<'_, T> {
        let end = range.end.min(self.builders.len());
        let start = range.start.min(end);
        Iter {
            inner: self.builders.get(start..end).unwrap_or_default().iter(),
        }
    }

    /// Compose `f` onto every builder. Still nothing is built.
    pub fn map<U, F>(self, f: F) -> LazySequence<U>
    where
        T: 'static,
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
    {
        let builders = self
            .builders
            .into_iter()
            .map(|build| {
                let f = f.clone();
                Box::new(move || f(build())) as Builder<U>
            })
            .collect();
        LazySequence { builders }
    }
}

impl<C, E> LazySequence<Result<C, E>> {
    /// Build every element in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the error of the first element whose construction fails.
    pub fn materialize(&self) -> Result<Vec<C>, E> {
        self.iter().collect()
    }
}

impl<T> Default for LazySequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequence")
            .field("len", &self.builders.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoIterator for &'a LazySequence<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LazySequence`], building elements on `next`.
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Builder<T>>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|build| build())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        // Skipped elements are never built.
        self.inner.nth(n).map(|build| build())
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|build| build())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
