//! The sampler seam: modes, result sets and terminal conditions.

use serde::{Deserialize, Serialize};
use trajsample_curves::{Curve, CurveError, KinematicState1D};

use crate::lazy::{self, LazySequence};

/// Whether a sampler solves every candidate up front or defers each solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Solve every candidate during `sample`; any failure fails the call.
    #[default]
    Eager,
    /// Store one builder per candidate; solve on access.
    Lazy,
}

impl SampleMode {
    /// Whether this is [`SampleMode::Lazy`].
    #[inline]
    pub fn is_lazy(self) -> bool {
        matches!(self, SampleMode::Lazy)
    }
}

impl From<bool> for SampleMode {
    /// `true` selects lazy production.
    fn from(lazy: bool) -> Self {
        if lazy {
            SampleMode::Lazy
        } else {
            SampleMode::Eager
        }
    }
}

/// One point of a single-segment candidate grid.
///
/// `target` is the terminal first derivative for quartic sampling and the
/// terminal value for quintic sampling. The terminal second derivative is
/// always 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerminalCondition {
    /// Curve duration.
    pub end_time: f64,
    /// Controlled terminal quantity.
    pub target: f64,
}

/// Curves produced by one `sample` call, in enumeration order.
pub enum CurveSet<C> {
    /// Curves built during sampling.
    Eager(Vec<C>),
    /// Builders that solve a curve on every access.
    Lazy(LazySequence<Result<C, CurveError>>),
}

impl<C> CurveSet<C> {
    /// Number of candidates.
    pub fn len(&self) -> usize {
        match self {
            CurveSet::Eager(curves) => curves.len(),
            CurveSet::Lazy(seq) => seq.len(),
        }
    }

    /// Whether no candidate was produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the set defers construction.
    pub fn is_lazy(&self) -> bool {
        matches!(self, CurveSet::Lazy(_))
    }

    /// Materialise every curve, taking ownership.
    ///
    /// # Errors
    ///
    /// For a lazy set, returns the first construction error in order.
    pub fn into_curves(self) -> Result<Vec<C>, CurveError> {
        match self {
            CurveSet::Eager(curves) => Ok(curves),
            CurveSet::Lazy(seq) => seq.materialize(),
        }
    }

    /// Convert every curve with `f`, preserving the production mode.
    pub fn map<D, F>(self, f: F) -> CurveSet<D>
    where
        C: 'static,
        F: Fn(C) -> D + Clone + Send + Sync + 'static,
    {
        match self {
            CurveSet::Eager(curves) => CurveSet::Eager(curves.into_iter().map(f).collect()),
            CurveSet::Lazy(seq) => CurveSet::Lazy(seq.map(move |built| built.map(&f))),
        }
    }
}

impl<C: Clone> CurveSet<C> {
    /// The curve at `index`: cloned when eager, built when lazy.
    pub fn get(&self, index: usize) -> Option<Result<C, CurveError>> {
        match self {
            CurveSet::Eager(curves) => curves.get(index).cloned().map(Ok),
            CurveSet::Lazy(seq) => seq.get(index),
        }
    }

    /// Iterate in enumeration order.
    pub fn iter(&self) -> CurveSetIter<'_, C> {
        match self {
            CurveSet::Eager(curves) => CurveSetIter::Eager(curves.iter()),
            CurveSet::Lazy(seq) => CurveSetIter::Lazy(seq.iter()),
        }
    }
}

impl<C> core::fmt::Debug for CurveSet<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CurveSet::Eager(curves) => f.debug_tuple("Eager").field(&curves.len()).finish(),
            CurveSet::Lazy(seq) => f.debug_tuple("Lazy").field(&seq.len()).finish(),
        }
    }
}

impl<'a, C: Clone> IntoIterator for &'a CurveSet<C> {
    type Item = Result<C, CurveError>;
    type IntoIter = CurveSetIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CurveSet`].
#[derive(Debug)]
pub enum CurveSetIter<'a, C> {
    /// Clones prebuilt curves.
    Eager(core::slice::Iter<'a, C>),
    /// Builds curves on demand.
    Lazy(lazy::Iter<'a, Result<C, CurveError>>),
}

impl<C: Clone> Iterator for CurveSetIter<'_, C> {
    type Item = Result<C, CurveError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            CurveSetIter::Eager(iter) => iter.next().cloned().map(Ok),
            CurveSetIter::Lazy(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            CurveSetIter::Eager(iter) => iter.size_hint(),
            CurveSetIter::Lazy(iter) => iter.size_hint(),
        }
    }
}

impl<C: Clone> ExactSizeIterator for CurveSetIter<'_, C> {}

/// A generator of candidate curves from a start state.
///
/// Samplers own only their candidate configuration. Each `sample` call is
/// independent and leaves the sampler unchanged; the produced curves
/// belong to the caller.
pub trait Sampler {
    /// Curve type produced for every candidate.
    type Curve: Curve + Clone + Send + Sync + 'static;

    /// Enumerate the candidate grid from `start`.
    ///
    /// # Errors
    ///
    /// In [`SampleMode::Eager`], returns the first construction error.
    /// [`SampleMode::Lazy`] never fails here; errors surface on access.
    fn sample(
        &self,
        start: KinematicState1D,
        mode: SampleMode,
    ) -> Result<CurveSet<Self::Curve>, CurveError>;

    /// Number of candidates `sample` produces, without building any.
    fn candidate_count(&self) -> usize;
}
