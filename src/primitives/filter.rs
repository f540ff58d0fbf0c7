//! Pattern filters over sequences.
//!
//! A [`Cursor`] splits its input into a *consumed* prefix and the
//! *remaining* elements. Each call to [`Filter::step`] looks at both and
//! decides how many remaining elements to keep or to drop; the cursor then
//! advances past them. Filtering ends when nothing remains.
//!
//! ```text
//! (input, [])  --step-->  (rest, kept)  --step-->  ...  -->  ([], result)
//! ```
//!
//! [`RemoveMatching`] drops every occurrence of a pattern and passes
//! everything else through. The pattern rule is always tried before the
//! one-element passthrough, so a match can never be split.
//! [`RemoveSegment`] does the same for byte strings, but only where the
//! pattern starts a path segment.

use core::ops::Range;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Outcome of one filter step over the remaining elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Append this many leading elements to the output.
    Keep(usize),
    /// Consume this many leading elements without output.
    Skip(usize),
}

impl Step {
    /// Elements consumed by this step.
    pub const fn width(self) -> usize {
        match self {
            Step::Keep(n) | Step::Skip(n) => n,
        }
    }
}

/// One rule of the filter state machine.
///
/// `step` is only called with a non-empty `remaining` and must consume at
/// least one element. `consumed` is everything before it.
pub trait Filter<T> {
    fn step(&self, consumed: &[T], remaining: &[T]) -> Step;
}

/// Keeps every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<T, F: Filter<T> + ?Sized> Filter<T> for &F {
    fn step(&self, consumed: &[T], remaining: &[T]) -> Step {
        (**self).step(consumed, remaining)
    }
}

impl<T> Filter<T> for Passthrough {
    fn step(&self, _consumed: &[T], _remaining: &[T]) -> Step {
        Step::Keep(1)
    }
}

/// Removes every occurrence of `pattern`, otherwise behaves like
/// [`Passthrough`]. An empty pattern removes nothing.
#[derive(Debug, Clone, Copy)]
pub struct RemoveMatching<'p, T> {
    pattern: &'p [T],
}

impl<'p, T> RemoveMatching<'p, T> {
    pub const fn new(pattern: &'p [T]) -> Self {
        Self { pattern }
    }

    pub const fn pattern(&self) -> &'p [T] {
        self.pattern
    }
}

impl<T: PartialEq> Filter<T> for RemoveMatching<'_, T> {
    fn step(&self, consumed: &[T], remaining: &[T]) -> Step {
        if !self.pattern.is_empty() && remaining.starts_with(self.pattern) {
            Step::Skip(self.pattern.len())
        } else {
            Passthrough.step(consumed, remaining)
        }
    }
}

/// Like [`RemoveMatching`], but a byte-string `pattern` only matches at the
/// start of a path segment: at the very beginning of the input or right
/// after one of [`SEGMENT_BOUNDARIES`]. `type_::Foo` keeps its `_::` when
/// the pattern is `_::`.
#[derive(Debug, Clone, Copy)]
pub struct RemoveSegment<'p> {
    pattern: &'p [u8],
}

/// Bytes after which a new path segment may start.
pub const SEGMENT_BOUNDARIES: &[u8] = b":<>, &*([;";

impl<'p> RemoveSegment<'p> {
    pub const fn new(pattern: &'p [u8]) -> Self {
        Self { pattern }
    }

    pub const fn pattern(&self) -> &'p [u8] {
        self.pattern
    }
}

impl Filter<u8> for RemoveSegment<'_> {
    fn step(&self, consumed: &[u8], remaining: &[u8]) -> Step {
        let at_boundary = consumed.last().is_none_or(|b| SEGMENT_BOUNDARIES.contains(b));
        if at_boundary {
            RemoveMatching::new(self.pattern).step(consumed, remaining)
        } else {
            Passthrough.step(consumed, remaining)
        }
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// The `(remaining, consumed)` state of a filter run.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T> {
    input: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub const fn new(input: &'a [T]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn remaining(&self) -> &'a [T] {
        &self.input[self.pos..]
    }

    pub fn consumed(&self) -> &'a [T] {
        &self.input[..self.pos]
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Apply one rule. Returns the step together with the input positions it
    /// covered, or `None` once the cursor is exhausted.
    pub fn advance<F: Filter<T> + ?Sized>(&mut self, filter: &F) -> Option<(Step, Range<usize>)> {
        if self.is_done() {
            return None;
        }
        let step = filter.step(self.consumed(), self.remaining());
        let width = step.width().clamp(1, self.input.len() - self.pos);
        let span = self.pos..self.pos + width;
        self.pos = span.end;
        Some((step, span))
    }
}

// =============================================================================
// Runs
// =============================================================================

/// Maximal ranges of kept elements, in input order.
///
/// Adjacent kept steps are merged, so the output contains one range per
/// stretch of input between two skipped patterns.
pub struct Runs<'a, T, F> {
    cursor: Cursor<'a, T>,
    filter: F,
}

impl<T, F: Filter<T>> Iterator for Runs<'_, T, F> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let mut run: Option<Range<usize>> = None;
        while let Some((step, span)) = self.cursor.advance(&self.filter) {
            match (step, run.as_mut()) {
                (Step::Keep(_), Some(open)) => open.end = span.end,
                (Step::Keep(_), None) => run = Some(span),
                (Step::Skip(_), Some(_)) => break,
                (Step::Skip(_), None) => {}
            }
        }
        run
    }
}

/// Run `filter` over `input`, yielding the kept ranges.
pub fn apply_filter<T, F: Filter<T>>(filter: F, input: &[T]) -> Runs<'_, T, F> {
    Runs { cursor: Cursor::new(input), filter }
}

/// Run `filter` over `input` and collect the kept elements.
#[cfg(feature = "alloc")]
pub fn filtered<T: Clone, F: Filter<T>>(filter: F, input: &[T]) -> Vec<T> {
    apply_filter(filter, input)
        .flat_map(|run| input[run].iter().cloned())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
