//! Visitors that stream the name somewhere else.

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

use crate::error::{Error, Result};

use super::Visitor;

/// Writes every run to a [`fmt::Write`] sink. The first error sticks.
#[derive(Debug)]
pub struct StreamOut<W> {
    sink: W,
    status: fmt::Result,
}

impl<W: fmt::Write> StreamOut<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, status: Ok(()) }
    }

    pub fn finish(self) -> Result<W> {
        self.status.map_err(Error::from)?;
        Ok(self.sink)
    }
}

impl<W: fmt::Write> Visitor for StreamOut<W> {
    fn visit_literal(mut self, run: &str) -> Self {
        if self.status.is_ok() {
            self.status = self.sink.write_str(run);
        }
        self
    }
}

/// Writes every run to a [`std::io::Write`] sink. The first error sticks.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoStreamOut<W> {
    sink: W,
    error: Option<std::io::Error>,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoStreamOut<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, error: None }
    }

    pub fn finish(self) -> std::io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.sink),
        }
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Visitor for IoStreamOut<W> {
    fn visit_literal(mut self, run: &str) -> Self {
        if self.error.is_none() {
            self.error = self.sink.write_all(run.as_bytes()).err();
        }
        self
    }
}

/// Appends the name to a `String`.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stringify(String);

#[cfg(feature = "alloc")]
impl Stringify {
    pub fn finish(self) -> String {
        self.0
    }
}

#[cfg(feature = "alloc")]
impl Visitor for Stringify {
    fn visit_literal(mut self, run: &str) -> Self {
        self.0.push_str(run);
        self
    }
}

/// Collects the literal runs themselves, nested types flattened.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Runs(Vec<String>);

#[cfg(feature = "alloc")]
impl Runs {
    pub fn finish(self) -> Vec<String> {
        self.0
    }
}

#[cfg(feature = "alloc")]
impl Visitor for Runs {
    fn visit_literal(mut self, run: &str) -> Self {
        self.0.push(String::from(run));
        self
    }
}

/// Calls a closure for every run.
pub struct FromFn<F>(F);

/// Visitor from a closure.
///
/// ```
/// use declname::prelude::*;
///
/// let mut runs = 0;
/// <[u8; 2]>::name_tokens(from_fn(|_: &str| runs += 1));
/// assert_eq!(runs, 4);
/// ```
pub fn from_fn<F: FnMut(&str)>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F> FromFn<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: FnMut(&str)> Visitor for FromFn<F> {
    fn visit_literal(mut self, run: &str) -> Self {
        (self.0)(run);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
