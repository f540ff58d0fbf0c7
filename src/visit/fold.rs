//! Visitors that fold a name into a fixed-size value.

use crate::error::{Error, Result};
use crate::primitives::const_utils::hash33_xor;
use crate::type_info::TypeInfo;

use super::Visitor;

/// Counts name bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Length(usize);

impl Length {
    pub fn finish(self) -> usize {
        self.0
    }
}

impl Visitor for Length {
    fn visit_literal(self, run: &str) -> Self {
        Self(self.0 + run.len())
    }
}

/// Rolling hash of the name bytes: `h' = (h * 33) ^ byte`, wrapping, seed 0.
///
/// Depends only on the bytes, not on how they are split into runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hash(u64);

impl Hash {
    pub const fn with_seed(seed: u64) -> Self {
        Self(seed)
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Visitor for Hash {
    fn visit_literal(self, run: &str) -> Self {
        Self(hash33_xor(self.0, run.as_bytes()))
    }
}

/// Copies the name into a `CAP`-byte buffer.
///
/// A run that does not fit is dropped whole, and the bytes it would have
/// needed are still counted, so [`finish`](Sequence::finish) can report the
/// required capacity.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<const CAP: usize> {
    buf: [u8; CAP],
    len: usize,
    required: usize,
}

impl<const CAP: usize> Sequence<CAP> {
    pub const fn new() -> Self {
        Self { buf: [0; CAP], len: 0, required: 0 }
    }

    /// Name of `T`, or [`Error::CapacityExceeded`].
    pub fn of<T: TypeInfo + ?Sized>() -> Result<Self> {
        T::name_tokens(Self::new()).finish()
    }

    /// `Ok(self)` if every run fit.
    pub fn finish(self) -> Result<Self> {
        if self.required > CAP {
            Err(Error::CapacityExceeded { capacity: CAP, required: self.required })
        } else {
            Ok(self)
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(_) => unreachable!(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const CAP: usize> Default for Sequence<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Visitor for Sequence<CAP> {
    fn visit_literal(mut self, run: &str) -> Self {
        let end = self.len + run.len();
        self.required += run.len();
        if self.required == end && end <= CAP {
            self.buf[self.len..end].copy_from_slice(run.as_bytes());
            self.len = end;
        }
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let len = Length::default().visit_literal("uint8_t").visit_literal("*").finish();
        assert_eq!(len, 8);
    }

    #[test]
    fn test_hash_ignores_run_boundaries() {
        let split = Hash::default().visit_literal("uint").visit_literal("8_t").finish();
        let whole = Hash::default().visit_literal("uint8_t").finish();
        assert_eq!(split, whole);
        assert_eq!(Hash::default().finish(), 0);
        assert_eq!(Hash::with_seed(5).visit_literal("").finish(), 5);
    }

    #[test]
    fn test_sequence_capacity() {
        let fits = Sequence::<8>::new().visit_literal("uint8_t").visit_literal("*");
        assert_eq!(fits.finish().map(|s| s.len()), Ok(8));

        let full = Sequence::<8>::new()
            .visit_literal("uint8_t")
            .visit_literal("[")
            .visit_literal("]");
        assert_eq!(full.as_str(), "uint8_t[");
        assert_eq!(
            full.finish().map(|s| s.len()),
            Err(Error::CapacityExceeded { capacity: 8, required: 9 })
        );
    }

    #[test]
    fn test_sequence_stops_after_overflow() {
        // "f" would fit on its own but must not follow a dropped run
        let seq = Sequence::<4>::new()
            .visit_literal("ab")
            .visit_literal("cde")
            .visit_literal("f");
        assert_eq!(seq.as_str(), "ab");
        assert!(seq.finish().is_err());
    }
}
