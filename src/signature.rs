//! # Layer 1: Signature Probing
//!
//! Rust names a user type through `core::any::type_name`, which is not a
//! `const fn`. Instead of trusting its exact layout, every name is read out of
//! the name of a wrapper, `Probe<T>`, and the wrapper's noise is measured once
//! against sentinel types whose names are known:
//!
//! ```text
//! declname::signature::Probe<()>
//! |<------- prefix -------->|  |<- suffix
//!                            ^^
//!                         sentinel
//! ```
//!
//! The prefix and suffix lengths are the same for every `T` within one build,
//! so the bare name of any `T` is a slice of its own probe signature.
//!
//! ## Calibration
//!
//! 1. Probe `()` and search for `(` from the statically known hint offset
//!    (the length of `declname::signature::Probe`).
//! 2. The whole sentinel must follow, or calibration fails.
//! 3. Probe `u8` the same way; both must agree on prefix and suffix.
//!
//! With the `std` feature the result is computed once and cached in a
//! `OnceLock`. Without it, the (pure) probe is recomputed on each use.

use core::any::type_name;
use core::marker::PhantomData;

#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::error::CalibrationError;
use crate::primitives::const_utils::{find_offset, starts_with_at};

/// Wrapper whose synthesized name carries the name of `T`.
pub struct Probe<T: ?Sized>(PhantomData<T>);

/// Offset at which the wrapped type's name can start at the earliest.
pub const PREFIX_HINT: usize = concat!(module_path!(), "::Probe").len();

/// First sentinel: derives the layout.
pub const SENTINEL: &str = "()";
/// Second sentinel: verifies it.
pub const CHECK_SENTINEL: &str = "u8";

// =============================================================================
// Signature
// =============================================================================

/// Raw compiler-synthesized name of `Probe<T>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    raw: &'static str,
}

impl Signature {
    pub fn of<T: ?Sized>() -> Self {
        Self { raw: type_name::<Probe<T>>() }
    }

    /// Wrap an arbitrary string, e.g. a signature captured elsewhere.
    pub const fn from_raw(raw: &'static str) -> Self {
        Self { raw }
    }

    pub const fn as_str(&self) -> &'static str {
        self.raw
    }

    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The bare type name under `calibration`, without any class keyword.
    ///
    /// Fails when the signature is too short for the calibration or the
    /// offsets do not fall on character boundaries.
    pub fn bare(&self, calibration: Calibration) -> Result<&'static str, CalibrationError> {
        let raw = self.raw;
        let start = calibration.prefix_length + class_offset(raw, calibration.prefix_length);
        raw.len()
            .checked_sub(calibration.suffix_length)
            .and_then(|end| raw.get(start..end))
            .ok_or(CalibrationError::OutOfRange {
                signature: raw,
                prefix_length: calibration.prefix_length,
                suffix_length: calibration.suffix_length,
            })
    }
}

/// Raw signature of `T`.
pub fn signature<T: ?Sized>() -> Signature {
    Signature::of::<T>()
}

// =============================================================================
// Calibration
// =============================================================================

/// Prefix and suffix lengths around a probed type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Calibration {
    pub prefix_length: usize,
    pub suffix_length: usize,
}

impl Calibration {
    /// Locate `sentinel` in `raw`, searching from `hint`.
    ///
    /// Only the first occurrence of the sentinel's leading byte is
    /// considered; the rest of the sentinel must follow it.
    pub fn derive(raw: &'static str, sentinel: &'static str, hint: usize) -> Result<Self, CalibrationError> {
        let not_found = CalibrationError::SentinelNotFound { sentinel, signature: raw, hint };
        let bytes = raw.as_bytes();
        let Some(&lead) = sentinel.as_bytes().first() else {
            return Err(not_found);
        };
        match find_offset(bytes, hint, lead) {
            Some(prefix) if starts_with_at(bytes, prefix, sentinel.as_bytes()) => Ok(Self {
                prefix_length: prefix,
                suffix_length: raw.len() - prefix - sentinel.len(),
            }),
            _ => Err(not_found),
        }
    }

    /// Check that `raw`, the signature of `sentinel`, has the same layout.
    pub fn verify(self, raw: &'static str, sentinel: &'static str, hint: usize) -> Result<Self, CalibrationError> {
        let other = Self::derive(raw, sentinel, hint)?;
        if other == self {
            Ok(self)
        } else {
            Err(CalibrationError::Inconsistent {
                sentinel,
                expected_prefix: self.prefix_length,
                expected_suffix: self.suffix_length,
                found_prefix: other.prefix_length,
                found_suffix: other.suffix_length,
            })
        }
    }

    /// Calibrate against the running compiler.
    pub fn probe() -> Result<Self, CalibrationError> {
        let result = Self::derive(Signature::of::<()>().as_str(), SENTINEL, PREFIX_HINT)
            .and_then(|c| c.verify(Signature::of::<u8>().as_str(), CHECK_SENTINEL, PREFIX_HINT));
        match &result {
            Ok(c) => tracing::debug!(
                prefix_length = c.prefix_length,
                suffix_length = c.suffix_length,
                "calibrated type name signature"
            ),
            Err(e) => tracing::warn!(error = %e, "type name signature calibration failed"),
        }
        result
    }
}

/// Calibration for this build.
#[cfg(feature = "std")]
pub fn try_calibration() -> Result<Calibration, CalibrationError> {
    static CALIBRATION: OnceLock<Result<Calibration, CalibrationError>> = OnceLock::new();
    *CALIBRATION.get_or_init(Calibration::probe)
}

/// Calibration for this build.
#[cfg(not(feature = "std"))]
pub fn try_calibration() -> Result<Calibration, CalibrationError> {
    Calibration::probe()
}

/// Calibration for this build.
///
/// # Panics
///
/// If the compiler does not lay out type names the way the probe expects.
pub fn calibration() -> Calibration {
    match try_calibration() {
        Ok(c) => c,
        Err(e) => panic!("{e}"),
    }
}

/// Length of a class keyword (`"struct "` or `"class "`) at `raw[prefix..]`,
/// or 0. Some C-family toolchains put one in front of every class name.
pub const fn class_offset(raw: &str, prefix: usize) -> usize {
    let bytes = raw.as_bytes();
    if prefix + 6 < bytes.len() && bytes[prefix + 6] == b' ' && starts_with_at(bytes, prefix, b"struct ") {
        7
    } else if prefix + 5 < bytes.len() && bytes[prefix + 5] == b' ' && starts_with_at(bytes, prefix, b"class ") {
        6
    } else {
        0
    }
}

// =============================================================================
// Bare names
// =============================================================================

/// Bare name of `T` as the compiler spells it.
///
/// # Panics
///
/// If calibration fails, see [`calibration`].
pub fn typename_literal<T: ?Sized>() -> &'static str {
    match try_typename_literal::<T>() {
        Ok(name) => name,
        Err(e) => panic!("{e}"),
    }
}

/// Like [`typename_literal`], reporting calibration failures.
pub fn try_typename_literal<T: ?Sized>() -> Result<&'static str, CalibrationError> {
    Signature::of::<T>().bare(try_calibration()?)
}

pub fn typename_length<T: ?Sized>() -> usize {
    typename_literal::<T>().len()
}

pub fn typename_sequence<T: ?Sized>() -> &'static [u8] {
    typename_literal::<T>().as_bytes()
}

/// Bare name of `T` up to its first `<`.
///
/// Types nested inside generic types (`Outer<A>::Inner`) are cut at the
/// outer argument list.
pub fn templatename_literal<T: ?Sized>() -> &'static str {
    template_prefix(typename_literal::<T>())
}

/// `name` up to its first `<`, or all of it.
pub const fn template_prefix(name: &str) -> &str {
    let Some(end) = find_offset(name.as_bytes(), 0, b'<') else {
        return name;
    };
    match core::str::from_utf8(name.as_bytes().split_at(end).0) {
        Ok(head) => head,
        Err(_) => unreachable!(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const _: () = assert!(PREFIX_HINT == "declname::signature::Probe".len());
    const _: () = assert!(class_offset("<struct Foo>", 1) == 7);

    #[test]
    fn test_derive_rust_layout() {
        let c = Calibration::derive("declname::signature::Probe<()>", "()", 26).unwrap();
        assert_eq!(c, Calibration { prefix_length: 27, suffix_length: 1 });
        let verified = c.verify("declname::signature::Probe<u8>", "u8", 26);
        assert_eq!(verified, Ok(c));
    }

    #[test]
    fn test_derive_skips_text_before_hint() {
        // The `(` of `probe()` comes before the hint and must be ignored
        let raw = "const char* probe() [T = ()]";
        let c = Calibration::derive(raw, "()", "const char* probe()".len()).unwrap();
        assert_eq!(c, Calibration { prefix_length: 25, suffix_length: 1 });
        assert!(c.verify("const char* probe() [T = u8]", "u8", 19).is_ok());
    }

    #[test]
    fn test_derive_failures() {
        assert!(matches!(
            Calibration::derive("declname::signature::Probe<u8>", "()", 26),
            Err(CalibrationError::SentinelNotFound { hint: 26, .. })
        ));
        // Leading byte found, but the rest of the sentinel does not follow
        assert!(matches!(
            Calibration::derive("Probe<(u8)>", "()", 5),
            Err(CalibrationError::SentinelNotFound { .. })
        ));

        let c = Calibration { prefix_length: 25, suffix_length: 1 };
        assert_eq!(
            c.verify("const char* probe() [T = u8 ]", "u8", 19),
            Err(CalibrationError::Inconsistent {
                sentinel: "u8",
                expected_prefix: 25,
                expected_suffix: 1,
                found_prefix: 25,
                found_suffix: 2,
            })
        );
    }

    #[test]
    fn test_class_offset() {
        assert_eq!(class_offset("[T = struct Foo]", 5), 7);
        assert_eq!(class_offset("[T = class Foo]", 5), 6);
        assert_eq!(class_offset("[T = Foo]", 5), 0);
        // Rust declarators with a space at the keyword's position
        assert_eq!(class_offset("Probe<*const u8>", 6), 0);
        assert_eq!(class_offset("Probe<&mut Foo>", 6), 0);
        assert_eq!(class_offset("Probe<u8>", 6), 0);
    }

    #[test]
    fn test_bare_strips_class_keyword() {
        let c = Calibration { prefix_length: 5, suffix_length: 1 };
        assert_eq!(Signature::from_raw("[T = struct ns::Foo]").bare(c), Ok("ns::Foo"));
        assert_eq!(Signature::from_raw("[T = class ns::Foo]").bare(c), Ok("ns::Foo"));
        assert_eq!(Signature::from_raw("[T = int]").bare(c), Ok("int"));
    }

    #[test]
    fn test_bare_rejects_foreign_layouts() {
        let rust = Calibration { prefix_length: 27, suffix_length: 1 };
        assert_eq!(
            Signature::from_raw("[T = int]").bare(rust),
            Err(CalibrationError::OutOfRange {
                signature: "[T = int]",
                prefix_length: 27,
                suffix_length: 1,
            })
        );
        let long_suffix = Calibration { prefix_length: 0, suffix_length: 40 };
        assert!(Signature::from_raw("[T = int]").bare(long_suffix).is_err());
        // Offset 6 falls inside the two-byte `é`
        let mid_char = Calibration { prefix_length: 6, suffix_length: 1 };
        assert!(Signature::from_raw("[T = é]").bare(mid_char).is_err());
        assert_eq!(Signature::from_raw("").bare(Calibration { prefix_length: 0, suffix_length: 0 }), Ok(""));
    }

    #[test]
    fn test_running_compiler() {
        let c = Calibration::probe().unwrap();
        assert_eq!(try_calibration(), Ok(c));
        assert_eq!(c.prefix_length, PREFIX_HINT + 1);
        assert_eq!(typename_literal::<u8>(), "u8");
        assert_eq!(typename_literal::<Probe<u8>>(), "declname::signature::Probe<u8>");
        assert_eq!(typename_length::<u16>(), 3);
        assert_eq!(typename_sequence::<bool>(), b"bool");
        assert_eq!(try_typename_literal::<i64>(), Ok("i64"));
    }

    #[test]
    fn test_templatename() {
        assert_eq!(templatename_literal::<Probe<u8>>(), "declname::signature::Probe");
        assert_eq!(templatename_literal::<u32>(), "u32");
        assert_eq!(template_prefix("a::B<c::D<e>>"), "a::B");
        assert_eq!(template_prefix(""), "");
    }
}
