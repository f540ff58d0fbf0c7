//! # Layer 2: Scope Normalization
//!
//! Items declared inside an unnamed scope, typically `const _: () = { ... }`,
//! get a compiler-chosen path segment in their synthesized name. That segment
//! is the *anonymous-scope marker*. It is not stable across compilers, so it
//! is measured the same way the signature layout is: a sentinel `Crib` lives
//! in such a scope right here, and everything in its name between
//! `declname::scope::` and `Crib` is the marker.
//!
//! ```text
//! declname::scope::_::Crib      marker = "_::"
//! declname::scope::Crib         marker = ""
//! ```
//!
//! [`normalize`] then removes every occurrence of the marker that starts a
//! path segment, so `app::type_::Foo` is left alone while
//! `app::_::Foo` becomes `app::Foo`. The result is a [`TypeName`]: the list of runs between markers,
//! borrowed from the compiler's string.

use core::fmt;
use core::iter::FusedIterator;

#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::error::ScopeError;
use crate::primitives::filter::{apply_filter, RemoveSegment, Runs};
use crate::signature::{template_prefix, try_typename_literal};

pub(crate) struct Anchor;

/// Exposes a type declared in an unnamed scope.
pub(crate) trait Sentinel {
    type Crib;
}

const _: () = {
    pub struct Crib;

    impl Sentinel for Anchor {
        type Crib = Crib;
    }
};

const SCOPE_PREFIX: &str = concat!(module_path!(), "::");
const CRIB_SUFFIX: &str = "Crib";

// =============================================================================
// AnonymousScope
// =============================================================================

/// The marker the compiler inserts for an anonymous scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnonymousScope {
    marker: &'static str,
}

impl AnonymousScope {
    /// Strip the owning-module prefix and the `Crib` suffix from `sentinel`.
    pub fn from_sentinel(sentinel: &'static str) -> Result<Self, ScopeError> {
        sentinel
            .strip_prefix(SCOPE_PREFIX)
            .and_then(|rest| rest.strip_suffix(CRIB_SUFFIX))
            .map(|marker| Self { marker })
            .ok_or(ScopeError::UnexpectedSentinelName {
                name: sentinel,
                prefix: SCOPE_PREFIX,
                suffix: CRIB_SUFFIX,
            })
    }

    /// Measure the marker of the running compiler.
    pub fn probe() -> Result<Self, ScopeError> {
        let result = try_typename_literal::<<Anchor as Sentinel>::Crib>()
            .map_err(ScopeError::from)
            .and_then(Self::from_sentinel);
        match &result {
            Ok(scope) => tracing::debug!(marker = scope.marker, "measured anonymous scope marker"),
            Err(e) => tracing::warn!(error = %e, "anonymous scope marker could not be measured"),
        }
        result
    }

    pub const fn marker(&self) -> &'static str {
        self.marker
    }

    pub const fn marker_bytes(&self) -> &'static [u8] {
        self.marker.as_bytes()
    }

    /// Remove this marker from `name`.
    pub fn normalize(&self, name: &'static str) -> TypeName {
        TypeName { raw: name, marker: self.marker }
    }
}

/// Marker for this build.
#[cfg(feature = "std")]
pub fn try_anonymous_scope() -> Result<AnonymousScope, ScopeError> {
    static SCOPE: OnceLock<Result<AnonymousScope, ScopeError>> = OnceLock::new();
    *SCOPE.get_or_init(AnonymousScope::probe)
}

/// Marker for this build.
#[cfg(not(feature = "std"))]
pub fn try_anonymous_scope() -> Result<AnonymousScope, ScopeError> {
    AnonymousScope::probe()
}

/// Marker for this build.
///
/// # Panics
///
/// If the compiler does not spell the sentinel as `<module>::<marker>Crib`.
pub fn anonymous_scope() -> AnonymousScope {
    match try_anonymous_scope() {
        Ok(scope) => scope,
        Err(e) => panic!("{e}"),
    }
}

/// Remove the anonymous-scope marker of this build from `name`.
pub fn normalize(name: &'static str) -> TypeName {
    anonymous_scope().normalize(name)
}

/// Scope-normalized bare name of `T`.
pub fn get_typename<T: ?Sized>() -> TypeName {
    normalize(crate::signature::typename_literal::<T>())
}

/// Scope-normalized bare name of `T` up to its first `<`.
pub fn get_templatename<T: ?Sized>() -> TypeName {
    normalize(template_prefix(crate::signature::typename_literal::<T>()))
}

// =============================================================================
// TypeName
// =============================================================================

/// A bare name with every anonymous-scope marker skipped.
///
/// Nothing is copied: the name is a sequence of [`runs`](TypeName::runs)
/// into the compiler's string.
#[derive(Clone, Copy)]
pub struct TypeName {
    raw: &'static str,
    marker: &'static str,
}

impl TypeName {
    /// The name before normalization.
    pub const fn raw(&self) -> &'static str {
        self.raw
    }

    pub const fn marker(&self) -> &'static str {
        self.marker
    }

    /// Slices of the raw name between marker occurrences, in order.
    pub fn runs(&self) -> NameRuns {
        NameRuns {
            raw: self.raw,
            ranges: apply_filter(self.marker_filter(), self.raw.as_bytes()),
        }
    }

    /// Byte length after normalization.
    pub fn len(&self) -> usize {
        self.runs().map(str::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs().next().is_none()
    }

    /// The normalized name as an owned string.
    #[cfg(feature = "alloc")]
    pub fn to_normalized_string(&self) -> alloc::string::String {
        self.runs().collect()
    }

    fn marker_filter(&self) -> RemoveSegment<'static> {
        RemoveSegment::new(self.marker.as_bytes())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.runs().try_for_each(|run| f.write_str(run))
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        self.runs().try_for_each(|run| write!(f, "{}", run.escape_debug()))?;
        f.write_str("\"")
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &TypeName) -> bool {
        self.runs().flat_map(str::bytes).eq(other.runs().flat_map(str::bytes))
    }
}

impl Eq for TypeName {}

impl PartialEq<str> for TypeName {
    fn eq(&self, other: &str) -> bool {
        self.runs().flat_map(str::bytes).eq(other.bytes())
    }
}

impl PartialEq<&str> for TypeName {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

/// Iterator over the runs of a [`TypeName`].
pub struct NameRuns {
    raw: &'static str,
    ranges: Runs<'static, u8, RemoveSegment<'static>>,
}

impl Iterator for NameRuns {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let range = self.ranges.next()?;
        Some(&self.raw[range])
    }
}

impl FusedIterator for NameRuns {}

// =============================================================================
// Tests
// =============================================================================
