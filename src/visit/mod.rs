//! # Visitors
//!
//! A [`Visitor`] folds the token rope of a [`TypeInfo`] into a result. It
//! is moved through the fold by value, so a visitor is just its state:
//!
//! ```text
//! [*mut Foo; 3]::name_tokens(v)
//!   = v.visit_nested::<*mut Foo>()   // -> Foo::name_tokens(..).visit_literal("*")
//!      .visit_literal("[")
//!      .visit_literal("3")
//!      .visit_literal("]")
//! ```
//!
//! ## Built-in visitors
//!
//! | Visitor | Result | Needs |
//! |---------|--------|-------|
//! | [`Length`] | byte count | - |
//! | [`Hash`] | rolling `u64` hash | - |
//! | [`Sequence`] | fixed-capacity buffer | - |
//! | [`StreamOut`] | `core::fmt::Write` sink | - |
//! | [`IoStreamOut`] | `std::io::Write` sink | `std` |
//! | [`Stringify`] | `String` | `alloc` |
//! | [`Runs`] | `Vec<String>` of literal runs | `alloc` |
//! | [`FromFn`] | closure | - |

mod fold;
mod sink;

pub use fold::{Hash, Length, Sequence};
pub use sink::{FromFn, StreamOut, from_fn};

#[cfg(feature = "alloc")]
pub use sink::{Runs, Stringify};

#[cfg(feature = "std")]
pub use sink::IoStreamOut;

use core::fmt;
use core::marker::PhantomData;

use crate::error::Result;
use crate::type_info::TypeInfo;

/// Folds name tokens into a result.
pub trait Visitor: Sized {
    /// Consume one literal run.
    fn visit_literal(self, run: &str) -> Self;

    /// Consume a nested type. Descends into `T`'s tokens unless overridden.
    fn visit_nested<T: TypeInfo + ?Sized>(self) -> Self {
        T::name_tokens(self)
    }
}

// =============================================================================
// Convenience entry points
// =============================================================================

/// Name of `T` as a `String`.
#[cfg(feature = "alloc")]
pub fn name_of<T: TypeInfo + ?Sized>() -> alloc::string::String {
    T::name_tokens(Stringify::default()).finish()
}

/// Byte length of `T`'s name.
pub fn name_len<T: TypeInfo + ?Sized>() -> usize {
    T::name_tokens(Length::default()).finish()
}

/// Rolling hash of `T`'s name.
pub fn name_hash<T: TypeInfo + ?Sized>() -> u64 {
    T::name_tokens(Hash::default()).finish()
}

/// Write `T`'s name to `sink`.
pub fn write_name<T: TypeInfo + ?Sized, W: fmt::Write>(sink: W) -> Result<W> {
    T::name_tokens(StreamOut::new(sink)).finish()
}

/// `T`'s name as a `Display` value.
///
/// ```
/// use declname::prelude::*;
///
/// assert_eq!(format!("{}", display::<*mut [i32]>()), "int32_t[]*");
/// ```
pub fn display<T: TypeInfo + ?Sized>() -> Display<T> {
    Display(PhantomData)
}

/// See [`display`].
pub struct Display<T: ?Sized>(PhantomData<T>);

impl<T: TypeInfo + ?Sized> fmt::Display for Display<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::name_tokens(StreamOut::new(f)).finish().map(drop).map_err(|_| fmt::Error)
    }
}

impl<T: TypeInfo + ?Sized> fmt::Debug for Display<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
