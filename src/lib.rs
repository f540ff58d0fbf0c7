#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and cached calibration
// - alloc: enables String/Vec visitors in no_std
// - derive: re-exports #[derive(TypeInfo)]

//! # declname
//!
//! Canonical, platform-stable type names in C declarator order.
//!
//! ```text
//! u8                      -> uint8_t
//! *mut Foo                -> app::Foo*
//! &u32                    -> uint32_t const&
//! ConstVolatile<bar::Baz> -> app::bar::Baz const volatile
//! [*mut Quux; 255]        -> app::bar::Quux*[255]
//! ```
//!
//! ## Architecture
//!
//! A name is a rope of tokens: literal runs and nested types. Everything
//! except the compiler's name for a user type is known at compile time. That
//! one string comes from `core::any::type_name`, measured against sentinel
//! types once and then sliced, never copied.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Seq (concat, range, gather), Filter cursor, FixedStr, Digits   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Signature                                               |
//! |  - Probe<T>, Calibration (prefix/suffix), class_offset            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Scope                                                   |
//! |  - AnonymousScope marker, normalize, TypeName runs                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: TypeInfo + Visitors                                     |
//! |  - Shapes (numeric, pointer, reference, array, cv), fold visitors |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use declname::prelude::*;
//!
//! #[derive(TypeInfo)]
//! struct Foo;
//!
//! assert_eq!(name_of::<u8>(), "uint8_t");
//! assert_eq!(name_of::<[*const f32; 4]>(), "float32_t const*[4]");
//! assert!(name_of::<*mut Foo>().ends_with("::Foo*"));
//! assert_eq!(name_len::<u8>(), 7);
//! ```

// Allow `::declname` to work inside the crate itself
extern crate self as declname;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Signature Probing
// =============================================================================
pub mod signature;

// =============================================================================
// Layer 2: Scope Normalization
// =============================================================================
pub mod scope;

// =============================================================================
// Layer 3: Typed Name Synthesis
// =============================================================================
pub mod type_info;
pub mod visit;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{CalibrationError, Error, Result, ScopeError};
pub use scope::{get_templatename, get_typename, normalize, AnonymousScope, TypeName};
pub use signature::{calibration, Calibration, Signature};
pub use type_info::{
    class_tokens, Char16, Char8, ClassType, Const, ConstVolatile, CvQualifiers, RvalueRef, TypeInfo,
    Volatile,
};
pub use visit::{display, from_fn, name_hash, name_len, write_name, Visitor};

#[cfg(feature = "alloc")]
pub use visit::name_of;

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::TypeInfo;

/// Implement `TypeInfo` as a class type for types declared elsewhere in
/// the crate, e.g. where a derive is not possible.
///
/// ```
/// use declname::prelude::*;
///
/// mod ffi {
///     pub struct Handle(pub *mut u8);
/// }
/// declname::impl_class_type!(ffi::Handle);
///
/// assert!(name_of::<&mut ffi::Handle>().ends_with("::ffi::Handle&"));
/// ```
///
/// Generic types list their parameters first. Bounds, including `?Sized`,
/// go in a trailing `where` clause:
///
/// ```
/// use declname::prelude::*;
///
/// pub struct Cell<T>(T);
/// declname::impl_class_type!(<T> Cell<T>);
///
/// pub struct Boxed<T: ?Sized + 'static>(&'static T);
/// declname::impl_class_type!(<T> Boxed<T> where T: ?Sized + 'static);
///
/// assert!(name_of::<Cell<u8>>().ends_with("Cell<u8>"));
/// assert!(name_of::<Boxed<[u8]>>().ends_with("Boxed<[u8]>"));
/// ```
#[macro_export]
macro_rules! impl_class_type {
    (<$($param:ident),+ $(,)?> $ty:ty $(where $($pred:tt)+)?) => {
        impl<$($param),+> $crate::type_info::ClassType for $ty $(where $($pred)+)? {}

        impl<$($param),+> $crate::type_info::TypeInfo for $ty $(where $($pred)+)? {
            fn name_tokens<V: $crate::visit::Visitor>(visitor: V) -> V {
                $crate::type_info::class_tokens::<Self, V>(visitor)
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::type_info::ClassType for $ty {}

            impl $crate::type_info::TypeInfo for $ty {
                fn name_tokens<V: $crate::visit::Visitor>(visitor: V) -> V {
                    $crate::type_info::class_tokens::<Self, V>(visitor)
                }
            }
        )+
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::type_info::{
        class_tokens, Char16, Char8, ClassType, Const, ConstVolatile, RvalueRef, TypeInfo, Volatile,
    };
    pub use crate::visit::{
        display, from_fn, name_hash, name_len, write_name, Hash, Length, Sequence, StreamOut, Visitor,
    };
    pub use crate::scope::{get_templatename, get_typename};

    #[cfg(feature = "alloc")]
    pub use crate::visit::{name_of, Runs, Stringify};

    #[cfg(feature = "derive")]
    pub use macros::TypeInfo;
}
