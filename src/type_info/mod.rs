//! # Layer 3: Typed Name Synthesis
//!
//! [`TypeInfo`] describes the *shape* of a type as a rope of name tokens.
//! A token is either a literal run (`"*"`, `"[255]"`, `"uint8_t"`) or a
//! nested type, which the visitor may descend into. Tokens come out in C
//! declarator order: the pointee first, decorations after it.
//!
//! ```text
//! [*mut Quux; 255]
//!   ├── nested: *mut Quux
//!   │     ├── nested: Quux ──> "app::bar::Quux"
//!   │     └── "*"
//!   ├── "["
//!   ├── "255"
//!   └── "]"
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! type_info/
//! ├── fundamental.rs - Fixed-width numerics, bool, (), Char8, Char16
//! ├── compound.rs    - Pointers, references, arrays, slices
//! └── qualifier.rs   - Const, Volatile, ConstVolatile, RvalueRef
//! ```
//!
//! Class types opt in through `#[derive(TypeInfo)]` or [`impl_class_type!`].
//! Anything else, such as tuples, trait objects and function pointers, has
//! no `TypeInfo` impl and is rejected at compile time:
//!
//! ```compile_fail
//! use declname::prelude::*;
//!
//! let _ = name_of::<(u8, u16)>();
//! ```
//!
//! ```compile_fail
//! use declname::prelude::*;
//!
//! let _ = name_of::<fn(u8) -> u8>();
//! ```
//!
//! [`impl_class_type!`]: crate::impl_class_type

pub mod compound;
pub mod fundamental;
pub mod qualifier;

pub use fundamental::{Char16, Char8};
pub use qualifier::{Const, ConstVolatile, RvalueRef, Volatile};

use crate::scope::get_typename;
use crate::visit::Visitor;

/// Per-shape name descriptor.
pub trait TypeInfo {
    /// Feed the name tokens of `Self` to `visitor`, left to right.
    fn name_tokens<V: Visitor>(visitor: V) -> V;

    /// Tokens of `Self` with `qualifiers` applied.
    ///
    /// Qualifier descriptors override this to merge their own qualifiers
    /// into `qualifiers`, so that nested descriptors render once, in the
    /// canonical `const volatile` order.
    fn qualified_tokens<V: Visitor>(visitor: V, qualifiers: CvQualifiers) -> V {
        qualifiers.emit(visitor.visit_nested::<Self>())
    }
}

bitflags::bitflags! {
    /// Accumulated cv-qualifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CvQualifiers: u8 {
        const CONST = 1;
        const VOLATILE = 1 << 1;
    }
}

impl CvQualifiers {
    /// Emit `" const"` then `" volatile"`, each if present.
    pub fn emit<V: Visitor>(self, visitor: V) -> V {
        let visitor = if self.contains(Self::CONST) {
            visitor.visit_literal(" const")
        } else {
            visitor
        };
        if self.contains(Self::VOLATILE) {
            visitor.visit_literal(" volatile")
        } else {
            visitor
        }
    }
}

// =============================================================================
// Class types
// =============================================================================

/// Structs, enums and unions whose name is the scope-normalized name the
/// compiler gives them.
///
/// Implemented by `#[derive(TypeInfo)]` and [`impl_class_type!`].
///
/// [`impl_class_type!`]: crate::impl_class_type
pub trait ClassType {}

/// Tokens of a class type: its normalized name, one literal per run.
///
/// Only class types qualify:
///
/// ```compile_fail
/// use declname::prelude::*;
///
/// struct Plain;
/// let _ = class_tokens::<Plain, _>(Length::default());
/// ```
pub fn class_tokens<T: ClassType + ?Sized, V: Visitor>(visitor: V) -> V {
    get_typename::<T>()
        .runs()
        .fold(visitor, |visitor, run| visitor.visit_literal(run))
}
