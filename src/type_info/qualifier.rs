//! Qualifier descriptors.
//!
//! Rust has no cv-qualified or rvalue-reference types, so these zero-sized
//! markers stand in for them. Nesting descriptors merges their qualifiers:
//!
//! ```
//! use declname::prelude::*;
//!
//! assert_eq!(name_of::<Volatile<Const<u8>>>(), "uint8_t const volatile");
//! assert_eq!(name_of::<Const<Volatile<u8>>>(), "uint8_t const volatile");
//! assert_eq!(name_of::<Const<Const<u8>>>(), "uint8_t const");
//! ```

use core::marker::PhantomData;

use crate::visit::Visitor;

use super::{CvQualifiers, TypeInfo};

macro_rules! qualifier_descriptor {
    ($(#[$meta:meta])* $name:ident => $own:expr) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized>(PhantomData<T>);

        impl<T: TypeInfo + ?Sized> TypeInfo for $name<T> {
            fn name_tokens<V: Visitor>(visitor: V) -> V {
                T::qualified_tokens(visitor, $own)
            }

            fn qualified_tokens<V: Visitor>(visitor: V, qualifiers: CvQualifiers) -> V {
                T::qualified_tokens(visitor, qualifiers | $own)
            }
        }
    };
}

qualifier_descriptor! {
    /// `T const`.
    Const => CvQualifiers::CONST
}

qualifier_descriptor! {
    /// `T volatile`.
    Volatile => CvQualifiers::VOLATILE
}

qualifier_descriptor! {
    /// `T const volatile`.
    ConstVolatile => CvQualifiers::CONST.union(CvQualifiers::VOLATILE)
}

/// `T&&`.
pub struct RvalueRef<T: ?Sized>(PhantomData<T>);

impl<T: TypeInfo + ?Sized> TypeInfo for RvalueRef<T> {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<T>().visit_literal("&&")
    }
}
