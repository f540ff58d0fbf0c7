//! Pointers, references, arrays and slices.
//!
//! | Rust       | Tokens                              |
//! |------------|-------------------------------------|
//! | `*mut U`   | nested `U`, `"*"`                   |
//! | `*const U` | nested `Const<U>`, `"*"`            |
//! | `&mut U`   | nested `U`, `"&"`                   |
//! | `&U`       | nested `Const<U>`, `"&"`            |
//! | `[U; N]`   | nested `U`, `"["`, `N`, `"]"`       |
//! | `[U]`      | nested `U`, `"["`, `"]"`            |

use crate::primitives::fixed_str::Digits;
use crate::visit::Visitor;

use super::qualifier::Const;
use super::TypeInfo;

impl<T: TypeInfo + ?Sized> TypeInfo for *mut T {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<T>().visit_literal("*")
    }
}

impl<T: TypeInfo + ?Sized> TypeInfo for *const T {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<Const<T>>().visit_literal("*")
    }
}

impl<T: TypeInfo + ?Sized> TypeInfo for &mut T {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<T>().visit_literal("&")
    }
}

impl<T: TypeInfo + ?Sized> TypeInfo for &T {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<Const<T>>().visit_literal("&")
    }
}

impl<T: TypeInfo, const N: usize> TypeInfo for [T; N] {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        let extent = const { Digits::new(N) };
        visitor
            .visit_nested::<T>()
            .visit_literal("[")
            .visit_literal(extent.as_str())
            .visit_literal("]")
    }
}

impl<T: TypeInfo> TypeInfo for [T] {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_nested::<T>().visit_literal("[").visit_literal("]")
    }
}
