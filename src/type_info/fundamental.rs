//! Fundamental types.
//!
//! Numeric types are named by category and bit width, never by the
//! platform's spelling: `usize` is `uint64_t` on a 64-bit target. Every name
//! is a [`FixedStr`] assembled at compile time.

use crate::primitives::const_utils::numeric_name_len;
use crate::primitives::fixed_str::{numeric_name, FixedStr};
use crate::visit::Visitor;

use super::TypeInfo;

/// An 8-bit character code unit, named `char8_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Char8(pub u8);

/// A 16-bit character code unit, named `char16_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Char16(pub u16);

const fn width_of<T>() -> usize {
    core::mem::size_of::<T>() * 8
}

macro_rules! impl_numeric {
    ($category:literal => $($ty:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = concat!("Fixed-width name of `", stringify!($ty), "`.")]
                pub const [<$ty:upper _NAME>]: FixedStr<{ numeric_name_len($category, width_of::<$ty>()) }> =
                    numeric_name($category, width_of::<$ty>());

                impl TypeInfo for $ty {
                    fn name_tokens<V: Visitor>(visitor: V) -> V {
                        visitor.visit_literal([<$ty:upper _NAME>].as_str())
                    }
                }
            )+
        }
    };
}

impl_numeric!("uint" => u8, u16, u32, u64, u128, usize);
impl_numeric!("int" => i8, i16, i32, i64, i128, isize);
impl_numeric!("float" => f32, f64);
impl_numeric!("char" => Char8, Char16, char);

impl TypeInfo for bool {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_literal("bool")
    }
}

impl TypeInfo for () {
    fn name_tokens<V: Visitor>(visitor: V) -> V {
        visitor.visit_literal("void")
    }
}

// =============================================================================
// Tests
// =============================================================================
