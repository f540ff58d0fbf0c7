//! Procedural macros for declname
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(TypeInfo)]` | struct/enum/union | Name the type by its scope-normalized path |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(TypeInfo)]
//! struct Foo;
//!
//! assert!(name_of::<*mut Foo>().ends_with("::Foo*"));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod user;

/// Derive `TypeInfo` (and the `ClassType` marker) for a struct, enum or union.
///
/// The name is the one the compiler gives the type, with anonymous-scope
/// segments removed. Generic parameters are carried through unchanged and
/// need no extra bounds.
///
/// ```ignore
/// #[derive(TypeInfo)]
/// struct Wrapper<T>(T);
///
/// // "my_crate::Wrapper<u8>*"
/// println!("{}", display::<*mut Wrapper<u8>>());
/// ```
#[proc_macro_derive(TypeInfo)]
pub fn derive_type_info(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_info(input).into()
}
