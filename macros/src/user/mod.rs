//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeInfo)]` | on struct/enum/union | Class-type name descriptor |

pub mod type_info;

pub use type_info::expand_derive_type_info;
