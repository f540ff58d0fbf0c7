//! # Layer 0: Primitives
//!
//! Building blocks shared by every other layer:
//! - `seq.rs`: Fixed-length compile-time sequences (`concat`, `range`, `gather`).
//! - `filter.rs`: Cursor-driven pattern filters (`RemoveMatching`, `RemoveSegment`).
//! - `fixed_str.rs`: Immutable fixed-length ASCII strings and decimal digits.
//! - `const_utils.rs`: Byte search, digit and hash helpers.

pub mod const_utils;
pub mod filter;
pub mod fixed_str;
pub mod seq;

// Re-export key types at this level
pub use filter::{apply_filter, Cursor, Filter, Passthrough, RemoveMatching, RemoveSegment, Runs, Step};
pub use fixed_str::{numeric_name, Digits, FixedStr};
pub use seq::{Element, Seq};

#[cfg(feature = "alloc")]
pub use filter::filtered;
