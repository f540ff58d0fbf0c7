//! Fixed-width names of the fundamental types

use declname::prelude::*;

#[test]
fn test_unsigned() {
    assert_eq!(name_of::<u8>(), "uint8_t");
    assert_eq!(name_of::<u16>(), "uint16_t");
    assert_eq!(name_of::<u32>(), "uint32_t");
    assert_eq!(name_of::<u64>(), "uint64_t");
    assert_eq!(name_of::<u128>(), "uint128_t");
}

#[test]
fn test_signed() {
    assert_eq!(name_of::<i8>(), "int8_t");
    assert_eq!(name_of::<i16>(), "int16_t");
    assert_eq!(name_of::<i32>(), "int32_t");
    assert_eq!(name_of::<i64>(), "int64_t");
    assert_eq!(name_of::<i128>(), "int128_t");
}

#[test]
fn test_pointer_sized_follow_the_target() {
    let bits = 8 * core::mem::size_of::<usize>();
    assert_eq!(name_of::<usize>(), format!("uint{bits}_t"));
    assert_eq!(name_of::<isize>(), format!("int{bits}_t"));
}

#[test]
fn test_floats_and_characters() {
    assert_eq!(name_of::<f32>(), "float32_t");
    assert_eq!(name_of::<f64>(), "float64_t");
    assert_eq!(name_of::<Char8>(), "char8_t");
    assert_eq!(name_of::<Char16>(), "char16_t");
    assert_eq!(name_of::<char>(), "char32_t");
}

#[test]
fn test_bool_and_unit() {
    assert_eq!(name_of::<bool>(), "bool");
    assert_eq!(name_of::<()>(), "void");
    assert_eq!(name_of::<*mut ()>(), "void*");
}

#[test]
fn test_fundamental_names_are_single_runs() {
    let runs = <u32 as TypeInfo>::name_tokens(Runs::default()).finish();
    assert_eq!(runs, ["uint32_t"]);
}
