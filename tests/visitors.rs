//! Built-in visitors and the visitor protocol

use declname::prelude::*;
use declname::visit::IoStreamOut;
use declname::Error;

#[derive(TypeInfo)]
struct Foo;

/// Renders nested types as `_` instead of descending into them.
#[derive(Default)]
struct Shallow(String);

impl Visitor for Shallow {
    fn visit_literal(mut self, run: &str) -> Self {
        self.0.push_str(run);
        self
    }

    fn visit_nested<T: TypeInfo + ?Sized>(mut self) -> Self {
        self.0.push('_');
        self
    }
}

#[test]
fn test_length_matches_string() {
    assert_eq!(name_len::<u8>(), 7);
    assert_eq!(name_len::<[*mut Foo; 12]>(), name_of::<[*mut Foo; 12]>().len());
    assert_eq!(name_len::<Foo>(), concat!(module_path!(), "::Foo").len());
}

#[test]
fn test_hash() {
    assert_eq!(name_hash::<bool>(), Hash::default().visit_literal("bool").finish());
    // Same bytes, different runs
    let whole = Hash::default().visit_literal("uint8_t*").finish();
    assert_eq!(name_hash::<*mut u8>(), whole);
    assert_ne!(name_hash::<*mut u8>(), name_hash::<*const u8>());
}

#[test]
fn test_sequence_buffer() {
    let seq = Sequence::<32>::of::<[Const<u8>; 4]>().unwrap();
    assert_eq!(seq.as_str(), "uint8_t const[4]");
    assert_eq!(seq.len(), 16);

    assert_eq!(
        Sequence::<4>::of::<u8>().map(|s| s.len()),
        Err(Error::CapacityExceeded { capacity: 4, required: 7 })
    );
}

#[test]
fn test_stream_out() {
    let out = write_name::<&mut Foo, _>(String::from("> ")).unwrap();
    assert_eq!(out, concat!("> ", module_path!(), "::Foo&"));
    assert_eq!(format!("{}", display::<RvalueRef<char>>()), "char32_t&&");
    assert_eq!(format!("{:?}", display::<u8>()), "\"uint8_t\"");
}

#[test]
fn test_io_stream_out() {
    let bytes = <*mut i64 as TypeInfo>::name_tokens(IoStreamOut::new(Vec::new()))
        .finish()
        .unwrap();
    assert_eq!(bytes, b"int64_t*");
}

#[test]
fn test_from_fn() {
    let mut seen = Vec::new();
    <*const [u8; 3]>::name_tokens(from_fn(|run: &str| seen.push(run.to_owned())));
    assert_eq!(seen, ["uint8_t", "[", "3", "]", " const", "*"]);
}

#[test]
fn test_visit_nested_can_be_overridden() {
    assert_eq!(<*mut Foo>::name_tokens(Shallow::default()).0, "_*");
    assert_eq!(<[u8; 3]>::name_tokens(Shallow::default()).0, "_[3]");
    assert_eq!(<Const<u8>>::name_tokens(Shallow::default()).0, "_ const");
}
