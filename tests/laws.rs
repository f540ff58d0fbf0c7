//! Property tests for the sequence, filter and hash laws

use declname::primitives::const_utils::hash33_xor;
use declname::primitives::filter::{apply_filter, filtered, RemoveMatching};
use declname::primitives::seq::Seq;
use declname::scope::AnonymousScope;
use proptest::prelude::*;

const SPAN: Seq<usize, 64> = Seq::range(100, 164);

proptest! {
    #[test]
    fn range_is_ascending_from_min(i in 0usize..64) {
        prop_assert_eq!(SPAN.get(i), 100 + i);
        prop_assert_eq!(SPAN.len(), 64);
    }

    #[test]
    fn filter_removes_every_occurrence(
        parts in prop::collection::vec("[a-z:]{0,6}", 0..6),
        marker in "[_#0-9]{1,4}::",
    ) {
        let input = parts.join(&marker);
        let out = filtered(RemoveMatching::new(marker.as_bytes()), input.as_bytes());
        prop_assert!(!out.windows(marker.len()).any(|w| w == marker.as_bytes()));
        prop_assert_eq!(out, parts.concat().into_bytes());
    }

    #[test]
    fn filter_is_idempotent(parts in prop::collection::vec("[a-z:]{0,6}", 0..6)) {
        let input = parts.join("_::");
        let filter = RemoveMatching::new(b"_::".as_slice());
        let once = filtered(filter, input.as_bytes());
        let twice = filtered(filter, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn runs_never_touch(input in "[ab_:]{0,24}") {
        let runs: Vec<_> = apply_filter(RemoveMatching::new(b"_::".as_slice()), input.as_bytes()).collect();
        for pair in runs.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn hash_splits_anywhere(input in "[ -~]{0,32}", at in 0usize..33) {
        let at = at.min(input.len());
        let (head, tail) = input.as_bytes().split_at(at);
        prop_assert_eq!(hash33_xor(hash33_xor(0, head), tail), hash33_xor(0, input.as_bytes()));
    }

    #[test]
    fn normalized_name_reinserts_to_raw(parts in prop::collection::vec("[a-z]{1,4}_{0,2}", 1..4)) {
        let raw: &'static str = Box::leak(format!("app::{}", parts.join("::_::")).into_boxed_str());
        let scope = AnonymousScope::from_sentinel("declname::scope::_::Crib").unwrap();
        let name = scope.normalize(raw);
        let rebuilt: Vec<_> = name.runs().collect();
        prop_assert_eq!(rebuilt.join(scope.marker()), raw);
    }

    #[test]
    fn segments_ending_in_underscore_are_kept(parts in prop::collection::vec("[a-z]{1,4}_{0,2}", 1..5)) {
        let raw: &'static str = Box::leak(format!("app::{}", parts.join("::")).into_boxed_str());
        let scope = AnonymousScope::from_sentinel("declname::scope::_::Crib").unwrap();
        let name = scope.normalize(raw);
        prop_assert_eq!(name.to_normalized_string(), raw);
        prop_assert_eq!(name.runs().count(), 1);
    }
}

#[test]
fn test_empty_range() {
    let empty = Seq::<usize, 0>::range(7, 7);
    assert!(empty.is_empty());
    assert_eq!(empty.as_slice(), &[] as &[usize]);
}
