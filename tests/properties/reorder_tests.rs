//! Reorder is a permutation

use super::{arb_snippets, ids, store_with};
use clipmemo::ClipmemoError;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Moving i to j matches a remove-then-insert on a plain vector.
    #[test]
    fn prop_reorder_is_move(
        initial in arb_snippets(10),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!initial.is_empty());
        let from = from.index(initial.len());
        let to = to.index(initial.len());
        let mut store = store_with(&initial);

        store.reorder(from, to).unwrap();

        let mut expected = initial.clone();
        let moved = expected.remove(from);
        expected.insert(to, moved);
        prop_assert_eq!(store.snippets(), &expected[..]);

        let mut before: Vec<_> = initial.iter().map(|s| s.id).collect();
        let mut after = ids(&store);
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// Out-of-range indices are rejected and leave the list alone.
    #[test]
    fn prop_reorder_out_of_range(
        initial in arb_snippets(6),
        extra in 0usize..5,
        bad_from in any::<bool>(),
    ) {
        let len = initial.len();
        let (from, to) = if bad_from { (len + extra, 0) } else { (0, len + extra) };
        let mut store = store_with(&initial);

        let result = store.reorder(from, to);

        prop_assert!(
            matches!(result, Err(ClipmemoError::IndexOutOfRange { len: l, .. }) if l == len),
            "expected out of range error"
        );
        prop_assert_eq!(store.snippets(), &initial[..]);
    }
}
