//! Create, update and delete invariants

use super::{arb_blank, arb_snippets, arb_text, ids, store_with};
use clipmemo::ClipmemoError;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A valid create adds exactly one snippet, at the head, with a fresh id.
    #[test]
    fn prop_create_prepends_unique(
        initial in arb_snippets(8),
        label in arb_text(),
        content in arb_text(),
    ) {
        let mut store = store_with(&initial);
        let before = ids(&store);

        store.create(&label, &content).unwrap();

        prop_assert_eq!(store.len(), initial.len() + 1);
        let head = &store.snippets()[0];
        prop_assert_eq!(head.label.as_str(), label.trim());
        prop_assert_eq!(head.content.as_str(), content.trim());
        prop_assert!(!before.contains(&head.id));
        prop_assert_eq!(&ids(&store)[1..], &before[..]);
    }

    /// Blank label or content never changes the list.
    #[test]
    fn prop_create_rejects_blank(
        initial in arb_snippets(8),
        blank in arb_blank(),
        text in arb_text(),
        blank_label in any::<bool>(),
    ) {
        let mut store = store_with(&initial);
        let result = if blank_label {
            store.create(&blank, &text).map(|_| ())
        } else {
            store.create(&text, &blank).map(|_| ())
        };

        prop_assert!(matches!(result, Err(ClipmemoError::Validation)));
        prop_assert_eq!(store.snippets(), &initial[..]);
    }

    /// Update keeps length, order and ids; only the target's text changes.
    #[test]
    fn prop_update_in_place(
        initial in arb_snippets(8),
        pick in any::<prop::sample::Index>(),
        label in arb_text(),
        content in arb_text(),
    ) {
        prop_assume!(!initial.is_empty());
        let target = pick.index(initial.len());
        let id = initial[target].id;
        let mut store = store_with(&initial);

        prop_assert!(store.update(id, &label, &content).unwrap());

        prop_assert_eq!(ids(&store), initial.iter().map(|s| s.id).collect::<Vec<_>>());
        for (i, snippet) in store.snippets().iter().enumerate() {
            if i == target {
                prop_assert_eq!(snippet.label.as_str(), label.trim());
                prop_assert_eq!(snippet.content.as_str(), content.trim());
            } else {
                prop_assert_eq!(snippet, &initial[i]);
            }
        }
    }

    /// Update of an unknown id is a no-op.
    #[test]
    fn prop_update_absent_is_noop(
        initial in arb_snippets(8),
        label in arb_text(),
        content in arb_text(),
    ) {
        let mut store = store_with(&initial);
        prop_assert!(!store.update(-1, &label, &content).unwrap());
        prop_assert_eq!(store.snippets(), &initial[..]);
    }

    /// Delete shrinks the list by one iff the id was present.
    #[test]
    fn prop_delete_removes_exactly_one(
        initial in arb_snippets(8),
        id in 0i64..10,
    ) {
        let mut store = store_with(&initial);
        let present = initial.iter().any(|s| s.id == id);

        prop_assert_eq!(store.delete(id).unwrap(), present);

        let expected_len = if present { initial.len() - 1 } else { initial.len() };
        prop_assert_eq!(store.len(), expected_len);
        prop_assert!(store.get(id).is_none());

        let remaining: Vec<_> = initial.iter().filter(|s| s.id != id).cloned().collect();
        prop_assert_eq!(store.snippets(), &remaining[..]);
    }

    /// Ids stay unique across any run of creates.
    #[test]
    fn prop_ids_stay_unique(count in 1usize..30) {
        let mut store = store_with(&[]);
        for i in 0..count {
            store.create(&format!("label {i}"), "content").unwrap();
        }
        let unique: HashSet<_> = ids(&store).into_iter().collect();
        prop_assert_eq!(unique.len(), count);
    }
}
