mod mutation_tests;
mod reorder_tests;

use clipmemo::{KeyValueStorage, MemoryStorage, Snippet, SnippetStore, STORAGE_KEY};
use proptest::prelude::*;

/// Store preloaded with `snippets`, bypassing seeding
pub fn store_with(snippets: &[Snippet]) -> SnippetStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(STORAGE_KEY, &serde_json::to_string(snippets).unwrap())
        .unwrap();
    SnippetStore::load(storage).unwrap()
}

pub fn ids(store: &SnippetStore<MemoryStorage>) -> Vec<i64> {
    store.snippets().iter().map(|s| s.id).collect()
}

/// Text with at least one visible character
pub fn arb_text() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[a-zA-Z0-9@.,-]{1,20}[ \t]{0,2}"
}

/// Text that trims to nothing
pub fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

/// Lists with distinct ids
pub fn arb_snippets(max: usize) -> impl Strategy<Value = Vec<Snippet>> {
    prop::collection::vec((arb_text(), arb_text()), 0..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (label, content))| {
                Snippet::new(i as i64 + 1, label.trim(), content.trim())
            })
            .collect()
    })
}
