//! Persistence through the on-disk storage

use clipmemo::{
    run_command, ClipmemoError, Commands, FileStorage, KeyValueStorage, MemoryClipboard,
    Snippet, SnippetStore, STORAGE_KEY,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn first_run_seeds_file() {
    let tmp = tempdir().unwrap();
    let store = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();

    assert_eq!(store.len(), 2);
    let raw = fs::read_to_string(tmp.path().join("clipmemo_snippets.json")).unwrap();
    let on_disk: Vec<Snippet> = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, store.snippets());
}

#[test]
fn seed_is_written_once() {
    let tmp = tempdir().unwrap();
    let mut store = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
    let seed_ids: Vec<_> = store.snippets().iter().map(|s| s.id).collect();
    for id in seed_ids {
        store.delete(id).unwrap();
    }

    let reloaded = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn persist_then_load_round_trips() {
    let tmp = tempdir().unwrap();
    let mut store = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
    store.create("Phone", "+81 3-0000-0000").unwrap();
    store.create("住所", "東京都千代田区\n1-1").unwrap();
    store.reorder(0, 3).unwrap();
    let first = store.snippets()[0].id;
    store.update(first, "Renamed", "new content").unwrap();
    store.persist().unwrap();

    let reloaded = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
    assert_eq!(reloaded.snippets(), store.snippets());
}

#[test]
fn stored_format_is_plain_json_array() {
    let tmp = tempdir().unwrap();
    let mut storage = FileStorage::new(tmp.path());
    storage
        .set_item(STORAGE_KEY, r#"[{"id":1,"label":"A","content":"a"}]"#)
        .unwrap();

    let mut store = SnippetStore::load(&mut storage).unwrap();
    store.create("B", "b").unwrap();
    drop(store);

    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["label"], "B");
    assert_eq!(array[0]["content"], "b");
    assert!(array[0]["id"].is_i64());
    assert_eq!(array[1], serde_json::json!({"id": 1, "label": "A", "content": "a"}));
}

#[test]
fn corrupt_file_is_reported() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("clipmemo_snippets.json"), "not json").unwrap();
    assert!(matches!(
        SnippetStore::load(FileStorage::new(tmp.path())),
        Err(ClipmemoError::Json(_))
    ));
}

#[test]
fn commands_share_one_file() {
    let tmp = tempdir().unwrap();
    let mut clipboard = MemoryClipboard::new();

    let mut run = |command: Commands| {
        let store = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
        let mut out = Vec::new();
        run_command(command, store, &mut clipboard, &mut "".as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    run(Commands::Add {
        label: "Mail".into(),
        content: "user@example.com".into(),
    });
    run(Commands::Move { from: 0, to: 2 });
    let listing = run(Commands::List { json: false });

    let labels: Vec<&str> = listing
        .lines()
        .map(|line| line.split("  ").nth(3).unwrap())
        .collect();
    assert_eq!(labels, vec!["Home address", "Email address", "Mail"]);

    let store = SnippetStore::load(FileStorage::new(tmp.path())).unwrap();
    let id = store.snippets()[2].id;
    run(Commands::Copy { id });
    drop(run);
    assert_eq!(clipboard.contents.as_deref(), Some("user@example.com"));
}
