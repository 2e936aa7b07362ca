use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn memory_store_overwrites_values() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn store_references_delegate() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("k", "v").unwrap();
    assert_eq!(store.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn storage_errors_render_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StorageError::Write("QuotaExceeded".into()).to_string(),
        "storage write failed: QuotaExceeded"
    );
}
