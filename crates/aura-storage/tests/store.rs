use std::sync::Arc;

use aura_core::models::ActivityKind;
use aura_storage::activity::ActivityLog;
use aura_storage::error::StorageError;
use aura_storage::file::FileStore;
use aura_storage::store::{KeyValueStore, MemoryStore};

fn at(seconds: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(seconds).unwrap()
}

#[test]
fn missing_keys_read_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let stores: Vec<Box<dyn KeyValueStore>> = vec![
        Box::new(MemoryStore::new()),
        Box::new(FileStore::new(dir.path().join("data"))),
    ];
    for store in stores {
        assert!(store.get("wellness_profile").unwrap().is_none());
        store.delete("wellness_profile").unwrap();
        store.put("wellness_profile", b"{}".to_vec()).unwrap();
        assert_eq!(store.get("wellness_profile").unwrap(), Some(b"{}".to_vec()));
        store.delete("wellness_profile").unwrap();
        assert!(store.get("wellness_profile").unwrap().is_none());
    }
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    for key in ["../escape", "a/b", "", "dots.json"] {
        assert!(matches!(
            store.put(key, Vec::new()),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}

#[test]
fn activity_log_is_newest_first_and_capped() {
    let log = ActivityLog::new(Arc::new(MemoryStore::new()));
    assert!(log.recent().is_empty());

    for i in 0..7 {
        log.record(ActivityKind::Chat, format!("Chat {i}"), at(i)).unwrap();
    }
    log.record(ActivityKind::Assessment, "Completed Wellness Check-in", at(100))
        .unwrap();

    let recent = log.recent();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].kind, ActivityKind::Assessment);
    assert_eq!(recent[0].title, "Completed Wellness Check-in");
    assert_eq!(recent[1].title, "Chat 6");
    assert_eq!(recent[4].title, "Chat 3");
}

#[cfg(unix)]
#[test]
fn failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory where the entry file should go makes the rename fail.
    let blocker = dir.path().join("wellness_profile.json");
    std::fs::create_dir_all(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), b"x").unwrap();

    let store = FileStore::new(dir.path());
    let err = store.put("wellness_profile", b"{}".to_vec()).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert!(!dir.path().join("wellness_profile.json.tmp").exists());
}
