//! End-to-end scenarios over the store and ops layers.
//!
//! Each test works against a temp data directory and verifies both the
//! in-memory collection and what landed on disk.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use tempo::io::store::{self, Store};
use tempo::model::stats::Stats;
use tempo::model::task::Category;
use tempo::ops::{session_ops, task_ops};

fn open_store(dir: &TempDir) -> Store {
    let (store, err) = Store::open(&dir.path().join("store.json"));
    assert!(err.is_none());
    store
}

/// Reopen the store from disk, as a fresh process would
fn reopen(dir: &TempDir) -> Store {
    open_store(dir)
}

#[test]
fn first_login_seeds_defaults_and_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    session_ops::login(&mut store, "user@example.com", "hunter2").unwrap();
    assert!(store::is_logged_in(&store));

    // Empty collection → seed the four defaults
    assert_eq!(store::read_tasks(&store).unwrap(), None);
    let tasks = task_ops::default_tasks();
    store::write_tasks(&mut store, &tasks).unwrap();

    // Restart: session and tasks are still there
    let store = reopen(&dir);
    assert!(store::is_logged_in(&store));
    let loaded = store::read_tasks(&store).unwrap().unwrap();
    assert_eq!(loaded, tasks);
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded[0].text, "Finish Report");

    let creds = store::read_credentials(&store).unwrap();
    assert_eq!(creds.email, "user@example.com");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn add_task_persists_full_collection() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    session_ops::login(&mut store, "a@b.c", "pw").unwrap();

    let mut tasks = task_ops::default_tasks();
    let added = task_ops::add_task(&mut tasks, "Read", "9:00 am", Category::Personal)
        .expect("non-empty fields should add");
    assert!(!added.completed);
    assert_eq!(tasks.len(), 5);
    store::write_tasks(&mut store, &tasks).unwrap();

    let loaded = store::read_tasks(&reopen(&dir)).unwrap().unwrap();
    assert_eq!(loaded, tasks);
    assert_eq!(loaded[4].text, "Read");
    assert_eq!(loaded[4].category, Category::Personal);
}

#[test]
fn toggle_and_delete_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let mut tasks = task_ops::default_tasks();
    assert!(task_ops::toggle_completion(&mut tasks, "2"));
    assert!(task_ops::delete_task(&mut tasks, "3"));
    store::write_tasks(&mut store, &tasks).unwrap();

    let loaded = store::read_tasks(&reopen(&dir)).unwrap().unwrap();
    assert_eq!(loaded.len(), 3);
    assert!(loaded.iter().find(|t| t.id == "2").unwrap().completed);
    assert!(!loaded.iter().any(|t| t.id == "3"));

    let stats = Stats::compute(&loaded);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.completion_percentage(), 33);
}

#[test]
fn logout_clears_session_but_keeps_tasks() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    session_ops::login(&mut store, "a@b.c", "pw").unwrap();
    store::write_tasks(&mut store, &task_ops::default_tasks()).unwrap();

    session_ops::logout(&mut store).unwrap();

    let store = reopen(&dir);
    assert!(!store::is_logged_in(&store));
    assert_eq!(store::read_credentials(&store), None);
    // Tasks are not session state
    assert_eq!(store::read_tasks(&store).unwrap().unwrap().len(), 4);
}

#[test]
fn malformed_store_file_starts_empty_and_reports() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    let (store, err) = Store::open(&path);
    assert!(err.is_some());
    assert!(!store::is_logged_in(&store));
    assert_eq!(store::read_tasks(&store).unwrap(), None);
}

#[test]
fn store_file_is_valid_json_object_of_strings() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    session_ops::login(&mut store, "a@b.c", "pw").unwrap();
    store::write_tasks(&mut store, &task_ops::default_tasks()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("store.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.values().all(|v| v.is_string()));
    assert!(object.contains_key("tasks"));
    assert!(object.contains_key("isLoggedIn"));
    assert!(object.contains_key("userCredentials"));
    assert_eq!(object["isLoggedIn"], "true");
}
