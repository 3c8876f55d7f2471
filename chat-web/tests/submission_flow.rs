//! End-to-end submission flow against the in-memory store: optimistic
//! append, resolve-and-persist, rollback, and deletion, as the chat
//! page drives them.

use chat_web::services::store::{MemoryStore, SnapshotStore, HISTORY_KEY};
use chat_web::state::history::{AnswerState, ChatHistory};
use shared::StoredEntry;

#[test]
fn successful_submission_persists_exactly_one_entry() {
    let store = MemoryStore::new();
    let mut history = ChatHistory::from_snapshot(store.load_history());

    // Submit "What is 2+2?"; the provider answers "4".
    let id = history.push_pending("What is 2+2?");
    assert_eq!(history.entries()[0].answer, AnswerState::Pending);

    history.resolve(id, "4".to_string());
    store.save_history(&history.snapshot());

    assert_eq!(
        store.load_history(),
        vec![StoredEntry {
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
        }]
    );
}

#[test]
fn failed_submission_leaves_persisted_snapshot_untouched() {
    let store = MemoryStore::new();
    store.save_history(&[StoredEntry {
        question: "earlier".to_string(),
        answer: "answer".to_string(),
    }]);

    let mut history = ChatHistory::from_snapshot(store.load_history());
    let before = history.len();

    // The request fails; the optimistic entry is rolled back and
    // nothing is re-persisted.
    let id = history.push_pending("doomed");
    history.fail(id);
    history.purge_failed();

    assert_eq!(history.len(), before);
    assert_eq!(store.load_history().len(), 1);
}

#[test]
fn deletion_persists_immediately_with_order_preserved() {
    let store = MemoryStore::new();
    let mut history = ChatHistory::new();

    let mut ids = Vec::new();
    for i in 0..3 {
        let id = history.push_pending(format!("q{}", i));
        history.resolve(id, format!("a{}", i));
        ids.push(id);
    }
    store.save_history(&history.snapshot());

    history.remove(ids[1]);
    store.save_history(&history.snapshot());

    let persisted = store.load_history();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].question, "q0");
    assert_eq!(persisted[1].question, "q2");
}

#[test]
fn hydration_survives_a_reload_and_tolerates_corruption() {
    let store = MemoryStore::new();
    let mut history = ChatHistory::new();
    let id = history.push_pending("kept?");
    history.resolve(id, "yes".to_string());
    store.save_history(&history.snapshot());

    // Reload: same snapshot comes back.
    let reloaded = ChatHistory::from_snapshot(store.load_history());
    assert_eq!(reloaded.snapshot(), history.snapshot());

    // Corrupt the stored value: hydration falls back to empty, silently.
    store.insert_raw(HISTORY_KEY, "[{\"question\": truncated");
    let recovered = ChatHistory::from_snapshot(store.load_history());
    assert!(recovered.is_empty());
}
