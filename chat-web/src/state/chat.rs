//! Chat state management
//!
//! Context holding the chat history and the single-submission flag.
//! Every mutation that changes the answered history re-persists the
//! snapshot through the store synchronously, so the in-memory and
//! persisted history never diverge past the current session.

use crate::services::store::SnapshotStore;
use crate::state::history::ChatHistory;
use leptos::prelude::*;

/// Global chat context
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub history: RwSignal<ChatHistory>,
    pub submitting: RwSignal<bool>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self {
            history: RwSignal::new(ChatHistory::new()),
            submitting: RwSignal::new(false),
        }
    }

    /// Load the persisted snapshot on startup.
    pub fn hydrate(&self, store: &dyn SnapshotStore) {
        self.history
            .set(ChatHistory::from_snapshot(store.load_history()));
    }

    /// Optimistic append of a pending entry. The snapshot is untouched:
    /// pending entries are never persisted.
    pub fn begin_submission(&self, question: &str) -> u64 {
        self.submitting.set(true);
        let mut id = 0;
        self.history.update(|history| {
            id = history.push_pending(question);
        });
        id
    }

    /// Replace the pending entry with the real answer and persist.
    pub fn complete_submission(&self, store: &dyn SnapshotStore, id: u64, answer: String) {
        self.history.update(|history| {
            history.resolve(id, answer);
        });
        self.persist(store);
        self.submitting.set(false);
    }

    /// Roll back the optimistic entry. Nothing is persisted: the
    /// snapshot never contained the placeholder.
    pub fn fail_submission(&self, id: u64) {
        self.history.update(|history| {
            history.fail(id);
            history.purge_failed();
        });
        self.submitting.set(false);
    }

    /// User-initiated deletion, allowed at any time.
    pub fn delete_entry(&self, store: &dyn SnapshotStore, id: u64) {
        self.history.update(|history| {
            history.remove(id);
        });
        self.persist(store);
    }

    fn persist(&self, store: &dyn SnapshotStore) {
        store.save_history(&self.history.get_untracked().snapshot());
    }
}

pub fn provide_chat_context(store: &dyn SnapshotStore) -> ChatContext {
    let context = ChatContext::new();
    context.hydrate(store);
    provide_context(context);
    context
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}
