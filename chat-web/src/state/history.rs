//! Chat history model
//!
//! Each entry carries an explicit answer state instead of placeholder
//! text, so loading and failure are never detected by string comparison.
//! Only answered entries reach the persisted snapshot.

use shared::StoredEntry;

/// Answer state of one chat entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerState {
    /// Submitted, waiting for the backend. Rendered as a skeleton.
    Pending,
    /// The generated answer.
    Answered(String),
    /// The submission failed. Transient: purged by the rollback before
    /// anything is persisted.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: u64,
    pub question: String,
    pub answer: AnswerState,
}

/// Ordered, append-only chat history with delete-by-id.
///
/// Ids are assigned monotonically so a delete issued while a submission
/// is in flight can never target the wrong entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatHistory {
    entries: Vec<ChatEntry>,
    next_id: u64,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild history from a persisted snapshot. All snapshot entries
    /// are answered by construction.
    pub fn from_snapshot(snapshot: Vec<StoredEntry>) -> Self {
        let entries: Vec<ChatEntry> = snapshot
            .into_iter()
            .enumerate()
            .map(|(i, stored)| ChatEntry {
                id: i as u64,
                question: stored.question,
                answer: AnswerState::Answered(stored.answer),
            })
            .collect();
        let next_id = entries.len() as u64;

        Self { entries, next_id }
    }

    /// Snapshot for persistence: answered entries only, in order.
    pub fn snapshot(&self) -> Vec<StoredEntry> {
        self.entries
            .iter()
            .filter_map(|entry| match &entry.answer {
                AnswerState::Answered(answer) => Some(StoredEntry {
                    question: entry.question.clone(),
                    answer: answer.clone(),
                }),
                AnswerState::Pending | AnswerState::Failed => None,
            })
            .collect()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Optimistic append: the entry starts out pending.
    pub fn push_pending(&mut self, question: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ChatEntry {
            id,
            question: question.into(),
            answer: AnswerState::Pending,
        });
        id
    }

    /// Resolve a pending entry with the real answer.
    pub fn resolve(&mut self, id: u64, answer: String) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.answer == AnswerState::Pending => {
                entry.answer = AnswerState::Answered(answer);
                true
            }
            _ => false,
        }
    }

    /// Mark a pending entry as failed.
    pub fn fail(&mut self, id: u64) -> bool {
        match self.entry_mut(id) {
            Some(entry) if entry.answer == AnswerState::Pending => {
                entry.answer = AnswerState::Failed;
                true
            }
            _ => false,
        }
    }

    /// Drop failed entries, restoring the pre-submit history.
    pub fn purge_failed(&mut self) {
        self.entries
            .retain(|entry| entry.answer != AnswerState::Failed);
    }

    /// User-initiated deletion of an arbitrary entry.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    fn entry_mut(&mut self, id: u64) -> Option<&mut ChatEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(history: &mut ChatHistory, question: &str, answer: &str) -> u64 {
        let id = history.push_pending(question);
        assert!(history.resolve(id, answer.to_string()));
        id
    }

    #[test]
    fn resolved_entry_appears_in_snapshot() {
        let mut history = ChatHistory::new();
        answered(&mut history, "What is 2+2?", "4");

        let snapshot = history.snapshot();
        assert_eq!(
            snapshot,
            vec![StoredEntry {
                question: "What is 2+2?".to_string(),
                answer: "4".to_string(),
            }]
        );
    }

    #[test]
    fn pending_entry_is_excluded_from_snapshot() {
        let mut history = ChatHistory::new();
        answered(&mut history, "first", "one");
        history.push_pending("in flight");

        assert_eq!(history.len(), 2);
        assert_eq!(history.snapshot().len(), 1);
    }

    #[test]
    fn snapshot_round_trip_preserves_order() {
        let mut history = ChatHistory::new();
        for i in 0..5 {
            answered(&mut history, &format!("q{}", i), &format!("a{}", i));
        }

        let restored = ChatHistory::from_snapshot(history.snapshot());

        assert_eq!(restored.snapshot(), history.snapshot());
        let questions: Vec<_> = restored
            .entries()
            .iter()
            .map(|e| e.question.clone())
            .collect();
        assert_eq!(questions, vec!["q0", "q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn rollback_restores_pre_submit_length() {
        let mut history = ChatHistory::new();
        answered(&mut history, "kept", "yes");
        let before = history.len();

        let id = history.push_pending("doomed");
        assert!(history.fail(id));
        history.purge_failed();

        assert_eq!(history.len(), before);
        assert!(history.entries().iter().all(|e| e.question != "doomed"));
    }

    #[test]
    fn delete_preserves_order_of_remaining_entries() {
        let mut history = ChatHistory::new();
        let ids: Vec<u64> = (0..4)
            .map(|i| answered(&mut history, &format!("q{}", i), "a"))
            .collect();

        assert!(history.remove(ids[1]));

        assert_eq!(history.len(), 3);
        let questions: Vec<_> = history
            .entries()
            .iter()
            .map(|e| e.question.as_str())
            .collect();
        assert_eq!(questions, vec!["q0", "q2", "q3"]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let mut history = ChatHistory::new();
        answered(&mut history, "q", "a");

        assert!(!history.remove(99));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn resolve_after_delete_is_rejected() {
        let mut history = ChatHistory::new();
        let id = history.push_pending("deleted mid-flight");
        assert!(history.remove(id));

        assert!(!history.resolve(id, "too late".to_string()));
        assert!(history.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_deletions() {
        let mut history = ChatHistory::new();
        let first = answered(&mut history, "q0", "a0");
        history.remove(first);
        let second = answered(&mut history, "q1", "a1");

        assert_ne!(first, second);
    }
}
