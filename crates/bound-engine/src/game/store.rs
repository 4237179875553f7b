use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::score::ScoreResult;

/// The locked record of a device's one attempt at a puzzle number.
/// Immutable once created; old records are kept when the day rolls over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub puzzle_number: u32,
    /// Display form of the pattern the words were played against.
    pub pattern: String,
    /// Normalized words, in submission order.
    pub words: [String; 3],
    pub score_result: ScoreResult,
    /// ISO-8601 timestamp supplied by the host at submit time.
    pub submitted_at: String,
}

/// Storage key for a puzzle's submission record.
pub fn submission_key(puzzle_number: u32) -> String {
    format!("bound:submission:{puzzle_number}")
}

/// Flag-only lock key written by an earlier release; cleared when seen
/// without a full submission record.
pub fn legacy_lock_key(puzzle_number: u32) -> String {
    format!("bound:submitted:{puzzle_number}")
}

/// Device-persistent submission storage, keyed per puzzle number.
///
/// Written once per puzzle number; the session guard enforces the
/// write-once rule, not the store. Implementations swallow backend
/// failures (a missing record is the correct degraded behavior).
pub trait SubmissionStore {
    fn get(&self, puzzle_number: u32) -> Option<Submission>;
    fn put(&mut self, submission: &Submission);
}

/// In-memory store for tests and native hosts.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<u32, Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SubmissionStore for MemoryStore {
    fn get(&self, puzzle_number: u32) -> Option<Submission> {
        self.records.get(&puzzle_number).cloned()
    }

    fn put(&mut self, submission: &Submission) {
        self.records
            .insert(submission.puzzle_number, submission.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::difficulty::Tier;

    fn sample() -> Submission {
        Submission {
            puzzle_number: 3,
            pattern: "S _ _ _ E".to_string(),
            words: ["SPARE".into(), "STONE".into(), "SPICE".into()],
            score_result: ScoreResult {
                tiers: [Tier::Common, Tier::Uncommon, Tier::Elite],
                score: 8,
                bonus_points: 1,
                share_text: "Bounds #3\nS _ _ _ E (5)\nScore: 8\n🟦🟨🟥".to_string(),
            },
            submitted_at: "2026-02-27T14:05:00.000Z".to_string(),
        }
    }

    #[test]
    fn keys_are_namespaced_per_puzzle() {
        assert_eq!(submission_key(3), "bound:submission:3");
        assert_eq!(legacy_lock_key(3), "bound:submitted:3");
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get(3).is_none());

        store.put(&sample());
        assert_eq!(store.get(3), Some(sample()));
        assert!(store.get(4).is_none());
    }

    #[test]
    fn record_json_uses_page_field_names() {
        // The on-device format predates this crate; field names are part
        // of the contract with records written by earlier releases.
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"puzzleNumber\":3"));
        assert!(json.contains("\"scoreResult\""));
        assert!(json.contains("\"submittedAt\""));
        assert!(json.contains("\"shareText\""));
        assert!(json.contains("🟦"));

        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
