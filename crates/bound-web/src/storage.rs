use bound_engine::{legacy_lock_key, submission_key, Submission, SubmissionStore};
use web_sys::Storage;

/// `localStorage`-backed submission store.
///
/// Storage failures (privacy mode, quota) degrade to "no record": the
/// player can still play, they just lose persistence across reloads.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; submissions will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore for LocalStore {
    fn get(&self, puzzle_number: u32) -> Option<Submission> {
        let storage = self.storage.as_ref()?;

        let raw = storage.get_item(&submission_key(puzzle_number)).ok().flatten();
        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(submission) => Some(submission),
                Err(err) => {
                    log::warn!("discarding unreadable submission record: {err}");
                    None
                }
            },
            None => {
                // Clear the deprecated flag-only lock written by an
                // earlier release.
                let _ = storage.remove_item(&legacy_lock_key(puzzle_number));
                None
            }
        }
    }

    fn put(&mut self, submission: &Submission) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };

        match serde_json::to_string(submission) {
            Ok(json) => {
                if storage
                    .set_item(&submission_key(submission.puzzle_number), &json)
                    .is_err()
                {
                    log::warn!("failed to persist submission #{}", submission.puzzle_number);
                }
            }
            Err(err) => log::warn!("failed to encode submission: {err}"),
        }
    }
}
