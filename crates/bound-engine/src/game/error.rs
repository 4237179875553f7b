use thiserror::Error;

/// Validation failure scoped to a single word slot. Display strings are the
/// inline messages shown next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// Empty after normalization.
    #[error("Required")]
    Required,

    /// Wrong length or a fixed-position mismatch.
    #[error("Doesn’t match pattern")]
    PatternMismatch,

    /// The word list has not loaded. Deliberately distinct from
    /// [`SlotError::NotAWord`]: a load failure must never read as a wrong
    /// guess.
    #[error("Dictionary not loaded")]
    DictionaryUnavailable,

    /// Normalized word absent from the dictionary.
    #[error("Not in dictionary")]
    NotAWord,
}

/// Why a submission was refused. All variants leave the guard in
/// `Unattempted` (or `Submitted`, untouched, for `AlreadySubmitted`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Pattern bank not loaded yet; there is no puzzle to submit against.
    #[error("Puzzle not ready")]
    PuzzleNotReady,

    /// A slot failed validation. Carries the 0-based slot index.
    #[error("{1}")]
    Slot(usize, SlotError),

    /// The three words are not pairwise distinct.
    #[error("Words must be unique.")]
    DuplicateWords,

    /// Difficulty table not loaded; scoring would be meaningless.
    #[error("Difficulty map not loaded.")]
    DifficultyUnavailable,

    /// This device already holds a submission for the current puzzle.
    #[error("This puzzle has already been submitted on this device.")]
    AlreadySubmitted,
}

/// Failure ingesting a static resource.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("bad resource JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_error_messages_match_ui_copy() {
        assert_eq!(SlotError::Required.to_string(), "Required");
        assert_eq!(SlotError::PatternMismatch.to_string(), "Doesn’t match pattern");
        assert_eq!(SlotError::DictionaryUnavailable.to_string(), "Dictionary not loaded");
        assert_eq!(SlotError::NotAWord.to_string(), "Not in dictionary");
    }

    #[test]
    fn submit_slot_error_displays_inner_message() {
        let err = SubmitError::Slot(1, SlotError::NotAWord);
        assert_eq!(err.to_string(), "Not in dictionary");
    }

    #[test]
    fn global_error_messages_match_ui_copy() {
        assert_eq!(SubmitError::DuplicateWords.to_string(), "Words must be unique.");
        assert_eq!(
            SubmitError::DifficultyUnavailable.to_string(),
            "Difficulty map not loaded."
        );
    }
}
