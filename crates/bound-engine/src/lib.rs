pub mod date;
pub mod game;
pub mod hash;
pub mod puzzle;
pub mod words;

// Re-export key types at crate root for convenience
pub use date::{day_key, default_epoch, millis_until_next_midnight, puzzle_number, ROLLOVER_SLACK_MS};
pub use game::error::{ResourceError, SlotError, SubmitError};
pub use game::score::{all_distinct, score_words, ScoreResult};
pub use game::session::{PuzzleSession, SessionConfig, SLOTS};
pub use game::store::{legacy_lock_key, submission_key, MemoryStore, Submission, SubmissionStore};
pub use hash::{bonus_letter_for, fnv1a_32};
pub use puzzle::bank::{PatternBank, PatternEntry};
pub use puzzle::daily::DailyPuzzle;
pub use puzzle::pattern::Pattern;
pub use words::dictionary::WordDictionary;
pub use words::difficulty::{DifficultyTable, Tier, DEFAULT_POINTS};
pub use words::normalize::letters_upper;
