use chrono::NaiveDate;

use crate::date;
use crate::game::error::{ResourceError, SlotError, SubmitError};
use crate::game::score::{all_distinct, score_words};
use crate::game::store::{Submission, SubmissionStore};
use crate::hash::bonus_letter_for;
use crate::puzzle::bank::PatternBank;
use crate::puzzle::daily::DailyPuzzle;
use crate::words::dictionary::WordDictionary;
use crate::words::difficulty::DifficultyTable;
use crate::words::normalize::letters_upper;

/// Number of word slots in a submission.
pub const SLOTS: usize = 3;

/// Session configuration, provided by the host.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Local date on which puzzle #1 ran.
    pub epoch: NaiveDate,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            epoch: date::default_epoch(),
        }
    }
}

/// Submission guard state. Terminal once `Submitted` for a puzzle number;
/// only a day rollover starts a fresh machine for the next number.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Unattempted,
    Submitted(Submission),
}

/// One device's session for the daily puzzle.
///
/// Owns all mutable state: the three static resources (installed once,
/// memoized for the session), the day's derived puzzle, the in-progress
/// word slots with their errors, and the submission guard. The host injects
/// dates, timestamps and a [`SubmissionStore`], so every operation is
/// deterministic under test.
pub struct PuzzleSession<S: SubmissionStore> {
    config: SessionConfig,
    store: S,
    today: NaiveDate,
    bank: Option<PatternBank>,
    dictionary: Option<WordDictionary>,
    difficulty: Option<DifficultyTable>,
    puzzle: Option<DailyPuzzle>,
    slots: [String; SLOTS],
    slot_errors: [Option<SlotError>; SLOTS],
    global_error: Option<SubmitError>,
    phase: Phase,
}

impl<S: SubmissionStore> PuzzleSession<S> {
    /// Create a session for the given local date and restore any stored
    /// submission for that day's puzzle number.
    pub fn new(store: S, config: SessionConfig, today: NaiveDate) -> Self {
        let mut session = Self {
            config,
            store,
            today,
            bank: None,
            dictionary: None,
            difficulty: None,
            puzzle: None,
            slots: Default::default(),
            slot_errors: [None; SLOTS],
            global_error: None,
            phase: Phase::Unattempted,
        };
        session.reset_for_day();
        session
    }

    // ---- Resource installs (first successful load wins) ----

    /// Install the pattern bank and derive the day's puzzle.
    /// A second install is ignored; resources are session-lifetime.
    pub fn install_patterns(&mut self, json: &str) -> Result<(), ResourceError> {
        if self.bank.is_some() {
            return Ok(());
        }
        let bank = PatternBank::from_json(json)?;
        log::info!("pattern bank loaded: {} entries", bank.len());
        self.bank = Some(bank);
        self.rederive();
        Ok(())
    }

    /// Install the validity word list. A second install is ignored.
    pub fn install_dictionary(&mut self, json: &str) -> Result<(), ResourceError> {
        if self.dictionary.is_some() {
            return Ok(());
        }
        let dictionary = WordDictionary::from_json(json)?;
        log::info!("dictionary loaded: {} words", dictionary.len());
        self.dictionary = Some(dictionary);
        Ok(())
    }

    /// Install the difficulty table. A second install is ignored.
    pub fn install_difficulty(&mut self, json: &str) -> Result<(), ResourceError> {
        if self.difficulty.is_some() {
            return Ok(());
        }
        let difficulty = DifficultyTable::from_json(json)?;
        log::info!("difficulty table loaded: {} words", difficulty.len());
        self.difficulty = Some(difficulty);
        Ok(())
    }

    // ---- Day handling ----

    /// Switch the session to a new local date. A no-op for the same date;
    /// otherwise discards all in-progress input, derives the new day's
    /// puzzle and restores that day's stored submission if one exists.
    pub fn roll_day(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        log::info!("day rollover: {} -> {}", self.today, today);
        self.today = today;
        self.rederive();
        self.reset_for_day();
    }

    fn rederive(&mut self) {
        self.puzzle = self
            .bank
            .as_ref()
            .and_then(|bank| DailyPuzzle::derive(bank, self.config.epoch, self.today));
    }

    /// Clear input state, then restore the current puzzle number's stored
    /// submission. Restoring enters `Submitted` directly without
    /// re-validating or re-scoring; it is not itself a submission.
    fn reset_for_day(&mut self) {
        self.slots = Default::default();
        self.slot_errors = [None; SLOTS];
        self.global_error = None;
        self.phase = Phase::Unattempted;

        if let Some(stored) = self.store.get(self.puzzle_number()) {
            log::info!("restored submission for puzzle #{}", stored.puzzle_number);
            self.slots = stored.words.clone();
            self.phase = Phase::Submitted(stored);
        }
    }

    // ---- Input ----

    /// Replace a slot's text (normalized on entry). Editing clears that
    /// slot's error and any global error. Ignored once locked.
    pub fn set_word(&mut self, slot: usize, text: &str) {
        if self.locked() {
            return;
        }
        self.slots[slot] = letters_upper(text);
        self.slot_errors[slot] = None;
        self.global_error = None;
    }

    /// Validate one slot (e.g. on field blur), recording the error so the
    /// UI can surface it. Slots validate independently of each other.
    pub fn validate_slot(&mut self, slot: usize) -> Result<(), SlotError> {
        if self.locked() {
            return Ok(());
        }

        self.slot_errors[slot] = None;
        self.global_error = None;

        let result = self.check_slot(slot);
        if let Err(err) = result {
            self.slot_errors[slot] = Some(err);
        }
        result
    }

    /// Short-circuiting slot checks. Any missing resource fails closed as
    /// unavailable rather than judging the word.
    fn check_slot(&self, slot: usize) -> Result<(), SlotError> {
        let word = &self.slots[slot];

        if word.is_empty() {
            return Err(SlotError::Required);
        }

        let puzzle = self
            .puzzle
            .as_ref()
            .ok_or(SlotError::DictionaryUnavailable)?;
        if !puzzle.pattern.fits(word) {
            return Err(SlotError::PatternMismatch);
        }

        let dictionary = self
            .dictionary
            .as_ref()
            .ok_or(SlotError::DictionaryUnavailable)?;
        if !dictionary.contains(word) {
            return Err(SlotError::NotAWord);
        }

        Ok(())
    }

    // ---- Submission ----

    /// Attempt the one submission for the current puzzle number.
    ///
    /// Fires only when the puzzle is derived, all three slots validate,
    /// the words are pairwise distinct and the difficulty table is loaded.
    /// On success the scored record is persisted and the guard locks;
    /// every later call is a no-op returning `AlreadySubmitted`.
    pub fn submit(&mut self, submitted_at: &str) -> Result<(), SubmitError> {
        if self.locked() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.puzzle.is_none() {
            return Err(SubmitError::PuzzleNotReady);
        }

        self.global_error = None;

        // Validate every slot even after one fails so each field carries
        // its own error; the first failure is reported.
        let mut first_failure = None;
        for slot in 0..SLOTS {
            if let Err(err) = self.validate_slot(slot) {
                first_failure.get_or_insert(SubmitError::Slot(slot, err));
            }
        }
        if let Some(err) = first_failure {
            return Err(err);
        }

        let words = self.slots.clone();
        if !all_distinct(&words) {
            self.global_error = Some(SubmitError::DuplicateWords);
            return Err(SubmitError::DuplicateWords);
        }

        let Some(difficulty) = self.difficulty.as_ref() else {
            self.global_error = Some(SubmitError::DifficultyUnavailable);
            return Err(SubmitError::DifficultyUnavailable);
        };
        let Some(puzzle) = self.puzzle.as_ref() else {
            return Err(SubmitError::PuzzleNotReady);
        };

        let score_result = score_words(
            puzzle.number,
            &puzzle.pattern,
            &words,
            difficulty,
            puzzle.bonus_letter,
        );

        let submission = Submission {
            puzzle_number: puzzle.number,
            pattern: puzzle.pattern.display(),
            words,
            score_result,
            submitted_at: submitted_at.to_string(),
        };

        self.store.put(&submission);
        log::info!(
            "puzzle #{} submitted, score {}",
            submission.puzzle_number,
            submission.score_result.score
        );
        self.phase = Phase::Submitted(submission);

        Ok(())
    }

    // ---- Accessors ----

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Current puzzle number; derivable before the bank loads.
    pub fn puzzle_number(&self) -> u32 {
        date::puzzle_number(self.config.epoch, self.today)
    }

    /// The day's bonus letter; pure in the day key, available before any
    /// resource loads.
    pub fn bonus_letter(&self) -> char {
        bonus_letter_for(&date::day_key(self.today))
    }

    pub fn puzzle(&self) -> Option<&DailyPuzzle> {
        self.puzzle.as_ref()
    }

    /// Whether the pattern bank has loaded and a puzzle is derived.
    pub fn is_ready(&self) -> bool {
        self.puzzle.is_some()
    }

    pub fn locked(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn submission(&self) -> Option<&Submission> {
        match &self.phase {
            Phase::Submitted(submission) => Some(submission),
            Phase::Unattempted => None,
        }
    }

    pub fn word(&self, slot: usize) -> &str {
        &self.slots[slot]
    }

    pub fn slot_error(&self, slot: usize) -> Option<SlotError> {
        self.slot_errors[slot]
    }

    pub fn global_error(&self) -> Option<SubmitError> {
        self.global_error
    }
}
