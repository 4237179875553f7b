use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use bound_engine::{
    millis_until_next_midnight, PuzzleSession, SessionConfig, SlotError, SubmitError, SLOTS,
};

use crate::storage::LocalStore;

/// Browser-side session runner.
///
/// The TypeScript host fetches the static JSON resources and pushes the
/// strings in; this runner reads the local clock, guards against stale
/// deliveries and forwards everything else to the engine session.
pub struct WebRunner {
    session: PuzzleSession<LocalStore>,
}

impl WebRunner {
    pub fn new() -> Self {
        let session = PuzzleSession::new(LocalStore::new(), SessionConfig::default(), local_today());
        Self { session }
    }

    // ---- Resource ingestion ----

    /// Ticket for an outgoing fetch: the puzzle number it was requested
    /// for. Deliveries carrying a stale ticket are discarded.
    pub fn load_ticket(&self) -> u32 {
        self.session.puzzle_number()
    }

    fn delivery_is_current(&mut self, requested_for: u32, what: &str) -> bool {
        // The day may have rolled over while the fetch was in flight.
        self.roll_check();
        if requested_for != self.session.puzzle_number() {
            log::info!("discarding stale {what} delivery (requested for puzzle #{requested_for})");
            return false;
        }
        true
    }

    pub fn load_patterns(&mut self, json: &str, requested_for: u32) {
        if !self.delivery_is_current(requested_for, "pattern bank") {
            return;
        }
        if let Err(err) = self.session.install_patterns(json) {
            log::warn!("pattern bank rejected: {err}");
        }
    }

    pub fn load_dictionary(&mut self, json: &str, requested_for: u32) {
        if !self.delivery_is_current(requested_for, "dictionary") {
            return;
        }
        if let Err(err) = self.session.install_dictionary(json) {
            log::warn!("dictionary rejected: {err}");
        }
    }

    pub fn load_difficulty(&mut self, json: &str, requested_for: u32) {
        if !self.delivery_is_current(requested_for, "difficulty table") {
            return;
        }
        if let Err(err) = self.session.install_difficulty(json) {
            log::warn!("difficulty table rejected: {err}");
        }
    }

    // ---- Day handling ----

    /// Re-read the local date and roll the session if it changed. Called
    /// by the midnight timer and before applying resource deliveries.
    pub fn roll_check(&mut self) {
        self.session.roll_day(local_today());
    }

    /// Delay until the next local midnight, recomputed from the clock now.
    pub fn millis_until_rollover(&self) -> i64 {
        millis_until_next_midnight(local_now())
    }

    // ---- Input and submission ----

    pub fn set_word(&mut self, slot: u32, text: &str) {
        if let Some(slot) = checked_slot(slot) {
            self.session.set_word(slot, text);
        }
    }

    pub fn validate_word(&mut self, slot: u32) -> Option<SlotError> {
        let slot = checked_slot(slot)?;
        self.session.validate_slot(slot).err()
    }

    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.session.submit(&now_iso())
    }

    pub fn session(&self) -> &PuzzleSession<LocalStore> {
        &self.session
    }
}

fn checked_slot(slot: u32) -> Option<usize> {
    let slot = slot as usize;
    if slot >= SLOTS {
        log::warn!("ignoring out-of-range slot {slot}");
        return None;
    }
    Some(slot)
}

/// Local calendar date from the browser clock.
fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    // Unreachable for a real clock.
    .unwrap_or(NaiveDate::MIN)
}

/// Local wall-clock time from the browser clock.
fn local_now() -> NaiveDateTime {
    let now = js_sys::Date::new_0();
    let date = local_today();
    date.and_hms_milli_opt(
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
        now.get_milliseconds(),
    )
    .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

/// ISO-8601 submission timestamp from the browser clock.
fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
