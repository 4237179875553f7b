pub mod runner;
pub mod storage;

pub use runner::WebRunner;
pub use storage::LocalStore;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Bound not initialized. Call bound_init() first.");
        f(runner)
    })
}

/// Initialize the puzzle session: restores any stored submission for
/// today's puzzle and arms the midnight rollover timer.
#[wasm_bindgen]
pub fn bound_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = WebRunner::new();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    schedule_midnight_rollover();
    log::info!("bound: initialized");
}

/// One-shot timer to the next local midnight, re-armed after each firing.
/// Recomputing the delay at arm time keeps long-lived tabs correct across
/// DST shifts.
fn schedule_midnight_rollover() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let delay = with_runner(|r| r.millis_until_rollover());
    let delay = delay.clamp(0, i32::MAX as i64) as i32;

    let callback = Closure::once_into_js(move || {
        with_runner(|r| r.roll_check());
        schedule_midnight_rollover();
    });

    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        .is_err()
    {
        log::warn!("failed to arm midnight rollover timer");
    }
}

// ---- Resource ingestion ----
// The JS host fetches the static JSON resources; Rust parses and owns them.
// Each fetch carries the ticket returned by `bound_load_ticket()` so a
// delivery that arrives after a day rollover is discarded, not applied.

#[wasm_bindgen]
pub fn bound_load_ticket() -> u32 {
    with_runner(|r| r.load_ticket())
}

#[wasm_bindgen]
pub fn bound_load_patterns(json: &str, requested_for: u32) {
    with_runner(|r| r.load_patterns(json, requested_for));
}

#[wasm_bindgen]
pub fn bound_load_dictionary(json: &str, requested_for: u32) {
    with_runner(|r| r.load_dictionary(json, requested_for));
}

#[wasm_bindgen]
pub fn bound_load_difficulty(json: &str, requested_for: u32) {
    with_runner(|r| r.load_difficulty(json, requested_for));
}

// ---- Input ----

#[wasm_bindgen]
pub fn bound_set_word(slot: u32, text: &str) {
    with_runner(|r| r.set_word(slot, text));
}

/// Validate one slot (field blur). Returns the inline error message, or
/// `undefined` when the word is acceptable.
#[wasm_bindgen]
pub fn bound_validate_word(slot: u32) -> Option<String> {
    with_runner(|r| r.validate_word(slot).map(|e| e.to_string()))
}

/// Attempt the one submission for today's puzzle. Returns the error
/// message to surface, or `undefined` on success.
#[wasm_bindgen]
pub fn bound_submit() -> Option<String> {
    with_runner(|r| r.submit().err().map(|e| e.to_string()))
}

/// Re-check the local date (e.g. on visibilitychange) and roll the puzzle
/// if midnight passed while the tab was suspended.
#[wasm_bindgen]
pub fn bound_roll_check() {
    with_runner(|r| r.roll_check());
}

// ---- State accessors ----

#[wasm_bindgen]
pub fn bound_puzzle_number() -> u32 {
    with_runner(|r| r.session().puzzle_number())
}

/// Display form of today's pattern (e.g. `"S _ _ _ E"`), or `undefined`
/// until the pattern bank has loaded.
#[wasm_bindgen]
pub fn bound_pattern() -> Option<String> {
    with_runner(|r| r.session().puzzle().map(|p| p.pattern.display()))
}

#[wasm_bindgen]
pub fn bound_pattern_len() -> u32 {
    with_runner(|r| {
        r.session()
            .puzzle()
            .map(|p| p.pattern.len() as u32)
            .unwrap_or(0)
    })
}

#[wasm_bindgen]
pub fn bound_bonus_letter() -> String {
    with_runner(|r| r.session().bonus_letter().to_string())
}

#[wasm_bindgen]
pub fn bound_is_ready() -> bool {
    with_runner(|r| r.session().is_ready())
}

#[wasm_bindgen]
pub fn bound_is_locked() -> bool {
    with_runner(|r| r.session().locked())
}

#[wasm_bindgen]
pub fn bound_word(slot: u32) -> String {
    with_runner(|r| {
        if (slot as usize) < bound_engine::SLOTS {
            r.session().word(slot as usize).to_string()
        } else {
            String::new()
        }
    })
}

#[wasm_bindgen]
pub fn bound_slot_error(slot: u32) -> Option<String> {
    with_runner(|r| {
        if (slot as usize) < bound_engine::SLOTS {
            r.session().slot_error(slot as usize).map(|e| e.to_string())
        } else {
            None
        }
    })
}

#[wasm_bindgen]
pub fn bound_global_error() -> Option<String> {
    with_runner(|r| r.session().global_error().map(|e| e.to_string()))
}

#[wasm_bindgen]
pub fn bound_score() -> Option<u32> {
    with_runner(|r| r.session().submission().map(|s| s.score_result.score))
}

/// The exact text for the share/copy action; `undefined` until submitted.
#[wasm_bindgen]
pub fn bound_share_text() -> Option<String> {
    with_runner(|r| {
        r.session()
            .submission()
            .map(|s| s.score_result.share_text.clone())
    })
}

/// Full submission record as JSON for the results panel; `undefined`
/// until submitted.
#[wasm_bindgen]
pub fn bound_submission_json() -> Option<String> {
    with_runner(|r| {
        r.session()
            .submission()
            .and_then(|s| serde_json::to_string(s).ok())
    })
}
