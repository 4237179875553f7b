use chrono::NaiveDate;

use crate::date::{day_key, puzzle_number};
use crate::hash::bonus_letter_for;
use crate::puzzle::bank::PatternBank;
use crate::puzzle::pattern::Pattern;

/// The puzzle derived for one local calendar day. Never persisted;
/// recomputed whenever the active day changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    /// 1-based ordinal since the epoch date.
    pub number: u32,
    pub pattern: Pattern,
    /// Contained anywhere in a word, it scores +1.
    pub bonus_letter: char,
}

impl DailyPuzzle {
    /// Derive the active puzzle for `today`. `None` until the pattern bank
    /// has loaded (an empty bank never selects an entry).
    pub fn derive(bank: &PatternBank, epoch: NaiveDate, today: NaiveDate) -> Option<Self> {
        let number = puzzle_number(epoch, today);
        let entry = bank.entry_for(number)?;

        Some(Self {
            number,
            pattern: Pattern::from_parts(entry.len as usize, entry.start, entry.end),
            bonus_letter: bonus_letter_for(&day_key(today)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::bank::PatternEntry;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bank() -> PatternBank {
        PatternBank::new(vec![
            PatternEntry { len: 5, start: 'S', end: 'E', count: 120 },
            PatternEntry { len: 6, start: 'B', end: 'D', count: 80 },
        ])
    }

    #[test]
    fn derives_day_one() {
        let p = DailyPuzzle::derive(&bank(), ymd(2026, 2, 25), ymd(2026, 2, 25)).unwrap();
        assert_eq!(p.number, 1);
        assert_eq!(p.pattern.display(), "S _ _ _ E");
    }

    #[test]
    fn second_day_picks_second_entry() {
        let p = DailyPuzzle::derive(&bank(), ymd(2026, 2, 25), ymd(2026, 2, 26)).unwrap();
        assert_eq!(p.number, 2);
        assert_eq!(p.pattern.compact(), "B____D");
    }

    #[test]
    fn bonus_letter_independent_of_bank() {
        let today = ymd(2026, 2, 25);
        let epoch = today;
        let small = DailyPuzzle::derive(&bank(), epoch, today).unwrap();

        let big = PatternBank::new(
            (0..50u32)
                .map(|i| PatternEntry { len: 5 + (i % 3), start: 'A', end: 'Z', count: 99 })
                .collect(),
        );
        let other = DailyPuzzle::derive(&big, epoch, today).unwrap();

        assert_eq!(small.bonus_letter, other.bonus_letter);
    }

    #[test]
    fn empty_bank_yields_none() {
        let empty = PatternBank::new(Vec::new());
        assert!(DailyPuzzle::derive(&empty, ymd(2026, 2, 25), ymd(2026, 2, 25)).is_none());
    }
}
