use serde::{Deserialize, Serialize};

/// One record of the bundled pattern bank (`bound-patterns.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Word length.
    pub len: u32,
    /// Fixed first letter, `A`..`Z`.
    pub start: char,
    /// Fixed last letter, `A`..`Z`.
    pub end: char,
    /// How many candidate words exist in the source word list.
    #[serde(default)]
    pub count: u32,
}

/// Ordered pattern bank loaded once per session.
/// Puzzle numbers cycle through the bank; once it is exhausted, patterns
/// repeat in the same order.
pub struct PatternBank {
    entries: Vec<PatternEntry>,
}

impl PatternBank {
    pub fn new(entries: Vec<PatternEntry>) -> Self {
        Self { entries }
    }

    /// Parse a bank from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<PatternEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Entry for a 1-based puzzle number, wrapping around the bank.
    /// `None` only when the bank is empty.
    pub fn entry_for(&self, puzzle_number: u32) -> Option<&PatternEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = (puzzle_number.saturating_sub(1) as usize) % self.entries.len();
        self.entries.get(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK_JSON: &str = r#"[
        { "len": 5, "start": "S", "end": "E", "count": 120 },
        { "len": 6, "start": "B", "end": "D", "count": 80 },
        { "len": 7, "start": "C", "end": "N", "count": 61 }
    ]"#;

    #[test]
    fn parses_bank_json() {
        let bank = PatternBank::from_json(BANK_JSON).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.entry_for(1).unwrap().start, 'S');
        assert_eq!(bank.entry_for(2).unwrap().len, 6);
    }

    #[test]
    fn count_is_optional() {
        let bank =
            PatternBank::from_json(r#"[{ "len": 5, "start": "S", "end": "E" }]"#).unwrap();
        assert_eq!(bank.entry_for(1).unwrap().count, 0);
    }

    #[test]
    fn cycles_when_exhausted() {
        let bank = PatternBank::from_json(BANK_JSON).unwrap();
        // 4 wraps to the first entry, 6 to the last.
        assert_eq!(bank.entry_for(4).unwrap().start, 'S');
        assert_eq!(bank.entry_for(6).unwrap().start, 'C');
    }

    #[test]
    fn empty_bank_has_no_entry() {
        let bank = PatternBank::new(Vec::new());
        assert!(bank.entry_for(1).is_none());
    }
}
