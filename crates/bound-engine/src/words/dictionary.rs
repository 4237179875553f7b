use std::collections::HashMap;

use crate::words::normalize::letters_upper;

/// Validity word list (`subtlex-us-zipf.json`): normalized word → Zipf
/// frequency. Only presence is contractual; the frequency is carried for
/// future use.
pub struct WordDictionary {
    words: HashMap<String, f64>,
}

impl WordDictionary {
    /// Parse a dictionary from a JSON object of word → frequency.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let words: HashMap<String, f64> = serde_json::from_str(json)?;
        Ok(Self { words })
    }

    /// Whether the normalized form of `word` is a valid word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&letters_upper(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
