use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::words::normalize::letters_upper;

/// Points assigned to a word absent from the difficulty table.
/// Unknown words score as hardest, never free.
pub const DEFAULT_POINTS: u8 = 4;

/// Display bucket for a word's difficulty points. The four buckets are the
/// 1–4 points scale verbatim, not a re-bucketing.
///
/// Serialized as the tier glyph so persisted records match the share text
/// and the format written by earlier releases of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "🟦")]
    Common,
    #[serde(rename = "🟨")]
    Uncommon,
    #[serde(rename = "🟧")]
    Rare,
    #[serde(rename = "🟥")]
    Elite,
}

impl Tier {
    /// Map difficulty points to a tier. Out-of-range values clamp to the
    /// nearest bucket.
    pub fn from_points(points: u8) -> Self {
        match points {
            0 | 1 => Tier::Common,
            2 => Tier::Uncommon,
            3 => Tier::Rare,
            _ => Tier::Elite,
        }
    }

    pub fn points(self) -> u8 {
        match self {
            Tier::Common => 1,
            Tier::Uncommon => 2,
            Tier::Rare => 3,
            Tier::Elite => 4,
        }
    }

    /// Colored square used in the share text and legend.
    pub fn glyph(self) -> &'static str {
        match self {
            Tier::Common => "🟦",
            Tier::Uncommon => "🟨",
            Tier::Rare => "🟧",
            Tier::Elite => "🟥",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Uncommon => "Uncommon",
            Tier::Rare => "Rare",
            Tier::Elite => "Elite",
        }
    }
}

/// Difficulty table (`bound-difficulty.json`): normalized word → points
/// 1..=4, derived offline from age-of-acquisition data.
pub struct DifficultyTable {
    points: HashMap<String, u8>,
}

impl DifficultyTable {
    /// Parse a table from a JSON object of word → points.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let points: HashMap<String, u8> = serde_json::from_str(json)?;
        Ok(Self { points })
    }

    /// Points for the normalized form of `word`; absent words default to
    /// [`DEFAULT_POINTS`]. Table values are clamped into 1..=4.
    pub fn points_for(&self, word: &str) -> u8 {
        self.points
            .get(&letters_upper(word))
            .map(|&p| p.clamp(1, 4))
            .unwrap_or(DEFAULT_POINTS)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_words_use_table_points() {
        let table = DifficultyTable::from_json(r#"{ "CAT": 1, "DOG": 2 }"#).unwrap();
        assert_eq!(table.points_for("CAT"), 1);
        assert_eq!(table.points_for("dog"), 2);
    }

    #[test]
    fn unknown_words_default_to_elite() {
        let table = DifficultyTable::from_json(r#"{ "CAT": 1 }"#).unwrap();
        assert_eq!(table.points_for("FOX"), DEFAULT_POINTS);
    }

    #[test]
    fn out_of_range_points_clamp() {
        let table = DifficultyTable::from_json(r#"{ "ODD": 0, "BIG": 9 }"#).unwrap();
        assert_eq!(table.points_for("ODD"), 1);
        assert_eq!(table.points_for("BIG"), 4);
    }

    #[test]
    fn tier_mapping_is_the_points_scale() {
        assert_eq!(Tier::from_points(1), Tier::Common);
        assert_eq!(Tier::from_points(2), Tier::Uncommon);
        assert_eq!(Tier::from_points(3), Tier::Rare);
        assert_eq!(Tier::from_points(4), Tier::Elite);
        // Clamping at the edges.
        assert_eq!(Tier::from_points(0), Tier::Common);
        assert_eq!(Tier::from_points(7), Tier::Elite);
    }

    #[test]
    fn tier_serializes_as_glyph() {
        let json = serde_json::to_string(&Tier::Common).unwrap();
        assert_eq!(json, "\"🟦\"");
        let back: Tier = serde_json::from_str("\"🟥\"").unwrap();
        assert_eq!(back, Tier::Elite);
    }
}
