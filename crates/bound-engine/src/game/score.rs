use serde::{Deserialize, Serialize};

use crate::puzzle::pattern::Pattern;
use crate::words::difficulty::{DifficultyTable, Tier};

/// Computed outcome of a submission, persisted alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Per-word tiers, in submission order.
    pub tiers: [Tier; 3],
    /// Base points plus bonus points.
    pub score: u32,
    /// +1 per word containing the day's bonus letter.
    pub bonus_points: u32,
    /// Fixed-format text users paste elsewhere; byte-exact contract.
    pub share_text: String,
}

/// Whether the three normalized words are pairwise distinct.
pub fn all_distinct(words: &[String; 3]) -> bool {
    words[0] != words[1] && words[0] != words[2] && words[1] != words[2]
}

/// Score three validated, normalized, pairwise-distinct words.
///
/// Base points come from the difficulty table (absent words score as
/// Elite). Each word containing the bonus letter anywhere adds one point.
/// Reordering the words changes per-word reporting but never the total.
pub fn score_words(
    puzzle_number: u32,
    pattern: &Pattern,
    words: &[String; 3],
    difficulty: &DifficultyTable,
    bonus_letter: char,
) -> ScoreResult {
    let points = [
        difficulty.points_for(&words[0]),
        difficulty.points_for(&words[1]),
        difficulty.points_for(&words[2]),
    ];
    let tiers = [
        Tier::from_points(points[0]),
        Tier::from_points(points[1]),
        Tier::from_points(points[2]),
    ];
    let base: u32 = points.iter().map(|&p| p as u32).sum();

    let bonus = bonus_letter.to_ascii_uppercase();
    let bonus_points = if bonus.is_ascii_uppercase() {
        words.iter().filter(|w| w.contains(bonus)).count() as u32
    } else {
        0
    };

    let score = base + bonus_points;

    let share_text = format!(
        "Bounds #{puzzle_number}\n{} ({})\nScore: {score}\n{}{}{}",
        pattern.display(),
        pattern.len(),
        tiers[0].glyph(),
        tiers[1].glyph(),
        tiers[2].glyph(),
    );

    ScoreResult {
        tiers,
        score,
        bonus_points,
        share_text,
    }
}
