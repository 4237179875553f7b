//! Pinned 32-bit FNV-1a hash.
//! Every past and future day's bonus letter is derived through this exact
//! algorithm; changing it silently reshuffles all of them.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the bytes of `s`.
pub fn fnv1a_32(s: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The bonus letter for a local day key (`YYYY-MM-DD`).
///
/// A pure function of the day key only — not of the puzzle number or the
/// pattern bank — so the letter is stable across reloads and unaffected by
/// bank edits.
pub fn bonus_letter_for(day_key: &str) -> char {
    let idx = fnv1a_32(&format!("BONUS:{day_key}")) % 26;
    (b'A' + idx as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_vectors() {
        // Published FNV-1a 32-bit test vectors.
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn bonus_letter_is_stable() {
        let a = bonus_letter_for("2026-02-25");
        let b = bonus_letter_for("2026-02-25");
        assert_eq!(a, b);
    }

    #[test]
    fn bonus_letter_in_range() {
        for day in ["2026-02-25", "2026-02-26", "2026-12-31", "2027-01-01"] {
            let letter = bonus_letter_for(day);
            assert!(letter.is_ascii_uppercase(), "got {letter} for {day}");
        }
    }

    #[test]
    fn bonus_letter_varies_across_days() {
        // Not guaranteed distinct for any two days, but a run of days must
        // not collapse to a single letter.
        let letters: Vec<char> = (1..=28)
            .map(|d| bonus_letter_for(&format!("2026-02-{d:02}")))
            .collect();
        assert!(letters.iter().any(|&l| l != letters[0]));
    }
}
