use crate::words::normalize::letters_upper;

/// A fixed-length letter template: first and last letters fixed, interior
/// positions free. Stored compactly as letters and `_`, e.g. `S___E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    compact: String,
}

impl Pattern {
    /// Build a pattern from a bank entry's length and boundary letters.
    /// Lengths below 2 collapse to just the start letter.
    pub fn from_parts(len: usize, start: char, end: char) -> Self {
        let start = start.to_ascii_uppercase();
        let end = end.to_ascii_uppercase();

        let compact = if len < 2 {
            start.to_string()
        } else {
            let mut s = String::with_capacity(len);
            s.push(start);
            for _ in 0..len - 2 {
                s.push('_');
            }
            s.push(end);
            s
        };

        Self { compact }
    }

    /// Number of letter positions.
    pub fn len(&self) -> usize {
        self.compact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compact.is_empty()
    }

    /// Compact form, e.g. `S___E`.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Display form with single-space-separated cells, e.g. `S _ _ _ E`.
    /// This string also appears verbatim in the share text.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(self.compact.len() * 2);
        for (i, c) in self.compact.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// Whether a candidate word satisfies the pattern.
    ///
    /// The candidate is normalized first. It fits iff its length equals the
    /// pattern length and every fixed position matches; blank positions
    /// impose no constraint. No partial credit.
    pub fn fits(&self, word: &str) -> bool {
        let w = letters_upper(word);

        if w.len() != self.compact.len() {
            return false;
        }

        self.compact
            .bytes()
            .zip(w.bytes())
            .all(|(p, c)| p == b'_' || p == c)
    }
}
