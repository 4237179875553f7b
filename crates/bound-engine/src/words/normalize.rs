/// Strip everything but ASCII letters and uppercase the rest.
/// Every word comparison in the engine goes through this first.
pub fn letters_upper(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
