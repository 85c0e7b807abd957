/// Keeps the ASCII digits of `value` and drops everything else.
///
/// Digits from other scripts (`٣`, `３`) are dropped as well, since the chat
/// link host only accepts `0-9` in the number.
pub fn extract_digits(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}
