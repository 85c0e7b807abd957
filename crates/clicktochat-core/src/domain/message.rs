use url::form_urlencoded::byte_serialize;

/// Whitespace-only text counts as blank, same as empty text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Encodes `value` as a query component: space becomes `+`, alphanumerics and
/// `*-._` pass through, every other UTF-8 byte becomes `%XX`.
pub fn encode_message(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
