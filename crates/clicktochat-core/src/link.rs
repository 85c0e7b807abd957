use crate::domain::{encode_message, extract_digits, is_blank};

pub const BASE_URL: &str = "https://wa.me/";

const TEXT_PARAM: &str = "?text=";

/// Builds the chat deep link for `phone` and `message`.
///
/// Non-digit characters in `phone` are ignored. A blank message adds no query
/// string. When there are no digits and the message is blank the result is the
/// empty string, which callers treat as "no link yet".
pub fn build_link(phone: &str, message: &str) -> String {
    let digits = extract_digits(phone);
    let has_message = !is_blank(message);
    if digits.is_empty() && !has_message {
        return String::new();
    }

    let mut link = String::from(BASE_URL);
    link.push_str(&digits);
    if has_message {
        link.push_str(TEXT_PARAM);
        link.push_str(&encode_message(message));
    }
    link
}
