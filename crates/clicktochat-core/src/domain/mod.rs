pub mod message;
pub mod phone;

pub use message::{encode_message, is_blank};
pub use phone::extract_digits;
