use serde::{Deserialize, Serialize};

use crate::domain::extract_digits;
use crate::link::build_link;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDto {
    pub digits: String,
    pub message: String,
    pub link: String,
}

impl LinkDto {
    pub fn new(phone: &str, message: &str) -> Self {
        Self {
            digits: extract_digits(phone),
            message: message.to_string(),
            link: build_link(phone, message),
        }
    }
}
