use serde::{Deserialize, Serialize};

use crate::domain::is_blank;
use crate::link::build_link;

/// The two text fields of the compose screen and the link derived from them.
///
/// Every setter recomputes `link`, so it always equals
/// `build_link(phone, message)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeState {
    phone: String,
    message: String,
    link: String,
}

/// Persisted part of [`ComposeState`]. The link is derived and never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeSnapshot {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ComposeState {
    pub fn new(phone: impl Into<String>, message: impl Into<String>) -> Self {
        let mut state = Self {
            phone: phone.into(),
            message: message.into(),
            link: String::new(),
        };
        state.relink();
        state
    }

    pub fn restore(snapshot: ComposeSnapshot) -> Self {
        Self::new(snapshot.phone, snapshot.message)
    }

    pub fn snapshot(&self) -> ComposeSnapshot {
        ComposeSnapshot {
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// True when there is no link to open or share.
    pub fn is_link_blank(&self) -> bool {
        is_blank(&self.link)
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
        self.relink();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
        self.relink();
    }

    pub fn clear_phone(&mut self) {
        self.set_phone(String::new());
    }

    pub fn clear_message(&mut self) {
        self.set_message(String::new());
    }

    fn relink(&mut self) {
        self.link = build_link(&self.phone, &self.message);
    }
}

impl From<ComposeSnapshot> for ComposeState {
    fn from(snapshot: ComposeSnapshot) -> Self {
        Self::restore(snapshot)
    }
}
