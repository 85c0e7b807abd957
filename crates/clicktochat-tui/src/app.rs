use std::collections::VecDeque;

use clicktochat_core::ComposeState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::Action;

pub const MESSAGE_VISIBLE_LINES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Phone,
    Message,
    Share,
    Open,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Phone => Focus::Message,
            Focus::Message => Focus::Share,
            Focus::Share => Focus::Open,
            Focus::Open => Focus::Phone,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Phone => Focus::Open,
            Focus::Message => Focus::Phone,
            Focus::Share => Focus::Message,
            Focus::Open => Focus::Share,
        }
    }

    pub fn is_button(self) -> bool {
        matches!(self, Focus::Share | Focus::Open)
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub compose: ComposeState,
    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub error: Option<String>,
    /// Whether the fields are written back to the state file on quit.
    pub saves_on_exit: bool,
    actions: VecDeque<Action>,
}

impl App {
    pub fn new(compose: ComposeState) -> Self {
        Self {
            compose,
            focus: Focus::Phone,
            show_help: false,
            should_quit: false,
            status: None,
            error: None,
            saves_on_exit: false,
            actions: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Open and share stay disabled until there is a link.
    pub fn actions_enabled(&self) -> bool {
        !self.compose.is_link_blank()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('o') if ctrl => self.request(Action::OpenLink),
            KeyCode::Char('s') if ctrl => self.request(Action::ShareLink),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Left | KeyCode::Right if self.focus.is_button() => {
                self.focus = match self.focus {
                    Focus::Share => Focus::Open,
                    _ => Focus::Share,
                };
            }
            KeyCode::Enter => self.handle_enter(),
            _ => self.edit_focused(key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Phone => {
                let mut phone = self.compose.phone().to_string();
                phone.extend(text.chars().filter(|ch| !matches!(ch, '\r' | '\n')));
                self.compose.set_phone(phone);
            }
            Focus::Message => {
                let mut message = self.compose.message().to_string();
                message.push_str(&text.replace("\r\n", "\n"));
                self.compose.set_message(message);
            }
            Focus::Share | Focus::Open => {}
        }
    }

    fn handle_enter(&mut self) {
        match self.focus {
            Focus::Phone => self.focus = Focus::Message,
            Focus::Message => {
                let mut message = self.compose.message().to_string();
                message.push('\n');
                self.compose.set_message(message);
            }
            Focus::Share => self.request(Action::ShareLink),
            Focus::Open => self.request(Action::OpenLink),
        }
    }

    fn request(&mut self, action: Action) {
        if self.actions_enabled() {
            self.enqueue(action);
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Phone => {
                let mut phone = self.compose.phone().to_string();
                if apply_text_input(&mut phone, key) {
                    self.compose.set_phone(phone);
                }
            }
            Focus::Message => {
                let mut message = self.compose.message().to_string();
                if apply_text_input(&mut message, key) {
                    self.compose.set_message(message);
                }
            }
            Focus::Share | Focus::Open => {}
        }
    }
}

/// Applies an editing key to `target`; returns whether the text changed.
fn apply_text_input(target: &mut String, key: KeyEvent) -> bool {
    let before = target.len();
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            target.push(ch);
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => return false,
    }
    target.len() != before
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}
