pub mod compose;
pub mod dispatch;
pub mod domain;
pub mod dto;
pub mod link;

pub use compose::{ComposeSnapshot, ComposeState};
pub use dispatch::{open_link, share_link, Dispatch, TextSharer, UrlOpener};
pub use domain::*;
pub use dto::LinkDto;
pub use link::{build_link, BASE_URL};
