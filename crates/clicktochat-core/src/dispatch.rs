//! Boundary between the link and the host's open/share primitives.
//!
//! The host supplies implementations of [`UrlOpener`] and [`TextSharer`];
//! [`open_link`] and [`share_link`] skip them when the link is blank.

use crate::domain::is_blank;

pub trait UrlOpener {
    type Error;

    fn open_url(&self, url: &str) -> Result<(), Self::Error>;
}

pub trait TextSharer {
    type Error;

    fn share_text(&self, text: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Sent,
    Skipped,
}

impl Dispatch {
    pub fn was_sent(self) -> bool {
        self == Dispatch::Sent
    }
}

pub fn open_link<O>(opener: &O, link: &str) -> Result<Dispatch, O::Error>
where
    O: UrlOpener + ?Sized,
{
    if is_blank(link) {
        return Ok(Dispatch::Skipped);
    }
    opener.open_url(link)?;
    Ok(Dispatch::Sent)
}

pub fn share_link<S>(sharer: &S, link: &str) -> Result<Dispatch, S::Error>
where
    S: TextSharer + ?Sized,
{
    if is_blank(link) {
        return Ok(Dispatch::Skipped);
    }
    sharer.share_text(link)?;
    Ok(Dispatch::Sent)
}

#[cfg(test)]
mod tests {
    use super::{open_link, share_link, Dispatch, TextSharer, UrlOpener};
    use std::cell::RefCell;
    use std::convert::Infallible;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl UrlOpener for Recorder {
        type Error = Infallible;

        fn open_url(&self, url: &str) -> Result<(), Self::Error> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    impl TextSharer for Recorder {
        type Error = Infallible;

        fn share_text(&self, text: &str) -> Result<(), Self::Error> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl UrlOpener for Broken {
        type Error = String;

        fn open_url(&self, _url: &str) -> Result<(), Self::Error> {
            Err("no handler".to_string())
        }
    }

    #[test]
    fn open_link_skips_blank_links() {
        let recorder = Recorder::default();
        assert_eq!(open_link(&recorder, ""), Ok(Dispatch::Skipped));
        assert_eq!(open_link(&recorder, "  "), Ok(Dispatch::Skipped));
        assert!(recorder.seen.borrow().is_empty());
    }

    #[test]
    fn open_link_hands_link_to_opener() {
        let recorder = Recorder::default();
        let result = open_link(&recorder, "https://wa.me/42");
        assert_eq!(result, Ok(Dispatch::Sent));
        assert_eq!(*recorder.seen.borrow(), vec!["https://wa.me/42".to_string()]);
    }

    #[test]
    fn share_link_skips_blank_and_sends_text() {
        let recorder = Recorder::default();
        assert_eq!(share_link(&recorder, ""), Ok(Dispatch::Skipped));
        assert_eq!(
            share_link(&recorder, "https://wa.me/?text=hi"),
            Ok(Dispatch::Sent)
        );
        assert_eq!(
            *recorder.seen.borrow(),
            vec!["https://wa.me/?text=hi".to_string()]
        );
    }

    #[test]
    fn open_link_propagates_host_errors() {
        assert_eq!(
            open_link(&Broken, "https://wa.me/1"),
            Err("no handler".to_string())
        );
        assert!(!open_link(&Broken, "").unwrap().was_sent());
    }

    #[test]
    fn open_link_accepts_trait_objects() {
        let recorder = Recorder::default();
        let opener: &dyn UrlOpener<Error = Infallible> = &recorder;
        assert_eq!(open_link(opener, "https://wa.me/7"), Ok(Dispatch::Sent));
    }
}
