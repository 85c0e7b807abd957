use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use clicktochat_config::{AppConfig, ShareConfig};
use clicktochat_core::{open_link, share_link, Dispatch, TextSharer};
use clicktochat_host::error::HostError;
use clicktochat_host::{opener_from_config, sharer_from_config, DynOpener, DynSharer};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenLink,
    ShareLink,
}

/// Links shared while the terminal is in use, printed after it is restored.
pub type SharedLinks = Rc<RefCell<Vec<String>>>;

pub struct DeferredSharer {
    links: SharedLinks,
}

impl TextSharer for DeferredSharer {
    type Error = HostError;

    fn share_text(&self, text: &str) -> Result<(), HostError> {
        self.links.borrow_mut().push(text.to_string());
        Ok(())
    }
}

pub struct Hosts {
    opener: DynOpener,
    sharer: DynSharer,
    shared_status: &'static str,
}

impl Hosts {
    pub fn new(opener: DynOpener, sharer: DynSharer, shared_status: &'static str) -> Self {
        Self {
            opener,
            sharer,
            shared_status,
        }
    }

    pub fn from_config(config: &AppConfig, deferred: SharedLinks) -> Self {
        match &config.share {
            ShareConfig::Stdout => Self::new(
                opener_from_config(&config.open),
                Box::new(DeferredSharer { links: deferred }),
                "Link will be printed on exit",
            ),
            share => Self::new(
                opener_from_config(&config.open),
                sharer_from_config(share),
                "Shared link",
            ),
        }
    }
}

pub fn execute_action(app: &mut App, hosts: &Hosts, action: Action) -> Result<()> {
    let link = app.compose.link().to_string();
    match action {
        Action::OpenLink => {
            let dispatch = open_link(hosts.opener.as_ref(), &link).with_context(|| "open link")?;
            if dispatch == Dispatch::Sent {
                app.set_status("Opened chat");
            }
        }
        Action::ShareLink => {
            let dispatch =
                share_link(hosts.sharer.as_ref(), &link).with_context(|| "share link")?;
            if dispatch == Dispatch::Sent {
                app.set_status(hosts.shared_status);
            }
        }
    }
    app.clear_error();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute_action, Action, DeferredSharer, Hosts, SharedLinks};
    use crate::app::App;
    use clicktochat_core::{ComposeState, UrlOpener};
    use clicktochat_host::error::HostError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingOpener {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        type Error = HostError;

        fn open_url(&self, url: &str) -> Result<(), HostError> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl UrlOpener for FailingOpener {
        type Error = HostError;

        fn open_url(&self, _url: &str) -> Result<(), HostError> {
            Err(HostError::CommandFailed {
                program: "xdg-open".to_string(),
                status: "exit status: 3".to_string(),
                stderr: String::new(),
            })
        }
    }

    fn hosts(opened: Rc<RefCell<Vec<String>>>, shared: SharedLinks) -> Hosts {
        Hosts::new(
            Box::new(RecordingOpener { seen: opened }),
            Box::new(DeferredSharer { links: shared }),
            "Link will be printed on exit",
        )
    }

    #[test]
    fn open_link_dispatches_current_link() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let hosts = hosts(opened.clone(), SharedLinks::default());
        let mut app = App::new(ComposeState::new("555-0100", "hi"));

        execute_action(&mut app, &hosts, Action::OpenLink).expect("open");
        assert_eq!(
            *opened.borrow(),
            vec!["https://wa.me/5550100?text=hi".to_string()]
        );
        assert_eq!(app.status.as_deref(), Some("Opened chat"));
    }

    #[test]
    fn share_link_defers_until_exit() {
        let shared = SharedLinks::default();
        let hosts = hosts(Rc::new(RefCell::new(Vec::new())), shared.clone());
        let mut app = App::new(ComposeState::new("", "hello"));

        execute_action(&mut app, &hosts, Action::ShareLink).expect("share");
        assert_eq!(
            *shared.borrow(),
            vec!["https://wa.me/?text=hello".to_string()]
        );
        assert_eq!(app.status.as_deref(), Some("Link will be printed on exit"));
    }

    #[test]
    fn blank_link_is_not_dispatched() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let shared = SharedLinks::default();
        let hosts = hosts(opened.clone(), shared.clone());
        let mut app = App::new(ComposeState::default());

        execute_action(&mut app, &hosts, Action::OpenLink).expect("open");
        execute_action(&mut app, &hosts, Action::ShareLink).expect("share");
        assert!(opened.borrow().is_empty());
        assert!(shared.borrow().is_empty());
        assert!(app.status.is_none());
    }

    #[test]
    fn opener_errors_carry_context() {
        let hosts = Hosts::new(
            Box::new(FailingOpener),
            Box::new(DeferredSharer {
                links: SharedLinks::default(),
            }),
            "",
        );
        let mut app = App::new(ComposeState::new("1", ""));
        let err = execute_action(&mut app, &hosts, Action::OpenLink).unwrap_err();
        assert_eq!(err.to_string(), "open link");
        assert!(format!("{err:#}").contains("xdg-open exited with exit status: 3"));
    }
}
