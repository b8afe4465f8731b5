//! # Console Mediator
//!
//! Collects one line of output per counter change. The view component is a
//! shared line buffer so whoever created it can print or inspect it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use super::notes;
use crate::patterns::{Body, CoreLink, Mediator, Notification, Notifier};

/// Output lines written by the console mediator
pub type ConsoleLines = Rc<RefCell<Vec<String>>>;

pub struct ConsoleMediator {
    link: CoreLink,
    lines: ConsoleLines,
}

impl ConsoleMediator {
    pub const NAME: &'static str = "ConsoleMediator";

    pub fn new(lines: ConsoleLines) -> Self {
        Self {
            link: CoreLink::new(),
            lines,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Shared handle to the line buffer this mediator writes to
    pub fn buffer(&self) -> ConsoleLines {
        Rc::clone(&self.lines)
    }

    fn write(&self, line: String) {
        info!("{}", line);
        self.lines.borrow_mut().push(line);
    }
}

impl Notifier for ConsoleMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for ConsoleMediator {
    fn mediator_name(&self) -> &str {
        Self::NAME
    }

    fn view_component(&self) -> Option<Body> {
        Some(Body::new(Rc::clone(&self.lines)))
    }

    fn list_notification_interests(&self) -> Vec<String> {
        vec![
            notes::COUNTER_CHANGED.to_string(),
            notes::SHUTDOWN.to_string(),
        ]
    }

    fn handle_notification(&self, notification: &Notification) -> anyhow::Result<()> {
        match notification.name() {
            notes::COUNTER_CHANGED => {
                let value = notification
                    .body_as::<i64>()
                    .ok_or_else(|| anyhow::anyhow!("counter change without a value"))?;
                match notification.notification_type() {
                    Some(notes::RESET_TYPE) => self.write(format!("counter reset to {value}")),
                    _ => self.write(format!("counter is now {value}")),
                }
            }
            notes::SHUTDOWN => {
                self.write("shutting down".to_string());
                self.facade()?.remove_mediator(Self::NAME);
            }
            _ => {}
        }
        Ok(())
    }

    fn on_register(&self) {
        self.write(format!(
            "console attached to core '{}'",
            self.multiton_key().unwrap_or_default()
        ));
    }

    fn on_remove(&self) {
        self.write("console detached".to_string());
    }
}
