//! # Simple Command
//!
//! Closure-backed command for reactions that need no type of their own.

use std::rc::Rc;

use super::{Command, CommandFactory};
use crate::patterns::observer::{CoreLink, Notification, Notifier};

type Handler = Rc<dyn Fn(&SimpleCommand, &Notification) -> anyhow::Result<()>>;

/// A command whose `execute` runs a closure
///
/// The closure receives the command itself so it can use the notifier
/// capability (`send_notification`, `facade`).
pub struct SimpleCommand {
    handler: Handler,
    link: CoreLink,
}

impl SimpleCommand {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&SimpleCommand, &Notification) -> anyhow::Result<()> + 'static,
    {
        Self {
            handler: Rc::new(handler),
            link: CoreLink::new(),
        }
    }

    /// Factory producing a fresh command around the same closure
    pub fn factory<F>(handler: F) -> CommandFactory
    where
        F: Fn(&SimpleCommand, &Notification) -> anyhow::Result<()> + 'static,
    {
        let handler: Handler = Rc::new(handler);
        Rc::new(move || {
            Box::new(SimpleCommand {
                handler: Rc::clone(&handler),
                link: CoreLink::new(),
            }) as Box<dyn Command>
        })
    }
}

impl Notifier for SimpleCommand {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Command for SimpleCommand {
    fn execute(&self, notification: &Notification) -> anyhow::Result<()> {
        (self.handler)(self, notification)
    }
}
