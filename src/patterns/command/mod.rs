//! # Commands
//!
//! Reactions to notifications. The controller stores a factory per
//! notification name and builds a fresh command for every dispatch, so
//! commands carry no state from one notification to the next.

pub mod macro_command;
pub mod simple_command;

use std::rc::Rc;

use super::observer::{Notification, Notifier};

pub use macro_command::MacroCommand;
pub use simple_command::SimpleCommand;

/// An executable reaction to a notification
pub trait Command: Notifier {
    fn execute(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Builds a fresh command instance per dispatch
pub type CommandFactory = Rc<dyn Fn() -> Box<dyn Command>>;

/// Factory for a command type that can be default-constructed
pub fn command_factory<C>() -> CommandFactory
where
    C: Command + Default + 'static,
{
    Rc::new(|| Box::new(C::default()) as Box<dyn Command>)
}
