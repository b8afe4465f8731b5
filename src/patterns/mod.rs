//! # Patterns
//!
//! The actor roles that plug into a core: proxies for data, mediators for
//! view components, commands for reactions, and the observer machinery
//! that ties them together.

pub mod command;
pub mod mediator;
pub mod observer;
pub mod proxy;

use std::any::Any;
use std::rc::Rc;

pub use command::{command_factory, Command, CommandFactory, MacroCommand, SimpleCommand};
pub use mediator::{Mediator, SimpleMediator};
pub use observer::{Body, CoreLink, Notification, Notifier, NotifyContext, Observer};
pub use proxy::{Proxy, SimpleProxy};

/// Upcast support so registered actors can be recovered as their concrete type
pub trait AsAny: Any {
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
