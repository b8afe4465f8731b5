//! # Mediator
//!
//! Adapters between a view component and the notification bus. A mediator
//! declares which notifications it is interested in; the view subscribes it
//! to each of them on registration and unsubscribes on removal.

use std::cell::RefCell;
use std::fmt;

use super::observer::{Body, CoreLink, Notification, Notifier};
use super::AsAny;

/// A named view adapter
///
/// Every hook takes `&self`: handlers may re-enter the facade while they
/// run, including removing the mediator that is currently handling a
/// notification. Keep mutable state behind `Cell`/`RefCell`.
pub trait Mediator: Notifier + AsAny {
    fn mediator_name(&self) -> &str;

    fn view_component(&self) -> Option<Body> {
        None
    }

    /// Names of the notifications this mediator handles
    fn list_notification_interests(&self) -> Vec<String> {
        Vec::new()
    }

    fn handle_notification(&self, _notification: &Notification) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called by the view once the mediator is registered and subscribed
    fn on_register(&self) {}

    /// Called by the view after the mediator is unsubscribed and removed
    fn on_remove(&self) {}
}

/// Plain mediator around an optional view component
pub struct SimpleMediator {
    name: String,
    view_component: RefCell<Option<Body>>,
    link: CoreLink,
}

impl SimpleMediator {
    /// Name used when none is given
    pub const NAME: &'static str = "Mediator";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            view_component: RefCell::new(None),
            link: CoreLink::new(),
        }
    }

    pub fn with_view_component(name: impl Into<String>, view_component: Body) -> Self {
        let mediator = Self::new(name);
        mediator.set_view_component(Some(view_component));
        mediator
    }

    pub fn set_view_component(&self, view_component: Option<Body>) {
        *self.view_component.borrow_mut() = view_component;
    }
}

impl Default for SimpleMediator {
    fn default() -> Self {
        Self::new(Self::NAME)
    }
}

impl Notifier for SimpleMediator {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Mediator for SimpleMediator {
    fn mediator_name(&self) -> &str {
        &self.name
    }

    fn view_component(&self) -> Option<Body> {
        self.view_component.borrow().clone()
    }
}

impl fmt::Debug for SimpleMediator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleMediator")
            .field("name", &self.name)
            .field("view_component", &self.view_component.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mediator_should_default_to_framework_name() {
        let mediator = SimpleMediator::default();
        assert_eq!(mediator.mediator_name(), "Mediator");
        assert!(mediator.list_notification_interests().is_empty());
        assert!(mediator
            .handle_notification(&Notification::new("Anything"))
            .is_ok());
    }

    #[test]
    fn mediator_should_expose_its_view_component() {
        let component = Body::new(String::from("main window"));
        let mediator = SimpleMediator::with_view_component("window", component.clone());
        assert!(mediator.view_component().unwrap().ptr_eq(&component));

        mediator.set_view_component(None);
        assert!(mediator.view_component().is_none());
    }
}
