//! # Notifier
//!
//! Capability shared by proxies, mediators and commands: once bound to a
//! core they can reach its facade and send notifications through it.
//! Implementors embed a [`CoreLink`] and expose it through
//! [`Notifier::core_link`]; everything else is provided.

use std::cell::RefCell;
use std::rc::Rc;

use super::notification::Body;
use crate::core::{CoreBinding, Facade};
use crate::error::{Error, Result};

/// Slot holding the core binding of a notifier
#[derive(Debug, Default)]
pub struct CoreLink {
    binding: RefCell<Option<CoreBinding>>,
}

impl CoreLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, binding: CoreBinding) {
        *self.binding.borrow_mut() = Some(binding);
    }

    pub fn binding(&self) -> Option<CoreBinding> {
        self.binding.borrow().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }
}

/// Access to a core's facade for actors registered with it
pub trait Notifier {
    fn core_link(&self) -> &CoreLink;

    /// Bind this notifier to a core
    ///
    /// Called by the framework when a proxy or mediator is registered and
    /// before a command executes.
    fn initialize_notifier(&self, binding: CoreBinding) {
        self.core_link().bind(binding);
    }

    fn multiton_key(&self) -> Option<String> {
        self.core_link()
            .binding()
            .map(|binding| binding.key().to_string())
    }

    /// Facade of the bound core
    fn facade(&self) -> Result<Rc<Facade>> {
        let binding = self.core_link().binding().ok_or(Error::NotifierUnbound)?;
        let registry = binding.registry().ok_or(Error::NotifierUnbound)?;
        Ok(registry.facade(binding.key()))
    }

    /// Build a notification and dispatch it through the bound facade
    fn send_notification(
        &self,
        name: &str,
        body: Option<Body>,
        notification_type: Option<&str>,
    ) -> anyhow::Result<()> {
        self.facade()?
            .send_notification(name, body, notification_type)
    }
}
