//! # Facade
//!
//! Single entry point to a core. The facade owns the core's model, view
//! and controller and forwards every registration call to the right one.

use std::fmt;
use std::rc::Rc;

use super::registry::CoreRegistry;
use super::report::CoreReport;
use super::{Controller, Model, View};
use crate::error::{Error, Result};
use crate::patterns::{AsAny, Body, CommandFactory, Mediator, Notification, Proxy};

/// Entry point to the core identified by a multiton key
pub struct Facade {
    key: String,
    model: Rc<Model>,
    view: Rc<View>,
    controller: Rc<Controller>,
}

impl Facade {
    /// Assemble a facade from the actors the registry holds for `key`,
    /// creating any that do not exist yet
    pub(crate) fn new(registry: &CoreRegistry, key: &str) -> Self {
        Self {
            key: key.to_string(),
            model: registry.model(key),
            view: registry.view(key),
            controller: registry.controller(key),
        }
    }

    /// Construct and register the facade for `key`
    ///
    /// Fails if the registry already holds a facade for `key`; use
    /// [`CoreRegistry::facade`] to get-or-create instead. Actors created for
    /// `key` beforehand are adopted as they are.
    pub fn create(registry: &CoreRegistry, key: &str) -> Result<Rc<Self>> {
        if registry.contains_facade(key) {
            return Err(Error::duplicate("Facade", key));
        }
        registry.insert_facade(key, Rc::new(Self::new(registry, key)))
    }

    pub fn multiton_key(&self) -> &str {
        &self.key
    }

    pub fn model(&self) -> &Rc<Model> {
        &self.model
    }

    pub fn view(&self) -> &Rc<View> {
        &self.view
    }

    pub fn controller(&self) -> &Rc<Controller> {
        &self.controller
    }

    pub fn register_command(&self, notification_name: &str, factory: CommandFactory) {
        self.controller.register_command(notification_name, factory);
    }

    pub fn remove_command(&self, notification_name: &str) {
        self.controller.remove_command(notification_name);
    }

    pub fn has_command(&self, notification_name: &str) -> bool {
        self.controller.has_command(notification_name)
    }

    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        self.model.register_proxy(proxy);
    }

    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Rc<dyn Proxy>> {
        self.model.retrieve_proxy(proxy_name)
    }

    /// Retrieve a proxy as its concrete type
    ///
    /// `None` if no proxy has that name or it is of another type.
    pub fn retrieve_proxy_as<T: Proxy>(&self, proxy_name: &str) -> Option<Rc<T>> {
        self.retrieve_proxy(proxy_name)?
            .into_any_rc()
            .downcast::<T>()
            .ok()
    }

    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Rc<dyn Proxy>> {
        self.model.remove_proxy(proxy_name)
    }

    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.model.has_proxy(proxy_name)
    }

    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        self.view.register_mediator(mediator);
    }

    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Rc<dyn Mediator>> {
        self.view.retrieve_mediator(mediator_name)
    }

    /// Retrieve a mediator as its concrete type
    pub fn retrieve_mediator_as<T: Mediator>(&self, mediator_name: &str) -> Option<Rc<T>> {
        self.retrieve_mediator(mediator_name)?
            .into_any_rc()
            .downcast::<T>()
            .ok()
    }

    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Rc<dyn Mediator>> {
        self.view.remove_mediator(mediator_name)
    }

    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.view.has_mediator(mediator_name)
    }

    /// Build a notification and dispatch it to the core's observers
    pub fn send_notification(
        &self,
        name: &str,
        body: Option<Body>,
        notification_type: Option<&str>,
    ) -> anyhow::Result<()> {
        self.notify_observers(&Notification::with_parts(name, body, notification_type))
    }

    /// Dispatch an already built notification
    pub fn notify_observers(&self, notification: &Notification) -> anyhow::Result<()> {
        self.view.notify_observers(notification)
    }

    pub fn proxy_names(&self) -> Vec<String> {
        self.model.proxy_names()
    }

    pub fn mediator_names(&self) -> Vec<String> {
        self.view.mediator_names()
    }

    pub fn command_names(&self) -> Vec<String> {
        self.controller.command_names()
    }

    /// Snapshot of everything registered in this core
    pub fn report(&self) -> CoreReport {
        CoreReport {
            key: self.key.clone(),
            proxies: self.proxy_names(),
            mediators: self.mediator_names(),
            commands: self.command_names(),
            observers: self.view.observer_counts(),
        }
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("key", &self.key)
            .field("model", &self.model)
            .field("view", &self.view)
            .field("controller", &self.controller)
            .finish()
    }
}
