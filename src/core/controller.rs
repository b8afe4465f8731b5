//! # Controller
//!
//! Maps notification names to command factories for one core. The
//! controller subscribes itself to the view once per notification name and
//! builds a fresh command for each matching notification.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use super::registry::{CoreBinding, CoreRegistry};
use super::View;
use crate::error::{Error, Result};
use crate::patterns::{CommandFactory, Notification, Notifier, NotifyContext, Observer};

/// Command registry for one multiton key
pub struct Controller {
    binding: CoreBinding,
    view: Rc<View>,
    command_map: RefCell<HashMap<String, CommandFactory>>,
    this: Weak<Controller>,
}

impl Controller {
    pub(crate) fn new(binding: CoreBinding, view: Rc<View>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            binding,
            view,
            command_map: RefCell::new(HashMap::new()),
            this: this.clone(),
        })
    }

    /// Construct and register the controller for `key`
    ///
    /// Uses the view registered for `key`, creating it if needed. Fails if
    /// the registry already holds a controller for `key`.
    pub fn create(registry: &CoreRegistry, key: &str) -> Result<Rc<Self>> {
        if registry.contains_controller(key) {
            return Err(Error::duplicate("Controller", key));
        }
        let controller = Self::new(registry.binding(key), registry.view(key));
        registry.insert_controller(key, controller)
    }

    pub fn multiton_key(&self) -> &str {
        self.binding.key()
    }

    fn notify_context(&self) -> NotifyContext {
        NotifyContext::of(self)
    }

    /// Map `notification_name` to `factory`
    ///
    /// The controller subscribes to the view only the first time a name is
    /// registered; later registrations just replace the factory.
    pub fn register_command(&self, notification_name: &str, factory: CommandFactory) {
        if !self.has_command(notification_name) {
            let this = Weak::clone(&self.this);
            let observer = Observer::from_fn(self.notify_context(), move |notification| {
                match this.upgrade() {
                    Some(controller) => controller.execute_command(notification),
                    None => Ok(()),
                }
            });
            self.view.register_observer(notification_name, observer);
        }
        self.command_map
            .borrow_mut()
            .insert(notification_name.to_string(), factory);
        debug!(
            "Command registered for '{}' in core '{}'",
            notification_name,
            self.multiton_key()
        );
    }

    /// Build and run the command registered for `notification`'s name
    ///
    /// No-op if nothing is registered for that name.
    pub fn execute_command(&self, notification: &Notification) -> anyhow::Result<()> {
        let factory = match self.command_map.borrow().get(notification.name()) {
            Some(factory) => Rc::clone(factory),
            None => return Ok(()),
        };
        let command = factory();
        command.initialize_notifier(self.binding.clone());
        trace!(
            "Executing command for '{}' in core '{}'",
            notification.name(),
            self.multiton_key()
        );
        command.execute(notification)
    }

    pub fn has_command(&self, notification_name: &str) -> bool {
        self.command_map.borrow().contains_key(notification_name)
    }

    /// Forget the command for `notification_name` and unsubscribe from it
    pub fn remove_command(&self, notification_name: &str) {
        if !self.has_command(notification_name) {
            return;
        }
        self.view
            .remove_observer(notification_name, self.notify_context());
        self.command_map.borrow_mut().remove(notification_name);
        debug!(
            "Command removed for '{}' in core '{}'",
            notification_name,
            self.multiton_key()
        );
    }

    /// Notification names with a registered command, sorted
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.command_map.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("key", &self.multiton_key())
            .field("commands", &self.command_names())
            .finish()
    }
}
