//! # View
//!
//! Observer lists and mediators of one core.
//!
//! Observers are kept per notification name in registration order, which is
//! also the dispatch order. Dispatch iterates over a snapshot of the list so
//! observers may register or remove observers (including themselves) while a
//! notification is in flight: everyone subscribed when dispatch started is
//! notified exactly once, and newcomers wait for the next notification.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::registry::{CoreBinding, CoreRegistry};
use crate::error::{Error, Result};
use crate::patterns::{Mediator, Notification, Notifier, NotifyContext, Observer};

/// Observer lists and mediators for one multiton key
pub struct View {
    binding: CoreBinding,
    mediator_map: RefCell<HashMap<String, Rc<dyn Mediator>>>,
    observer_map: RefCell<HashMap<String, Vec<Observer>>>,
}

impl View {
    pub(crate) fn new(binding: CoreBinding) -> Self {
        Self {
            binding,
            mediator_map: RefCell::new(HashMap::new()),
            observer_map: RefCell::new(HashMap::new()),
        }
    }

    /// Construct and register the view for `key`
    ///
    /// Fails if the registry already holds a view for `key`.
    pub fn create(registry: &CoreRegistry, key: &str) -> Result<Rc<Self>> {
        if registry.contains_view(key) {
            return Err(Error::duplicate("View", key));
        }
        registry.insert_view(key, Rc::new(Self::new(registry.binding(key))))
    }

    pub fn multiton_key(&self) -> &str {
        self.binding.key()
    }

    /// Append `observer` to the list for `notification_name`
    pub fn register_observer(&self, notification_name: &str, observer: Observer) {
        self.observer_map
            .borrow_mut()
            .entry(notification_name.to_string())
            .or_default()
            .push(observer);
    }

    /// Notify every observer of `notification`'s name, in registration order
    ///
    /// Stops at the first observer that fails and returns its error.
    pub fn notify_observers(&self, notification: &Notification) -> anyhow::Result<()> {
        let snapshot = match self.observer_map.borrow().get(notification.name()) {
            Some(observers) => observers.clone(),
            None => return Ok(()),
        };
        trace!(
            "Dispatching '{}' to {} observer(s) in core '{}'",
            notification.name(),
            snapshot.len(),
            self.multiton_key()
        );
        for observer in &snapshot {
            observer.notify_observer(notification)?;
        }
        Ok(())
    }

    /// Remove the first observer for `notification_name` bound to `context`
    ///
    /// Drops the list entirely once it is empty.
    pub fn remove_observer(&self, notification_name: &str, context: NotifyContext) {
        let mut observer_map = self.observer_map.borrow_mut();
        let Some(observers) = observer_map.get_mut(notification_name) else {
            return;
        };
        if let Some(index) = observers
            .iter()
            .position(|observer| observer.compare_notify_context(context))
        {
            observers.remove(index);
        }
        if observers.is_empty() {
            observer_map.remove(notification_name);
        }
    }

    pub fn has_observers(&self, notification_name: &str) -> bool {
        self.observer_map.borrow().contains_key(notification_name)
    }

    pub fn observer_count(&self, notification_name: &str) -> usize {
        self.observer_map
            .borrow()
            .get(notification_name)
            .map_or(0, Vec::len)
    }

    /// Observer count per notification name
    pub fn observer_counts(&self) -> BTreeMap<String, usize> {
        self.observer_map
            .borrow()
            .iter()
            .map(|(name, observers)| (name.clone(), observers.len()))
            .collect()
    }

    /// Register a mediator and subscribe it to its notification interests
    ///
    /// Does nothing if a mediator with the same name is already registered.
    pub fn register_mediator(&self, mediator: Rc<dyn Mediator>) {
        let name = mediator.mediator_name().to_string();
        if self.has_mediator(&name) {
            debug!(
                "Mediator '{}' already registered in core '{}'",
                name,
                self.multiton_key()
            );
            return;
        }

        mediator.initialize_notifier(self.binding.clone());
        self.mediator_map
            .borrow_mut()
            .insert(name.clone(), Rc::clone(&mediator));

        let interests = mediator.list_notification_interests();
        if !interests.is_empty() {
            let target = Rc::downgrade(&mediator);
            let observer = Observer::from_fn(NotifyContext::of(&*mediator), move |notification| {
                match target.upgrade() {
                    Some(mediator) => mediator.handle_notification(notification),
                    None => Ok(()),
                }
            });
            for interest in &interests {
                self.register_observer(interest, observer.clone());
            }
        }

        debug!(
            "Mediator '{}' registered in core '{}' for {:?}",
            name,
            self.multiton_key(),
            interests
        );
        mediator.on_register();
    }

    pub fn retrieve_mediator(&self, mediator_name: &str) -> Option<Rc<dyn Mediator>> {
        self.mediator_map.borrow().get(mediator_name).cloned()
    }

    /// Unsubscribe and remove a mediator, then call its `on_remove` hook
    pub fn remove_mediator(&self, mediator_name: &str) -> Option<Rc<dyn Mediator>> {
        let mediator = self.retrieve_mediator(mediator_name)?;

        let context = NotifyContext::of(&*mediator);
        for interest in mediator.list_notification_interests() {
            self.remove_observer(&interest, context);
        }
        self.mediator_map.borrow_mut().remove(mediator_name);

        debug!(
            "Mediator '{}' removed from core '{}'",
            mediator_name,
            self.multiton_key()
        );
        mediator.on_remove();
        Some(mediator)
    }

    pub fn has_mediator(&self, mediator_name: &str) -> bool {
        self.mediator_map.borrow().contains_key(mediator_name)
    }

    /// Names of all registered mediators, sorted
    pub fn mediator_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mediator_map.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("key", &self.multiton_key())
            .field("mediators", &self.mediator_names())
            .field("observers", &self.observer_counts())
            .finish()
    }
}
