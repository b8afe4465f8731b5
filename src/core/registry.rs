//! # Core Registry
//!
//! Multiton bookkeeping for every core in an application. A core is the
//! set of one [`Facade`], [`Model`], [`View`] and [`Controller`] that share
//! a multiton key. The registry owns one instance map per actor kind and is
//! the only place cores are created or torn down.
//!
//! The registry is an ordinary value rather than global state: clone the
//! handle to share it, or build a fresh one to get an isolated set of cores
//! (tests do this for every case).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::{Controller, Facade, Model, View};
use crate::error::{Error, Result};

/// Per-kind `key -> instance` map
struct InstanceMap<T> {
    component: &'static str,
    instances: RefCell<HashMap<String, Rc<T>>>,
}

impl<T> InstanceMap<T> {
    fn new(component: &'static str) -> Self {
        Self {
            component,
            instances: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<Rc<T>> {
        self.instances.borrow().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.instances.borrow().contains_key(key)
    }

    /// Insert a new instance, refusing keys that are already taken
    fn insert(&self, key: &str, instance: Rc<T>) -> Result<Rc<T>> {
        let mut instances = self.instances.borrow_mut();
        if instances.contains_key(key) {
            return Err(Error::duplicate(self.component, key));
        }
        instances.insert(key.to_string(), Rc::clone(&instance));
        debug!("Registered {} for core '{}'", self.component, key);
        Ok(instance)
    }

    /// Existing instance for `key`, or one built by `build`
    ///
    /// `build` runs without the map borrowed so it may look up other kinds.
    fn get_or_insert_with(&self, key: &str, build: impl FnOnce() -> Rc<T>) -> Rc<T> {
        if let Some(existing) = self.get(key) {
            return existing;
        }
        let instance = build();
        self.instances
            .borrow_mut()
            .insert(key.to_string(), Rc::clone(&instance));
        debug!("Created {} for core '{}'", self.component, key);
        instance
    }

    fn remove(&self, key: &str) -> Option<Rc<T>> {
        let removed = self.instances.borrow_mut().remove(key);
        if removed.is_some() {
            debug!("Removed {} for core '{}'", self.component, key);
        }
        removed
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.instances.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

pub(crate) struct RegistryState {
    facades: InstanceMap<Facade>,
    models: InstanceMap<Model>,
    views: InstanceMap<View>,
    controllers: InstanceMap<Controller>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            facades: InstanceMap::new("Facade"),
            models: InstanceMap::new("Model"),
            views: InstanceMap::new("View"),
            controllers: InstanceMap::new("Controller"),
        }
    }
}

/// Handle to the multiton instance maps of an application
///
/// Cloning the handle shares the same maps.
#[derive(Clone, Default)]
pub struct CoreRegistry {
    state: Rc<RegistryState>,
}

impl CoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facade for `key`, created together with its core on first use
    pub fn facade(&self, key: &str) -> Rc<Facade> {
        self.facade_with(key, |_| {})
    }

    /// Facade for `key`, running `initialize` only if the facade is new
    ///
    /// The facade is already registered when `initialize` runs, so startup
    /// code can register actors and send notifications through it.
    pub fn facade_with(&self, key: &str, initialize: impl FnOnce(&Rc<Facade>)) -> Rc<Facade> {
        if let Some(existing) = self.state.facades.get(key) {
            return existing;
        }
        let facade = self
            .state
            .facades
            .get_or_insert_with(key, || Rc::new(Facade::new(self, key)));
        initialize(&facade);
        facade
    }

    /// Facade for `key` if its core exists, without creating anything
    pub fn retrieve_facade(&self, key: &str) -> Option<Rc<Facade>> {
        self.state.facades.get(key)
    }

    pub fn model(&self, key: &str) -> Rc<Model> {
        self.state
            .models
            .get_or_insert_with(key, || Rc::new(Model::new(self.binding(key))))
    }

    pub fn view(&self, key: &str) -> Rc<View> {
        self.state
            .views
            .get_or_insert_with(key, || Rc::new(View::new(self.binding(key))))
    }

    pub fn controller(&self, key: &str) -> Rc<Controller> {
        self.state.controllers.get_or_insert_with(key, || {
            let view = self.view(key);
            Controller::new(self.binding(key), view)
        })
    }

    /// Whether a facade (and so a core) exists for `key`
    pub fn has_core(&self, key: &str) -> bool {
        self.state.facades.contains(key)
    }

    /// Tear down the core for `key`: model, view, controller, then facade
    ///
    /// No-op if no facade was created for `key`.
    pub fn remove_core(&self, key: &str) {
        if !self.has_core(key) {
            return;
        }
        self.remove_model(key);
        self.remove_view(key);
        self.remove_controller(key);
        self.state.facades.remove(key);
        debug!("Core '{}' removed", key);
    }

    pub fn remove_model(&self, key: &str) {
        self.state.models.remove(key);
    }

    pub fn remove_view(&self, key: &str) {
        self.state.views.remove(key);
    }

    pub fn remove_controller(&self, key: &str) {
        self.state.controllers.remove(key);
    }

    /// Keys of all live cores, sorted
    pub fn core_keys(&self) -> Vec<String> {
        self.state.facades.keys()
    }

    pub(crate) fn insert_facade(&self, key: &str, facade: Rc<Facade>) -> Result<Rc<Facade>> {
        self.state.facades.insert(key, facade)
    }

    pub(crate) fn insert_model(&self, key: &str, model: Rc<Model>) -> Result<Rc<Model>> {
        self.state.models.insert(key, model)
    }

    pub(crate) fn insert_view(&self, key: &str, view: Rc<View>) -> Result<Rc<View>> {
        self.state.views.insert(key, view)
    }

    pub(crate) fn insert_controller(
        &self,
        key: &str,
        controller: Rc<Controller>,
    ) -> Result<Rc<Controller>> {
        self.state.controllers.insert(key, controller)
    }

    pub(crate) fn contains_facade(&self, key: &str) -> bool {
        self.state.facades.contains(key)
    }

    pub(crate) fn contains_model(&self, key: &str) -> bool {
        self.state.models.contains(key)
    }

    pub(crate) fn contains_view(&self, key: &str) -> bool {
        self.state.views.contains(key)
    }

    pub(crate) fn contains_controller(&self, key: &str) -> bool {
        self.state.controllers.contains(key)
    }

    /// Binding that actors of core `key` hand out to their notifiers
    pub fn binding(&self, key: &str) -> CoreBinding {
        CoreBinding {
            key: key.to_string(),
            registry: Rc::downgrade(&self.state),
        }
    }
}

impl fmt::Debug for CoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreRegistry")
            .field("cores", &self.core_keys())
            .finish()
    }
}

/// A multiton key together with a weak link back to its registry
///
/// Actors never keep their registry alive; once the registry is dropped a
/// binding no longer resolves.
#[derive(Clone)]
pub struct CoreBinding {
    key: String,
    registry: Weak<RegistryState>,
}

impl CoreBinding {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The registry this binding belongs to, if it is still alive
    pub fn registry(&self) -> Option<CoreRegistry> {
        self.registry.upgrade().map(|state| CoreRegistry { state })
    }
}

impl fmt::Debug for CoreBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreBinding")
            .field("key", &self.key)
            .field("alive", &(self.registry.strong_count() > 0))
            .finish()
    }
}
