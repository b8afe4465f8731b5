//! # Model
//!
//! Registry of the proxies of one core.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::registry::{CoreBinding, CoreRegistry};
use crate::error::{Error, Result};
use crate::patterns::{Notifier, Proxy};

/// Named proxies for one multiton key
pub struct Model {
    binding: CoreBinding,
    proxy_map: RefCell<HashMap<String, Rc<dyn Proxy>>>,
}

impl Model {
    pub(crate) fn new(binding: CoreBinding) -> Self {
        Self {
            binding,
            proxy_map: RefCell::new(HashMap::new()),
        }
    }

    /// Construct and register the model for `key`
    ///
    /// Fails if the registry already holds a model for `key`; use
    /// [`CoreRegistry::model`] to get-or-create instead.
    pub fn create(registry: &CoreRegistry, key: &str) -> Result<Rc<Self>> {
        if registry.contains_model(key) {
            return Err(Error::duplicate("Model", key));
        }
        registry.insert_model(key, Rc::new(Self::new(registry.binding(key))))
    }

    pub fn multiton_key(&self) -> &str {
        self.binding.key()
    }

    /// Store `proxy` under its name and call its `on_register` hook
    ///
    /// A proxy already registered under the same name is replaced.
    pub fn register_proxy(&self, proxy: Rc<dyn Proxy>) {
        proxy.initialize_notifier(self.binding.clone());
        let name = proxy.proxy_name().to_string();
        let replaced = self
            .proxy_map
            .borrow_mut()
            .insert(name.clone(), Rc::clone(&proxy));
        if replaced.is_some() {
            debug!("Proxy '{}' replaced in core '{}'", name, self.multiton_key());
        } else {
            debug!("Proxy '{}' registered in core '{}'", name, self.multiton_key());
        }
        proxy.on_register();
    }

    pub fn retrieve_proxy(&self, proxy_name: &str) -> Option<Rc<dyn Proxy>> {
        self.proxy_map.borrow().get(proxy_name).cloned()
    }

    pub fn has_proxy(&self, proxy_name: &str) -> bool {
        self.proxy_map.borrow().contains_key(proxy_name)
    }

    /// Remove a proxy and call its `on_remove` hook
    pub fn remove_proxy(&self, proxy_name: &str) -> Option<Rc<dyn Proxy>> {
        let proxy = self.proxy_map.borrow_mut().remove(proxy_name)?;
        debug!(
            "Proxy '{}' removed from core '{}'",
            proxy_name,
            self.multiton_key()
        );
        proxy.on_remove();
        Some(proxy)
    }

    /// Names of all registered proxies, sorted
    pub fn proxy_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.proxy_map.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("key", &self.multiton_key())
            .field("proxies", &self.proxy_names())
            .finish()
    }
}
