//! # Proxy
//!
//! Named data holders registered with a core's model.

use std::cell::RefCell;
use std::fmt;

use super::observer::{Body, CoreLink, Notifier};
use super::AsAny;

/// A named data holder
///
/// Lifecycle hooks default to no-ops. Implement [`Proxy::data`] when the
/// proxy should expose its data generically; typed access usually goes
/// through `retrieve_proxy_as`.
pub trait Proxy: Notifier + AsAny {
    fn proxy_name(&self) -> &str;

    fn data(&self) -> Option<Body> {
        None
    }

    /// Called by the model after the proxy has been stored
    fn on_register(&self) {}

    /// Called by the model after the proxy has been removed
    fn on_remove(&self) {}
}

/// Plain proxy holding an optional [`Body`]
pub struct SimpleProxy {
    name: String,
    data: RefCell<Option<Body>>,
    link: CoreLink,
}

impl SimpleProxy {
    /// Name used when none is given
    pub const NAME: &'static str = "Proxy";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: RefCell::new(None),
            link: CoreLink::new(),
        }
    }

    pub fn with_data(name: impl Into<String>, data: Body) -> Self {
        let proxy = Self::new(name);
        proxy.set_data(Some(data));
        proxy
    }

    pub fn set_data(&self, data: Option<Body>) {
        *self.data.borrow_mut() = data;
    }
}

impl Default for SimpleProxy {
    fn default() -> Self {
        Self::new(Self::NAME)
    }
}

impl Notifier for SimpleProxy {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Proxy for SimpleProxy {
    fn proxy_name(&self) -> &str {
        &self.name
    }

    fn data(&self) -> Option<Body> {
        self.data.borrow().clone()
    }
}

impl fmt::Debug for SimpleProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleProxy")
            .field("name", &self.name)
            .field("data", &self.data.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_should_default_to_framework_name() {
        let proxy = SimpleProxy::default();
        assert_eq!(proxy.proxy_name(), "Proxy");
        assert!(proxy.data().is_none());
    }

    #[test]
    fn proxy_should_hold_replaceable_data() {
        let proxy = SimpleProxy::with_data("colors", Body::new(vec!["red", "green"]));
        assert_eq!(
            proxy.data().unwrap().downcast_ref::<Vec<&str>>(),
            Some(&vec!["red", "green"])
        );

        proxy.set_data(Some(Body::new("blue")));
        assert_eq!(
            proxy.data().unwrap().downcast_ref::<&str>(),
            Some(&"blue")
        );
    }
}
