//! # Counter Proxy
//!
//! Holds the demo counter and announces every change.

use std::cell::Cell;

use super::notes;
use crate::patterns::{Body, CoreLink, Notifier, Proxy};

#[derive(Default)]
pub struct CounterProxy {
    link: CoreLink,
    value: Cell<i64>,
}

impl CounterProxy {
    pub const NAME: &'static str = "CounterProxy";

    pub fn value(&self) -> i64 {
        self.value.get()
    }

    /// Add `step` to the counter and send `COUNTER_CHANGED` with the new value
    pub fn increment(&self, step: i64) -> anyhow::Result<()> {
        let value = self.value.get() + step;
        self.value.set(value);
        self.send_notification(notes::COUNTER_CHANGED, Some(Body::new(value)), None)
    }

    pub fn reset(&self) -> anyhow::Result<()> {
        self.value.set(0);
        self.send_notification(
            notes::COUNTER_CHANGED,
            Some(Body::new(0_i64)),
            Some(notes::RESET_TYPE),
        )
    }
}

impl Notifier for CounterProxy {
    fn core_link(&self) -> &CoreLink {
        &self.link
    }
}

impl Proxy for CounterProxy {
    fn proxy_name(&self) -> &str {
        Self::NAME
    }

    fn data(&self) -> Option<Body> {
        Some(Body::new(self.value.get()))
    }

    fn on_register(&self) {
        tracing::debug!("Counter registered at {}", self.value.get());
    }
}
