//! # Demo Application
//!
//! A small counter application wired the way applications built on the
//! framework usually are: startup and action commands registered on the
//! facade, a proxy owning the data and a mediator presenting it.
//!
//! Used by the `puremvc-demo` binary and by the integration tests.

pub mod commands;
pub mod console_mediator;
pub mod counter_proxy;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::{CoreRegistry, Facade};
use crate::patterns::{command_factory, Body};

pub use commands::{IncrementCommand, ResetCommand};
pub use console_mediator::{ConsoleLines, ConsoleMediator};
pub use counter_proxy::CounterProxy;

/// Notification names used by the demo
pub mod notes {
    pub const STARTUP: &str = "startup";
    pub const INCREMENT: &str = "increment";
    pub const RESET: &str = "reset";
    pub const COUNTER_CHANGED: &str = "counterChanged";
    pub const SHUTDOWN: &str = "shutdown";

    /// Type tag of `COUNTER_CHANGED` when the counter was reset
    pub const RESET_TYPE: &str = "reset";
}

/// Running demo core together with its console output
pub struct DemoApp {
    facade: Rc<Facade>,
    lines: ConsoleLines,
}

impl DemoApp {
    /// Create the core for `key` and run the startup sequence
    ///
    /// Starting a key that is already running attaches to its console
    /// instead. If that console was shut down a new one is registered.
    pub fn start(registry: &CoreRegistry, key: &str) -> Result<Self> {
        let facade = registry.facade_with(key, |facade| {
            facade.register_command(notes::STARTUP, commands::startup_command());
            facade.register_command(notes::INCREMENT, command_factory::<IncrementCommand>());
            facade.register_command(notes::RESET, command_factory::<ResetCommand>());
        });

        let running = facade.retrieve_mediator_as::<ConsoleMediator>(ConsoleMediator::NAME);
        if let Some(console) = running {
            warn!("Demo core '{}' already started, attaching to its console", key);
            let lines = console.buffer();
            return Ok(Self { facade, lines });
        }

        let lines: ConsoleLines = Rc::new(RefCell::new(Vec::new()));
        if facade.has_command(notes::STARTUP) {
            facade.send_notification(notes::STARTUP, Some(Body::new(Rc::clone(&lines))), None)?;
            // startup only runs once per core
            facade.remove_command(notes::STARTUP);
            debug!("Demo core '{}' started", key);
        } else {
            warn!("Demo core '{}' has no console, attaching a new one", key);
            facade.register_mediator(Rc::new(ConsoleMediator::new(Rc::clone(&lines))));
        }
        Ok(Self { facade, lines })
    }

    pub fn facade(&self) -> &Rc<Facade> {
        &self.facade
    }

    pub fn increment(&self, step: i64) -> Result<()> {
        self.facade
            .send_notification(notes::INCREMENT, Some(Body::new(step)), None)
    }

    pub fn reset(&self) -> Result<()> {
        self.facade.send_notification(notes::RESET, None, None)
    }

    pub fn shutdown(&self) -> Result<()> {
        self.facade.send_notification(notes::SHUTDOWN, None, None)
    }

    /// Current counter value, `None` once the counter proxy is gone
    pub fn counter(&self) -> Option<i64> {
        self.facade
            .retrieve_proxy_as::<CounterProxy>(CounterProxy::NAME)
            .map(|counter| counter.value())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}
