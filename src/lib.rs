//! # PureMVC - Multicore Model-View-Controller Framework
//!
//! A minimal MVC framework built around named registries and a synchronous
//! notification bus. Each application core is identified by a multiton key
//! and consists of a facade fronting a model, a view and a controller.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  send_notification  ┌──────────────┐   notify    ┌───────────┐
//! │ Proxy /     │────────────────────▶│    Facade    │────────────▶│   View    │
//! │ Mediator /  │                     │              │             │ observers │
//! │ Command     │◀────────────────────│ Model / View │◀────────────│           │
//! └─────────────┘   registries        │ / Controller │  execute    └─────┬─────┘
//!                                     └──────────────┘   command         │
//!                                            ▲                           ▼
//!                                            │                   ┌──────────────┐
//!                                            └───────────────────│  Controller  │
//!                                                                └──────────────┘
//! ```
//!
//! Cores live in a [`CoreRegistry`]: `registry.facade(key)` returns the
//! facade for `key`, creating the core on first use, and
//! `registry.remove_core(key)` tears it down again.
//!
//! Everything is single-threaded and synchronous. A notification is fully
//! handled, including any commands and notifications it triggers, before
//! `send_notification` returns.

pub mod cmd_args;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod patterns;

// Re-export main types for easy access
pub use crate::core::{Controller, CoreBinding, CoreRegistry, CoreReport, Facade, Model, View};
pub use error::{Error, Result};
pub use patterns::{
    command_factory, AsAny, Body, Command, CommandFactory, CoreLink, MacroCommand, Mediator,
    Notification, Notifier, NotifyContext, Observer, Proxy, SimpleCommand, SimpleMediator,
    SimpleProxy,
};
