//! # Observer Pattern
//!
//! Notifications, the observers that receive them, and the notifier
//! capability that lets actors send them.

pub mod notification;
pub mod notifier;
#[allow(clippy::module_inception)]
pub mod observer;

pub use notification::{Body, Notification};
pub use notifier::{CoreLink, Notifier};
pub use observer::{NotifyContext, NotifyMethod, Observer};
