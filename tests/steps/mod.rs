//! Step definitions for Cucumber tests
//!
//! Steps are organized by feature domain:
//! - `core_lifecycle` - Multiton creation and teardown
//! - `dispatch` - Observers, mediators and commands reacting to notifications
//! - `demo` - The counter demo application end to end

pub mod core_lifecycle;
pub mod demo;
pub mod dispatch;
