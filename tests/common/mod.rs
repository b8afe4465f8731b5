//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - Cucumber world implementation
//! - Recording mediators used to observe dispatch

pub mod mediators;
pub mod world;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mediators::RecordingMediator;
#[allow(unused_imports)]
pub use world::{DispatchLog, PureMvcWorld};
