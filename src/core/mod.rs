//! # Core Actors
//!
//! The four actors that make up a core, plus the registry that keeps one
//! core per multiton key.
//!
//! ```text
//!                 ┌──────────────┐
//!                 │    Facade    │
//!                 └──────┬───────┘
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//! ┌─────────────┐ ┌─────────────┐ ┌──────────────┐
//! │    Model    │ │    View     │◄│  Controller  │
//! │  • proxies  │ │ • mediators │ │  • commands  │
//! │             │ │ • observers │ │              │
//! └─────────────┘ └─────────────┘ └──────────────┘
//! ```

pub mod controller;
pub mod facade;
pub mod model;
pub mod registry;
pub mod report;
pub mod view;

pub use controller::Controller;
pub use facade::Facade;
pub use model::Model;
pub use registry::{CoreBinding, CoreRegistry};
pub use report::CoreReport;
pub use view::View;
