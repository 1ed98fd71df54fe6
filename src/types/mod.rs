//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod chain;
pub mod route;

pub use chain::*;
pub use route::*;
