//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, startup wiring and health reporting.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`health`] - Configuration health report for `statuswatch check`

pub mod bootstrap;
pub mod config;
pub mod health;
