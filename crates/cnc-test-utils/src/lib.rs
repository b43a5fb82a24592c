//! Shared test utilities for the cnc-tools workspace.
//!
//! This crate provides standardised fixtures so that store, CLI and
//! property tests describe tools the same way. It is a dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`fixtures`]: field builders for common tools
//! - [`store`]: [`TestStore`] for in-memory and on-disk stores

pub mod fixtures;
pub mod store;

pub use store::TestStore;
