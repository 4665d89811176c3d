//! Core types for the metrics smoke-test kit.
//!
//! This crate provides the foundational types shared by the payload
//! generator and the smoke driver:
//!
//! - [`EventValue`] - Tagged-variant payload values submitted to the backend
//! - [`DictBuilder`] - Builder for string-keyed payload mappings
//! - [`events`] - Registered event identifiers used by the smoke driver
//!
//! # Architecture
//!
//! ```text
//! smoke-core (this crate)
//!    │
//!    ├─── smoke-generator    (produces EventValue payloads and keys)
//!    │
//!    └─── metrics-smoketest  (drives EventValue payloads at a recorder)
//! ```

pub mod events;
pub mod value;

// Re-exports for convenience
pub use value::{DictBuilder, EventValue};
