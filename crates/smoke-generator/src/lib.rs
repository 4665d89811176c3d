//! Deterministic test-data generation for the metrics smoke-test kit.
//!
//! This crate produces everything the smoke driver attaches to synthetic
//! events: seeded pseudo-random scalars, an unbounded non-repeating stream
//! of payload field names, correlation keys, and complete payload values.
//!
//! Generation is deterministic: a [`SeededRng`] constructed from a fixed
//! seed replays the exact same value stream on every run, provided calls
//! are made in the same order. Tests rely on this to verify recorded
//! events byte-for-byte across runs.

pub mod error;
pub mod names;
pub mod payload;
pub mod rng;

// Re-exports for convenience
pub use error::GeneratorError;
pub use names::{next_field_name, FieldNameSequence};
pub use payload::{generate_payload, make_correlation_key, wide_payload, PayloadFlavor};
pub use rng::SeededRng;
