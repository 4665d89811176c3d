//! Metrics Smoke-Test Kit
//!
//! A library for exercising a telemetry client's event-recording protocol.
//! It replays synthetic events of three shapes against a recording backend
//! to validate correctness and stability under load:
//!
//! - Singular events: one-shot notifications, fire-and-forget
//! - Aggregate events: N occurrences bundled as one submission
//! - Sequences: correlated Start/Progress/Stop spans sharing one key
//!
//! Payload contents and correlation keys come from a seeded generator, so
//! a run is reproducible from its seed alone. An environment permission
//! gate keeps synthetic load away from production backends.
//!
//! # Usage
//!
//! ```no_run
//! use metrics_smoketest::{PermissionGate, SmokeRunner};
//! # use metrics_smoketest::testing::MemoryRecorder;
//!
//! # fn main() -> Result<(), metrics_smoketest::SmokeError> {
//! let mut recorder = MemoryRecorder::new();
//! let mut runner = SmokeRunner::new(42)
//!     .with_gate(PermissionGate::with_config_path("/etc/metrics/permissions.yaml"));
//!
//! let summary = runner.run_flavored(&mut recorder, 20)?;
//! println!("recorded {} calls", summary.total_calls());
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod error;
pub mod permissions;
pub mod recorder;
pub mod testing;

// Re-exports for convenience
pub use driver::{RunSummary, SmokeRunner};
pub use error::SmokeError;
pub use permissions::{Environment, PermissionGate, DEFAULT_PERMISSIONS_PATH};
pub use recorder::EventRecorder;
pub use smoke_core::{events, DictBuilder, EventValue};
pub use smoke_generator::{GeneratorError, PayloadFlavor, SeededRng};
