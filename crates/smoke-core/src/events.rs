//! Registered event identifiers used by the smoke driver.
//!
//! Event identifiers are opaque, pre-registered tokens naming an event type
//! known to the recording backend. The smoke driver only ever submits these
//! fixed identifiers; it never generates identifiers at runtime.

/// Singular event recorded with no payload.
pub const SINGULAR_EVENT_A: &str = "fb59199e-5384-472e-af1e-00b7a419d5c2";

/// Singular event recorded with a generated payload.
pub const SINGULAR_EVENT_B: &str = "b89f9a4a-3035-4fc3-9bef-584367fe2c96";

/// Aggregate event recorded with no payload.
pub const AGGREGATE_EVENT_A: &str = "9a0cf836-12cd-4887-95d8-e48ccdf6e552";

/// Aggregate event recorded with a generated payload.
pub const AGGREGATE_EVENT_B: &str = "b1f87a3f-a464-48d4-8e35-35dd45659010";

/// Sequence event whose phases carry no payload.
pub const SEQUENCE_EVENT_A: &str = "72fea371-15d1-401d-8a40-c47f379f64fd";

/// Sequence event whose phases each carry a generated payload.
pub const SEQUENCE_EVENT_B: &str = "b2b17dfd-c30e-4789-abcc-4a38323127f6";
