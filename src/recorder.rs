//! Capability trait for the external event-recording backend.

use anyhow::Result;
use smoke_core::EventValue;

/// The capability set the smoke driver consumes from a recording backend.
///
/// The trait is deliberately RPC-like and does not enforce the
/// Start -> Progress -> Stop lifecycle; the driver is responsible for
/// emitting phases in order for each correlation key, and implementations
/// must not assume out-of-order calls are detected or corrected.
///
/// Each call is independent and synchronous. Failures are surfaced to the
/// driver's caller unmodified.
pub trait EventRecorder {
    /// Record one occurrence of a singular event.
    fn record_event(&mut self, event_id: &str, payload: Option<EventValue>) -> Result<()>;

    /// Record `count` occurrences of an event bundled as one submission.
    fn record_events(
        &mut self,
        event_id: &str,
        count: u64,
        payload: Option<EventValue>,
    ) -> Result<()>;

    /// Open the sequence identified by `key`.
    fn record_start(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()>;

    /// Report intermediate state for the open sequence identified by `key`.
    fn record_progress(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()>;

    /// Close the sequence identified by `key`.
    fn record_stop(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()>;
}
