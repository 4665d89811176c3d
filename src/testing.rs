//! Test doubles for the [`EventRecorder`] contract.
//!
//! This module provides recorder implementations used by the kit's own
//! tests and available to downstream consumers verifying call order and
//! arguments against their harnesses.
//!
//! [`EventRecorder`]: crate::recorder::EventRecorder

use crate::recorder::EventRecorder;
use anyhow::{bail, Result};
use smoke_core::EventValue;

/// One captured recorder invocation, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// A singular event.
    Event {
        event_id: String,
        payload: Option<EventValue>,
    },
    /// An aggregate event.
    Events {
        event_id: String,
        count: u64,
        payload: Option<EventValue>,
    },
    /// A sequence Start phase.
    Start {
        event_id: String,
        key: EventValue,
        payload: Option<EventValue>,
    },
    /// A sequence Progress phase.
    Progress {
        event_id: String,
        key: EventValue,
        payload: Option<EventValue>,
    },
    /// A sequence Stop phase.
    Stop {
        event_id: String,
        key: EventValue,
        payload: Option<EventValue>,
    },
}

impl RecordedCall {
    /// The event identifier this call was submitted under.
    pub fn event_id(&self) -> &str {
        match self {
            RecordedCall::Event { event_id, .. }
            | RecordedCall::Events { event_id, .. }
            | RecordedCall::Start { event_id, .. }
            | RecordedCall::Progress { event_id, .. }
            | RecordedCall::Stop { event_id, .. } => event_id,
        }
    }

    /// The correlation key, for sequence-phase calls.
    pub fn key(&self) -> Option<&EventValue> {
        match self {
            RecordedCall::Start { key, .. }
            | RecordedCall::Progress { key, .. }
            | RecordedCall::Stop { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The payload attached to this call, if any.
    pub fn payload(&self) -> Option<&EventValue> {
        match self {
            RecordedCall::Event { payload, .. }
            | RecordedCall::Events { payload, .. }
            | RecordedCall::Start { payload, .. }
            | RecordedCall::Progress { payload, .. }
            | RecordedCall::Stop { payload, .. } => payload.as_ref(),
        }
    }
}

/// Recorder that captures every call for order and argument assertions.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    /// Captured calls, in submission order.
    pub calls: Vec<RecordedCall>,
}

impl MemoryRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of captured calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether no calls were captured.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Captured calls carrying the given correlation key, in order.
    pub fn calls_for_key(&self, key: &EventValue) -> Vec<&RecordedCall> {
        self.calls
            .iter()
            .filter(|call| call.key() == Some(key))
            .collect()
    }
}

impl EventRecorder for MemoryRecorder {
    fn record_event(&mut self, event_id: &str, payload: Option<EventValue>) -> Result<()> {
        self.calls.push(RecordedCall::Event {
            event_id: event_id.to_string(),
            payload,
        });
        Ok(())
    }

    fn record_events(
        &mut self,
        event_id: &str,
        count: u64,
        payload: Option<EventValue>,
    ) -> Result<()> {
        self.calls.push(RecordedCall::Events {
            event_id: event_id.to_string(),
            count,
            payload,
        });
        Ok(())
    }

    fn record_start(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()> {
        self.calls.push(RecordedCall::Start {
            event_id: event_id.to_string(),
            key,
            payload,
        });
        Ok(())
    }

    fn record_progress(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()> {
        self.calls.push(RecordedCall::Progress {
            event_id: event_id.to_string(),
            key,
            payload,
        });
        Ok(())
    }

    fn record_stop(
        &mut self,
        event_id: &str,
        key: EventValue,
        payload: Option<EventValue>,
    ) -> Result<()> {
        self.calls.push(RecordedCall::Stop {
            event_id: event_id.to_string(),
            key,
            payload,
        });
        Ok(())
    }
}

/// Recorder that accepts a fixed number of calls, then fails every
/// subsequent one. Used to verify that backend failures propagate out of
/// the driver unmodified.
#[derive(Debug)]
pub struct FailingRecorder {
    accepted: usize,
    remaining: usize,
}

impl FailingRecorder {
    /// Create a recorder that fails after accepting `calls` calls.
    pub fn fail_after(calls: usize) -> Self {
        Self {
            accepted: 0,
            remaining: calls,
        }
    }

    /// Number of calls accepted before the failure.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    fn accept(&mut self) -> Result<()> {
        if self.remaining == 0 {
            bail!("recording backend unavailable");
        }
        self.remaining -= 1;
        self.accepted += 1;
        Ok(())
    }
}

impl EventRecorder for FailingRecorder {
    fn record_event(&mut self, _event_id: &str, _payload: Option<EventValue>) -> Result<()> {
        self.accept()
    }

    fn record_events(
        &mut self,
        _event_id: &str,
        _count: u64,
        _payload: Option<EventValue>,
    ) -> Result<()> {
        self.accept()
    }

    fn record_start(
        &mut self,
        _event_id: &str,
        _key: EventValue,
        _payload: Option<EventValue>,
    ) -> Result<()> {
        self.accept()
    }

    fn record_progress(
        &mut self,
        _event_id: &str,
        _key: EventValue,
        _payload: Option<EventValue>,
    ) -> Result<()> {
        self.accept()
    }

    fn record_stop(
        &mut self,
        _event_id: &str,
        _key: EventValue,
        _payload: Option<EventValue>,
    ) -> Result<()> {
        self.accept()
    }
}
