//! Event-recording smoke driver.
//!
//! The driver replays the three event lifecycles against a recording
//! backend in a fixed per-iteration order: two singular events, two
//! aggregate events, then two complete Start/Progress/Progress/Stop
//! sequences under fresh correlation keys. A backend or harness may depend
//! on receiving exactly this order, so the driver never reorders calls.

use crate::error::SmokeError;
use crate::permissions::PermissionGate;
use crate::recorder::EventRecorder;
use smoke_core::events::{
    AGGREGATE_EVENT_A, AGGREGATE_EVENT_B, SEQUENCE_EVENT_A, SEQUENCE_EVENT_B, SINGULAR_EVENT_A,
    SINGULAR_EVENT_B,
};
use smoke_core::EventValue;
use smoke_generator::payload::{generate_payload, make_correlation_key};
use smoke_generator::{GeneratorError, PayloadFlavor, SeededRng};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from one smoke run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Whether the permission gate allowed the run.
    pub permitted: bool,
    /// Number of singular-event calls made.
    pub singular: u64,
    /// Number of aggregate-event calls made.
    pub aggregate: u64,
    /// Number of sequence-phase calls made (start, progress, and stop).
    pub sequence_phases: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl RunSummary {
    /// Total number of recorder calls made.
    pub fn total_calls(&self) -> u64 {
        self.singular + self.aggregate + self.sequence_phases
    }

    /// Calculate recorder calls per second.
    pub fn calls_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.total_calls() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives the three event lifecycles against a recording backend.
///
/// The runner owns the run context: the seeded value generator and the
/// permission gate. Construct one per run so the generated value stream is
/// reproducible from the seed alone.
pub struct SmokeRunner {
    rng: SeededRng,
    gate: PermissionGate,
}

impl SmokeRunner {
    /// Create a runner with the given seed and the default permission gate.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SeededRng::new(seed),
            gate: PermissionGate::new(),
        }
    }

    /// Replace the permission gate.
    pub fn with_gate(mut self, gate: PermissionGate) -> Self {
        self.gate = gate;
        self
    }

    /// Run `iterations` iterations with no payloads.
    pub fn run<R: EventRecorder>(
        &mut self,
        recorder: &mut R,
        iterations: u64,
    ) -> Result<RunSummary, SmokeError> {
        self.run_with(recorder, iterations, |_, _| Ok(None))
    }

    /// Run `iterations` iterations with the built-in flavor payloads.
    pub fn run_flavored<R: EventRecorder>(
        &mut self,
        recorder: &mut R,
        iterations: u64,
    ) -> Result<RunSummary, SmokeError> {
        self.run_with(recorder, iterations, |flavor, rng| {
            generate_payload(flavor, rng).map(Some)
        })
    }

    /// Run `iterations` iterations with a caller-supplied payload factory.
    ///
    /// The factory is invoked once per payload-carrying call site, with the
    /// runner's generator threaded in, so each sequence phase may receive a
    /// different value. Returning `None` records the call without payload.
    ///
    /// If the permission gate denies, the run returns immediately with an
    /// empty summary and zero recorder calls; denial is not an error. Any
    /// recorder failure ends the run and propagates unmodified.
    pub fn run_with<R, F>(
        &mut self,
        recorder: &mut R,
        iterations: u64,
        mut payload_factory: F,
    ) -> Result<RunSummary, SmokeError>
    where
        R: EventRecorder,
        F: FnMut(PayloadFlavor, &mut SeededRng) -> Result<Option<EventValue>, GeneratorError>,
    {
        let mut summary = RunSummary::default();

        if !self.gate.is_permitted() {
            return Ok(summary);
        }
        summary.permitted = true;

        info!("Starting smoke run: {} iterations", iterations);
        let started = Instant::now();

        for iteration in 0..iterations {
            debug!("Smoke iteration {}/{}", iteration + 1, iterations);

            recorder.record_event(SINGULAR_EVENT_A, None)?;
            recorder.record_event(
                SINGULAR_EVENT_B,
                payload_factory(PayloadFlavor::Mixed, &mut self.rng)?,
            )?;
            summary.singular += 2;

            recorder.record_events(AGGREGATE_EVENT_A, self.rng.next_int(5)? as u64, None)?;
            recorder.record_events(
                AGGREGATE_EVENT_B,
                self.rng.next_int(3)? as u64,
                payload_factory(PayloadFlavor::Tally, &mut self.rng)?,
            )?;
            summary.aggregate += 2;

            let key_a = make_correlation_key(&mut self.rng)?;
            recorder.record_start(SEQUENCE_EVENT_A, key_a.clone(), None)?;
            recorder.record_progress(SEQUENCE_EVENT_A, key_a.clone(), None)?;
            recorder.record_progress(SEQUENCE_EVENT_A, key_a.clone(), None)?;
            recorder.record_stop(SEQUENCE_EVENT_A, key_a, None)?;

            let key_b = make_correlation_key(&mut self.rng)?;
            recorder.record_start(
                SEQUENCE_EVENT_B,
                key_b.clone(),
                payload_factory(PayloadFlavor::Mood, &mut self.rng)?,
            )?;
            recorder.record_progress(
                SEQUENCE_EVENT_B,
                key_b.clone(),
                payload_factory(PayloadFlavor::Mood, &mut self.rng)?,
            )?;
            recorder.record_progress(
                SEQUENCE_EVENT_B,
                key_b.clone(),
                payload_factory(PayloadFlavor::Mood, &mut self.rng)?,
            )?;
            recorder.record_stop(
                SEQUENCE_EVENT_B,
                key_b,
                payload_factory(PayloadFlavor::Mood, &mut self.rng)?,
            )?;
            summary.sequence_phases += 8;
        }

        summary.total_duration = started.elapsed();
        info!(
            "Smoke run finished: {} calls in {:?} ({:.0} calls/sec)",
            summary.total_calls(),
            summary.total_duration,
            summary.calls_per_second()
        );

        Ok(summary)
    }
}
