//! Smoke driver integration tests.
//!
//! These tests verify the full recording contract from the outside:
//! 1. Build a permitted (or denied) gate from a real permissions file
//! 2. Run the driver with a deterministic seed
//! 3. Assert the captured call stream: counts, fixed order, phase
//!    ordering per correlation key, and payload shapes

use metrics_smoketest::events::{
    AGGREGATE_EVENT_A, AGGREGATE_EVENT_B, SEQUENCE_EVENT_A, SEQUENCE_EVENT_B, SINGULAR_EVENT_A,
    SINGULAR_EVENT_B,
};
use metrics_smoketest::testing::{FailingRecorder, MemoryRecorder, RecordedCall};
use metrics_smoketest::{PermissionGate, SmokeError, SmokeRunner};
use smoke_generator::wide_payload;
use tempfile::TempDir;

const SEED: u64 = 42;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("metrics_smoketest=debug")
        .try_init()
        .ok();
}

/// Gate backed by a real dev-environment permissions file.
fn permitted_gate(dir: &TempDir) -> PermissionGate {
    let path = dir.path().join("permissions.yaml");
    std::fs::write(&path, "global:\n  environment: dev\n").expect("failed to write permissions");
    PermissionGate::with_config_path(path)
}

/// Gate whose permissions file does not exist.
fn denied_gate(dir: &TempDir) -> PermissionGate {
    PermissionGate::with_config_path(dir.path().join("missing.yaml"))
}

fn permitted_runner(dir: &TempDir, seed: u64) -> SmokeRunner {
    SmokeRunner::new(seed).with_gate(permitted_gate(dir))
}

#[test]
fn test_denied_run_makes_zero_calls() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = SmokeRunner::new(SEED).with_gate(denied_gate(&dir));
    let mut recorder = MemoryRecorder::new();

    let summary = runner.run(&mut recorder, 50).unwrap();

    assert!(!summary.permitted);
    assert_eq!(summary.total_calls(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn test_call_count_invariant() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = MemoryRecorder::new();

    let iterations = 4;
    let summary = runner.run(&mut recorder, iterations).unwrap();

    assert!(summary.permitted);
    assert_eq!(summary.singular, 2 * iterations);
    assert_eq!(summary.aggregate, 2 * iterations);
    assert_eq!(summary.sequence_phases, 8 * iterations);
    assert_eq!(recorder.len() as u64, summary.total_calls());
}

#[test]
fn test_end_to_end_single_iteration() {
    // Seed 42, one iteration, permitted, no payloads: exactly 12 calls.
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = MemoryRecorder::new();

    let summary = runner.run(&mut recorder, 1).unwrap();

    assert!(summary.permitted);
    assert_eq!(summary.total_calls(), 12);
    assert_eq!(recorder.len(), 12);

    let expected_ids = [
        SINGULAR_EVENT_A,
        SINGULAR_EVENT_B,
        AGGREGATE_EVENT_A,
        AGGREGATE_EVENT_B,
        SEQUENCE_EVENT_A,
        SEQUENCE_EVENT_A,
        SEQUENCE_EVENT_A,
        SEQUENCE_EVENT_A,
        SEQUENCE_EVENT_B,
        SEQUENCE_EVENT_B,
        SEQUENCE_EVENT_B,
        SEQUENCE_EVENT_B,
    ];
    for (call, expected) in recorder.calls.iter().zip(expected_ids) {
        assert_eq!(call.event_id(), expected);
    }

    // Singular calls first, without payloads.
    assert!(matches!(
        &recorder.calls[0],
        RecordedCall::Event { payload: None, .. }
    ));
    assert!(matches!(
        &recorder.calls[1],
        RecordedCall::Event { payload: None, .. }
    ));

    // Aggregate counts come from the seeded generator's documented bounds.
    match (&recorder.calls[2], &recorder.calls[3]) {
        (
            RecordedCall::Events {
                count: count_a,
                payload: None,
                ..
            },
            RecordedCall::Events {
                count: count_b,
                payload: None,
                ..
            },
        ) => {
            assert!(*count_a < 5);
            assert!(*count_b < 3);
        }
        other => panic!("expected two aggregate calls, got {other:?}"),
    }
}

#[test]
fn test_sequence_phase_ordering_per_key() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = MemoryRecorder::new();

    runner.run(&mut recorder, 3).unwrap();

    let keys: Vec<_> = recorder
        .calls
        .iter()
        .filter_map(|call| match call {
            RecordedCall::Start { key, .. } => Some(key.clone()),
            _ => None,
        })
        .collect();

    // Two fresh keys per iteration, all distinct.
    assert_eq!(keys.len(), 6);
    for (i, key) in keys.iter().enumerate() {
        assert!(key.as_f64().is_some(), "correlation keys must be Doubles");
        for later in &keys[i + 1..] {
            assert_ne!(key, later);
        }
    }

    // Every key's calls form exactly Start, Progress, Progress, Stop with
    // no interleaving from the other sequence's key.
    for key in &keys {
        let phases = recorder.calls_for_key(key);
        assert_eq!(phases.len(), 4);
        assert!(matches!(phases[0], RecordedCall::Start { .. }));
        assert!(matches!(phases[1], RecordedCall::Progress { .. }));
        assert!(matches!(phases[2], RecordedCall::Progress { .. }));
        assert!(matches!(phases[3], RecordedCall::Stop { .. }));

        let positions: Vec<usize> = recorder
            .calls
            .iter()
            .enumerate()
            .filter(|(_, call)| call.key() == Some(key))
            .map(|(index, _)| index)
            .collect();
        let contiguous: Vec<usize> = (positions[0]..positions[0] + 4).collect();
        assert_eq!(positions, contiguous);
    }
}

#[test]
fn test_runs_are_deterministic() {
    init_tracing();
    let dir = TempDir::new().unwrap();

    let mut first = MemoryRecorder::new();
    permitted_runner(&dir, 7)
        .run_flavored(&mut first, 3)
        .unwrap();

    let mut second = MemoryRecorder::new();
    permitted_runner(&dir, 7)
        .run_flavored(&mut second, 3)
        .unwrap();

    assert_eq!(first.calls, second.calls);

    let mut other_seed = MemoryRecorder::new();
    permitted_runner(&dir, 8)
        .run_flavored(&mut other_seed, 3)
        .unwrap();

    assert_ne!(first.calls, other_seed.calls);
}

#[test]
fn test_flavored_payload_shapes() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = MemoryRecorder::new();

    runner.run_flavored(&mut recorder, 1).unwrap();

    // Singular B carries the mixed dict.
    let mixed = recorder.calls[1].payload().expect("singular B has payload");
    let entries = mixed.as_dict().expect("mixed payload is a dict");
    assert!(entries.contains_key("widgets"));
    assert!(entries.contains_key("load_factor"));
    assert!(entries.contains_key("saturated"));

    // Aggregate B carries the tally dict.
    let tally = recorder.calls[3].payload().expect("aggregate B has payload");
    let entries = tally.as_dict().expect("tally payload is a dict");
    assert!(entries.contains_key("samples"));
    assert!(entries.contains_key("annotation"));

    // Sequence A phases carry no payload; sequence B phases each carry an
    // independently generated mood string.
    for call in &recorder.calls[4..8] {
        assert_eq!(call.payload(), None);
    }
    for call in &recorder.calls[8..12] {
        let mood = call.payload().expect("sequence B phases have payloads");
        assert!(mood.as_str().is_some());
    }
}

#[test]
fn test_wide_payload_run() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = MemoryRecorder::new();

    runner
        .run_with(&mut recorder, 1, |_, rng| wide_payload(rng, 300).map(Some))
        .unwrap();

    assert_eq!(recorder.len(), 12);
    let payload = recorder.calls[1].payload().expect("singular B has payload");
    let entries = payload.as_dict().expect("wide payload is a dict");
    assert_eq!(entries.len(), 300);
    assert!(entries.values().all(|value| value.as_i64().is_some()));
}

#[test]
fn test_backend_failure_propagates() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let mut runner = permitted_runner(&dir, SEED);
    let mut recorder = FailingRecorder::fail_after(3);

    let result = runner.run(&mut recorder, 1);

    match result {
        Err(SmokeError::Recorder(e)) => {
            assert!(e.to_string().contains("backend unavailable"));
        }
        other => panic!("expected recorder failure, got {other:?}"),
    }
    assert_eq!(recorder.accepted(), 3);
}
