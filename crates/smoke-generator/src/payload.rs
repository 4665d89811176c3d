//! Payload flavors, correlation keys, and payload generation.

use crate::error::GeneratorError;
use crate::names::FieldNameSequence;
use crate::rng::SeededRng;
use smoke_core::EventValue;

/// Scale of the uniform draw backing correlation keys.
const CORRELATION_KEY_SCALE: f64 = 50_000.0;

/// Mood words for [`PayloadFlavor::Mood`] payloads.
const MOODS: [&str; 4] = ["calm", "restless", "skittish", "ornery"];

/// Upper bound (exclusive) on entry values in a wide payload.
const WIDE_ENTRY_BOUND: i64 = 80_000;

/// The payload shapes the smoke driver asks for.
///
/// Each flavor carries its own generation logic, so a payload site names
/// the shape it wants instead of dispatching on a string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFlavor {
    /// Dict of three heterogeneously tagged scalars.
    Mixed,
    /// Dict pairing a wide counter with a fixed annotation string.
    Tally,
    /// Bare string drawn from a fixed set of mood words.
    Mood,
}

impl std::fmt::Display for PayloadFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadFlavor::Mixed => write!(f, "mixed"),
            PayloadFlavor::Tally => write!(f, "tally"),
            PayloadFlavor::Mood => write!(f, "mood"),
        }
    }
}

impl std::str::FromStr for PayloadFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mixed" => Ok(PayloadFlavor::Mixed),
            "tally" => Ok(PayloadFlavor::Tally),
            "mood" => Ok(PayloadFlavor::Mood),
            _ => Err(format!("Unknown payload flavor: {s}")),
        }
    }
}

/// Generate a fresh correlation key.
///
/// The key is a `Double` drawn uniformly from `[0, 50000)`. It must be
/// generated once per sequence instance and reused unchanged across that
/// sequence's phases; the draw range makes collisions between concurrently
/// open sequences vanishingly unlikely.
pub fn make_correlation_key(rng: &mut SeededRng) -> Result<EventValue, GeneratorError> {
    Ok(EventValue::Double(rng.next_float(CORRELATION_KEY_SCALE)?))
}

/// Generate a payload of the given flavor.
pub fn generate_payload(
    flavor: PayloadFlavor,
    rng: &mut SeededRng,
) -> Result<EventValue, GeneratorError> {
    match flavor {
        PayloadFlavor::Mixed => Ok(EventValue::dict()
            .entry("widgets", EventValue::UInt32(rng.next_int(10)? as u32))
            .entry("load_factor", EventValue::Double(rng.next_float(7.5)?))
            .entry("saturated", EventValue::Bool(rng.next_bool()))
            .build()),

        PayloadFlavor::Tally => Ok(EventValue::dict()
            .entry("samples", EventValue::UInt64(rng.next_int(1543)? as u64))
            .entry(
                "annotation",
                EventValue::String("synthetic sample batch".to_string()),
            )
            .build()),

        PayloadFlavor::Mood => {
            let index = rng.next_int(MOODS.len() as i64)? as usize;
            Ok(EventValue::String(MOODS[index].to_string()))
        }
    }
}

/// Generate a wide payload of `entries` fields.
///
/// Field names come from the field-name sequence in order, so every key is
/// unique; each value is an `Int64` draw. Used to exercise the backend with
/// oversized payloads.
pub fn wide_payload(rng: &mut SeededRng, entries: usize) -> Result<EventValue, GeneratorError> {
    let mut dict = EventValue::dict();
    for name in FieldNameSequence::new().take(entries) {
        dict = dict.entry(name, EventValue::Int64(rng.next_int(WIDE_ENTRY_BOUND)?));
    }
    Ok(dict.build())
}
