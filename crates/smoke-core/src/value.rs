//! Tagged-variant payload values for the smoke-test kit.
//!
//! This module defines the value model attached to recorded events. Values
//! are construction-only: the kit builds payloads and hands them to the
//! recording backend, which owns decoding.

use serde::Serialize;
use std::collections::HashMap;

/// A tagged-variant payload value.
///
/// `EventValue` represents one value in an event payload: a fixed-width
/// scalar, a string, or a string-keyed mapping of further values. Payloads
/// are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventValue {
    /// 32-bit unsigned integer
    UInt32(u32),

    /// 64-bit unsigned integer
    UInt64(u64),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Double(f64),

    /// Boolean value
    Bool(bool),

    /// UTF-8 string
    String(String),

    /// Mapping from field name to value; keys unique, insertion order
    /// irrelevant, values heterogeneously tagged
    Dict(HashMap<String, EventValue>),
}

impl EventValue {
    /// Start building a `Dict` value.
    pub fn dict() -> DictBuilder {
        DictBuilder {
            entries: HashMap::new(),
        }
    }

    /// Check if this value is a dict.
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(_))
    }

    /// Try to get this value as a u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::UInt32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt64(v) => Some(*v),
            Self::UInt32(v) => Some(*v as u64),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a dict.
    pub fn as_dict(&self) -> Option<&HashMap<String, EventValue>> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Builder for [`EventValue::Dict`].
pub struct DictBuilder {
    entries: HashMap<String, EventValue>,
}

impl DictBuilder {
    /// Add an entry to the dict. Re-adding a key replaces its value, so
    /// built payloads always carry unique keys.
    pub fn entry(mut self, name: impl Into<String>, value: EventValue) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Build the dict value.
    pub fn build(self) -> EventValue {
        EventValue::Dict(self.entries)
    }
}
