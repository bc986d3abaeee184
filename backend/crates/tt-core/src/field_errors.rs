//! Field-keyed error messages.
//!
//! Produced locally by form validation and parsed from server error bodies, so a
//! caller can attach a message to the input that caused it or fall back to one
//! general banner.

use crate::{CoreError, CoreResult};

use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys in a server payload that carry a message not tied to a single input.
const GENERAL_KEYS: [&str; 5] = ["general", "detail", "error", "message", "non_field_errors"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub const GENERAL: &'static str = "general";

    pub fn new() -> Self {
        Self::default()
    }

    /// Single general message.
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(Self::GENERAL, message);
        errors
    }

    /// Append a message to `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Replace every message on `field` with `message`.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), vec![message.into()]);
    }

    /// Record `message` on `field` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.set(field, message);
        }
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when at least one message is attached to a concrete input.
    pub fn is_field_keyed(&self) -> bool {
        self.0.keys().any(|k| !GENERAL_KEYS.contains(&k.as_str()))
    }

    /// The message to show when errors cannot be attributed to inputs.
    pub fn general_message(&self) -> Option<&str> {
        GENERAL_KEYS.iter().find_map(|key| self.get(key))
    }

    /// Parse a server error body.
    ///
    /// Objects map key by key (`detail`, `error`, `message`, `non_field_errors`
    /// fold into `general`); a bare string becomes the general message.
    pub fn from_payload(payload: &Value) -> Self {
        let mut errors = Self::new();

        match payload {
            Value::Object(map) => {
                for (key, value) in map {
                    let field = if GENERAL_KEYS.contains(&key.as_str()) {
                        Self::GENERAL
                    } else {
                        key.as_str()
                    };
                    for message in flatten_messages(value) {
                        errors.add(field, message);
                    }
                }
            }
            Value::Null => {}
            other => {
                for message in flatten_messages(other) {
                    errors.add(Self::GENERAL, message);
                }
            }
        }

        errors
    }

    /// `Ok(())` when empty, otherwise the collected errors.
    pub fn into_validation(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// `Ok(())` when empty, otherwise a validation error at the caller.
    #[track_caller]
    pub fn into_result(self) -> CoreResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation {
                errors: self,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
