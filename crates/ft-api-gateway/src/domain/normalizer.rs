//! Response shape normalization.
//!
//! Guarantees a designated field (by default `blockchainAddress`) at the top
//! level of every JSON object response, and copies it into a configured set of
//! sub-objects (by default `data` and `user`).
//!
//! Rules:
//! - Non-object payloads are left alone.
//! - A blank top-level field gets one generated value.
//! - Each alias that is an object with a blank field gets a copy of the
//!   top-level value, so every filled location agrees.
//! - Non-blank values are never overwritten.
//!
//! "Blank" means absent, `null`, `false`, `""` or `0`.

use super::config::NormalizerConfig;
use super::error::NormalizeError;
use serde_json::{Map, Value};

/// What a normalization pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Payload was a JSON object
    pub is_object: bool,
    /// Top-level field was generated
    pub generated: bool,
    /// Aliases that received a copy
    pub filled_aliases: Vec<String>,
}

impl NormalizeReport {
    pub fn changed(&self) -> bool {
        self.generated || !self.filled_aliases.is_empty()
    }
}

/// Pure field normalizer; the HTTP wiring lives in `middleware::normalize`.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    field: String,
    aliases: Vec<String>,
}

impl FieldNormalizer {
    pub fn new(field: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            field: field.into(),
            aliases,
        }
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self::new(config.field.clone(), config.aliases.clone())
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Normalize `payload` in place. `generate` runs at most once.
    pub fn apply<F>(&self, payload: &mut Value, generate: F) -> NormalizeReport
    where
        F: FnOnce() -> String,
    {
        let Value::Object(root) = payload else {
            return NormalizeReport::default();
        };

        let mut report = NormalizeReport {
            is_object: true,
            ..Default::default()
        };

        let canonical = match root.get(&self.field) {
            Some(existing) if !is_blank(existing) => existing.clone(),
            _ => {
                let value = Value::String(generate());
                root.insert(self.field.clone(), value.clone());
                report.generated = true;
                value
            }
        };

        for alias in &self.aliases {
            if let Some(Value::Object(inner)) = root.get_mut(alias) {
                if fill_if_blank(inner, &self.field, &canonical) {
                    report.filled_aliases.push(alias.clone());
                }
            }
        }

        report
    }

    /// Normalize a serialized body.
    ///
    /// Returns `Ok(None)` when the bytes should go out unchanged: not JSON, not
    /// an object, or already complete.
    pub fn apply_bytes<F>(&self, bytes: &[u8], generate: F) -> Result<Option<Vec<u8>>, NormalizeError>
    where
        F: FnOnce() -> String,
    {
        let mut payload: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(_) => return Ok(None),
        };

        let report = self.apply(&mut payload, generate);
        if !report.changed() {
            return Ok(None);
        }

        Ok(Some(serde_json::to_vec(&payload)?))
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}

fn fill_if_blank(object: &mut Map<String, Value>, field: &str, value: &Value) -> bool {
    match object.get(field) {
        Some(existing) if !is_blank(existing) => false,
        _ => {
            object.insert(field.to_string(), value.clone());
            true
        }
    }
}

/// JavaScript-style falsiness for JSON values.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
