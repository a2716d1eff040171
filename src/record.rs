use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

pub const MODEL_FIELD: &str = "model";
pub const TERMINAL_TYPE_FIELD: &str = "terminal_type";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("terminal record has no `model` field")]
    MissingModel,
    #[error("terminal record has an empty `model` field")]
    EmptyModel,
    #[error("terminal record `{model}` has no `terminal_type` field")]
    MissingTerminalType { model: String },
}

/// One terminal model's specification sheet.
///
/// Fields keep the order they had in the source object. Falsy source values
/// (`null`, `false`, `0`, `""`) are stored as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRecord {
    fields: Vec<(String, String)>,
}

impl TerminalRecord {
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut collected: Vec<(String, String)> = Vec::new();
        for (name, value) in fields {
            let name = name.into();
            let value = value.into();
            // A repeated key keeps its first position but takes the last value
            match collected.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => collected.push((name, value)),
            }
        }

        let record = Self { fields: collected };
        match record.get(MODEL_FIELD) {
            None => return Err(RecordError::MissingModel),
            Some("") => return Err(RecordError::EmptyModel),
            Some(_) => {}
        }
        if record.get(TERMINAL_TYPE_FIELD).is_none() {
            return Err(RecordError::MissingTerminalType {
                model: record.model().to_string(),
            });
        }
        Ok(record)
    }

    pub fn model(&self) -> &str {
        self.get(MODEL_FIELD).unwrap_or_default()
    }

    pub fn terminal_type(&self) -> &str {
        self.get(TERMINAL_TYPE_FIELD).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// All fields in their natural order, including empty ones.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Display text for a JSON value; falsy values become the empty string.
fn value_text(value: Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for TerminalRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = TerminalRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a terminal record object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    fields.push((name, value_text(value)));
                }
                TerminalRecord::from_fields(fields).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
