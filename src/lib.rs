use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One sample of a motion run, laid out as [`TRACE_COLUMNS`].
pub type TraceRow = [f64; 8];

pub const TRACE_COLUMNS: [&str; 8] = [
    "milliseconds",
    "profile_acceleration",
    "profile_velocity",
    "profile_ticks",
    "actual_ticks",
    "forward",
    "strafe",
    "azimuth",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Float(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub profile_velocity: i64,
    pub profile_distance: i64,
    pub actual_distance: f64,
    pub profile_ticks: i64,
    pub actual_ticks: i64,
    pub data: Vec<TraceRow>,
    pub meta: BTreeMap<String, MetaValue>,
}

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("cannot serialize {field}: {reason}")]
    Serialization { field: String, reason: String },
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered {status}: {body}")]
    Rejected {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("unable to write response")]
    Output(#[from] std::io::Error),
}

impl ActivityError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ActivityError::Transport { .. } | ActivityError::Rejected { .. } => 2,
            ActivityError::Serialization { .. } => 3,
            ActivityError::Output(_) => 4,
        }
    }
}

impl Activity {
    pub fn new(name: impl Into<String>, profile_velocity: i64, profile_distance: i64) -> Self {
        Self {
            name: name.into(),
            profile_velocity,
            profile_distance,
            actual_distance: 0.,
            profile_ticks: 0,
            actual_ticks: 0,
            data: Vec::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Encodes the record as a compact JSON document.
    ///
    /// serde_json quietly writes non-finite floats as `null`, so those are
    /// rejected here instead.
    pub fn to_json(&self) -> Result<String, ActivityError> {
        check_finite("actualDistance", self.actual_distance)?;
        for (row, sample) in self.data.iter().enumerate() {
            for (column, value) in sample.iter().enumerate() {
                check_finite(&format!("data[{row}][{column}]"), *value)?;
            }
        }
        for (key, value) in &self.meta {
            if let MetaValue::Float(value) = value {
                check_finite(&format!("meta.{key}"), *value)?;
            }
        }

        serde_json::to_string(self).map_err(|e| ActivityError::Serialization {
            field: "activity".into(),
            reason: e.to_string(),
        })
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ActivityError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(ActivityError::Serialization {
        field: field.to_string(),
        reason: format!("{value} has no JSON representation"),
    })
}
