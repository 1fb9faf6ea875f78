// Core structs: ElectionRecord and its nested parts, RunSummary, error types
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// One election as delivered by the Election Guide API.
///
/// `district` and `government_functions` are required; a record without them
/// fails to decode and is skipped by the pipeline. Every other scalar is
/// optional and kept as raw JSON so the normalizer decides how to render it.
#[derive(Debug, Clone, Deserialize)]
pub struct ElectionRecord {
    pub election_id: Value,
    pub election_name: HashMap<String, Value>,
    pub date_updated: Option<Value>,
    pub election_issues: Option<Value>,
    pub is_snap_election: Option<Value>,
    pub original_election_year: Option<Value>,
    pub election_range_start_date: Option<String>,
    pub election_range_end_date: Option<Value>,
    pub is_delayed_covid19: Option<Value>,
    pub covid_effects: Option<Value>,
    pub election_declared_start_date: Option<String>,
    pub election_declared_end_date: Option<Value>,
    pub election_blackout_start_date: Option<Value>,
    pub election_blackout_end_date: Option<Value>,
    pub election_type: Option<Value>,
    pub election_scope: Option<Value>,
    pub electoral_system: Option<Value>,
    pub election_commission_name: Option<Value>,
    pub administering_election_commission_website: Option<Value>,
    pub source: Option<Value>,
    pub district: District,
    pub government_functions: GovernmentFunctions,
    pub voter_registration_day: Option<Value>,
    pub voting_age_minimum_inclusive: Option<Value>,
    pub eligible_voters: Option<Value>,
    pub first_time_voters: Option<Value>,
    pub voting_methods: Option<Vec<VotingMethod>>,
}

impl ElectionRecord {
    pub fn from_value(value: &Value) -> Result<Self, NormalizeError> {
        Ok(Self::deserialize(value)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct District {
    pub district_ocd_id: Option<Value>,
    pub district_name: Option<Value>,
    pub district_country: Option<Value>,
    pub district_type: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GovernmentFunctions {
    pub details: Option<Value>,
    pub updated: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VotingMethod {
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub primary: Option<Value>,
    pub start: Option<Value>,
    pub end: Option<Value>,
    #[serde(rename = "excuse-required")]
    pub excuse_required: Option<Value>,
    pub instructions: Option<Value>,
}

/// Counters reported at the end of every run, whether it succeeded or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub in_window: usize,
    pub before_window: usize,
    pub undated: usize,
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config value `{0}` must not be empty")]
    Missing(&'static str),
    #[error("config value `{key}` = {value} is outside 0..={max}")]
    OutOfRange { key: &'static str, value: i64, max: i64 },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("API payload is not a JSON array of records: {0}")]
    Decode(String),
    #[error("API returned no election records")]
    Empty,
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed election record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid date `{value}` in `{field}`: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("no data from the API: {0}")]
    NoData(#[from] FetchError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
