//! Run-history payload model and JSON parsing.
//!
//! A run-history payload is the `data.json` file written by the benchmark
//! harness: scalar metadata (`repository`, `first_run`, `last_run`) plus a
//! map from command string to a list of run records. Two payload shapes
//! exist: a flat map under `run_data`, and a branch-grouped map of maps
//! under `branches`. The shape is decided once here and carried as the
//! [`RunData`] enum so downstream code never re-inspects raw JSON.
//!
//! Record timestamps are kept in epoch seconds exactly as stored; scaling
//! to milliseconds happens when chart series are built.

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

/// Runs for each command, in payload document order
pub type CommandRuns = IndexMap<String, Vec<RunRecord>>;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while parsing a run-history payload
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Payload-level structural problem (missing scalars, no run map)
    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    /// A single run record is malformed; parsing stops at the first one
    #[error("Invalid record for '{context}' at index {index}: {reason}")]
    InvalidRecord {
        context: String,
        index: usize,
        reason: String,
    },

    /// The payload is not valid JSON at all
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Payload Types
// ============================================================================

/// Version-control context captured with a run, possibly empty
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VcsInfo {
    pub commit: Option<String>,
    pub branch: Option<String>,
}

impl VcsInfo {
    /// True when the harness recorded no VCS data for the run
    pub fn is_empty(&self) -> bool {
        self.commit.is_none() && self.branch.is_none()
    }
}

/// One benchmark run: when it started and how long it took
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    /// Run start, epoch seconds
    pub timestamp_secs: f64,
    /// Wall-clock runtime in seconds
    pub duration_secs: f64,
    pub vcs: VcsInfo,
}

/// Run map in one of the two payload shapes
#[derive(Clone, Debug, PartialEq)]
pub enum RunData {
    /// `run_data`: command -> runs
    Flat(CommandRuns),
    /// `branches`: branch -> command -> runs
    Branched(IndexMap<String, CommandRuns>),
}

impl RunData {
    /// Number of chart series this data will produce
    pub fn series_count(&self) -> usize {
        match self {
            RunData::Flat(commands) => commands.len(),
            RunData::Branched(branches) => branches.values().map(IndexMap::len).sum(),
        }
    }
}

/// A fully parsed run-history payload
#[derive(Clone, Debug, PartialEq)]
pub struct RunHistory {
    /// Repository name reported by the harness
    pub repository: String,
    /// Earliest tracked run. Epoch seconds as parsed; the owning session
    /// scales it to milliseconds once, together with `last_run`.
    pub first_run: f64,
    /// Latest tracked run, same unit handling as `first_run`
    pub last_run: f64,
    pub data: RunData,
}

// ============================================================================
// Parsing
// ============================================================================

impl RunHistory {
    /// Parse a run-history payload from JSON text.
    ///
    /// Fails fast: the first malformed record aborts the whole parse with
    /// its command context and index.
    pub fn parse(json: &str) -> Result<Self, HistoryError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse an already-deserialized JSON value
    pub fn from_value(value: &Value) -> Result<Self, HistoryError> {
        let obj = value.as_object().ok_or_else(|| invalid_payload("payload must be a JSON object"))?;

        let repository = obj
            .get("repository")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_payload("missing or non-string 'repository'"))?
            .to_string();
        let first_run = scalar_timestamp(obj.get("first_run"), "first_run")?;
        let last_run = scalar_timestamp(obj.get("last_run"), "last_run")?;

        // Shape is decided exactly once: a 'branches' key wins, otherwise
        // 'run_data' is required.
        let data = if let Some(branches) = obj.get("branches") {
            RunData::Branched(parse_branches(branches)?)
        } else if let Some(run_data) = obj.get("run_data") {
            RunData::Flat(parse_commands(run_data, None)?)
        } else {
            return Err(invalid_payload("missing 'run_data' or 'branches'"));
        };

        Ok(RunHistory {
            repository,
            first_run,
            last_run,
            data,
        })
    }

    /// Scale the payload-level run bounds from seconds to milliseconds.
    ///
    /// Called exactly once when a session takes ownership of the history,
    /// after series have been built from the per-record timestamps.
    pub fn convert_bounds_to_millis(&mut self) {
        self.first_run *= 1000.0;
        self.last_run *= 1000.0;
    }
}

fn invalid_payload(reason: &str) -> HistoryError {
    tracing::warn!("rejecting payload: {reason}");
    HistoryError::InvalidPayload {
        reason: reason.to_string(),
    }
}

fn invalid_record(context: &str, index: usize, reason: &str) -> HistoryError {
    tracing::warn!("rejecting record {index} of '{context}': {reason}");
    HistoryError::InvalidRecord {
        context: context.to_string(),
        index,
        reason: reason.to_string(),
    }
}

fn scalar_timestamp(value: Option<&Value>, field: &str) -> Result<f64, HistoryError> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid_payload(&format!("missing or non-numeric '{field}'")))
}

/// Parse a branch -> command -> runs map
fn parse_branches(value: &Value) -> Result<IndexMap<String, CommandRuns>, HistoryError> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid_payload("'branches' must be an object"))?;

    let mut branches = IndexMap::with_capacity(obj.len());
    for (branch, commands) in obj {
        branches.insert(branch.clone(), parse_commands(commands, Some(branch))?);
    }
    Ok(branches)
}

/// Parse a command -> runs map. `branch` is only used to build error context.
fn parse_commands(value: &Value, branch: Option<&str>) -> Result<CommandRuns, HistoryError> {
    let obj = value.as_object().ok_or_else(|| match branch {
        Some(branch) => invalid_payload(&format!("branch '{branch}' must map commands to runs")),
        None => invalid_payload("'run_data' must map commands to runs"),
    })?;

    let mut commands = IndexMap::with_capacity(obj.len());
    for (command, runs) in obj {
        let context = match branch {
            Some(branch) => format!("{command}@{branch}"),
            None => command.clone(),
        };
        let runs = runs
            .as_array()
            .ok_or_else(|| invalid_payload(&format!("runs for '{context}' must be an array")))?;

        let mut records = Vec::with_capacity(runs.len());
        for (index, run) in runs.iter().enumerate() {
            records.push(parse_record(run, &context, index)?);
        }
        commands.insert(command.clone(), records);
    }
    Ok(commands)
}

/// Parse one `[timestamp, duration, vcs]` record.
///
/// Extra trailing elements are tolerated; missing elements, non-numeric
/// timestamp/duration, or a non-object third element are rejected.
fn parse_record(value: &Value, context: &str, index: usize) -> Result<RunRecord, HistoryError> {
    let parts = value
        .as_array()
        .ok_or_else(|| invalid_record(context, index, "record must be an array"))?;
    if parts.len() < 3 {
        return Err(invalid_record(
            context,
            index,
            &format!("record has {} elements, expected 3", parts.len()),
        ));
    }

    let timestamp_secs = parts[0]
        .as_f64()
        .ok_or_else(|| invalid_record(context, index, "non-numeric timestamp"))?;
    let duration_secs = parts[1]
        .as_f64()
        .ok_or_else(|| invalid_record(context, index, "non-numeric duration"))?;
    let vcs_obj = parts[2]
        .as_object()
        .ok_or_else(|| invalid_record(context, index, "VCS info must be an object"))?;

    let vcs = VcsInfo {
        commit: vcs_obj
            .get("commit")
            .and_then(Value::as_str)
            .map(String::from),
        branch: vcs_obj
            .get("branch")
            .and_then(Value::as_str)
            .map(String::from),
    };

    Ok(RunRecord {
        timestamp_secs,
        duration_secs,
        vcs,
    })
}
