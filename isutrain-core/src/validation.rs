use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Unix timestamp of `0001-01-01T00:00:00Z`, the zero value some clients send for "unset".
const YEAR_ONE_TIMESTAMP: i64 = -62_135_596_800;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed request: {0}")]
    Malformed(String),
    #[error("Missing required field: {0}")]
    Missing(&'static str),
    #[error("Invalid ISO-8601 timestamp in {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("Zero timestamp in {0}")]
    ZeroTimestamp(&'static str),
    #[error("Invalid reservation id: {0:?}")]
    InvalidReservationId(String),
}

// ============================================================================
// Inputs
// ============================================================================

/// Form body of register and login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTrainsQuery {
    pub use_at: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Seat listing query. Both keys may repeat.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainSeatsQuery {
    #[serde(default)]
    pub train_class: Vec<String>,
    #[serde(default)]
    pub train_name: Vec<String>,
}

/// A search request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub use_at: DateTime<FixedOffset>,
    pub from: String,
    pub to: String,
}

// ============================================================================
// Rules
// ============================================================================

pub fn credentials(form: &CredentialsForm) -> Result<(), ValidationError> {
    if form.username.is_empty() {
        return Err(ValidationError::Missing("username"));
    }
    if form.password.is_empty() {
        return Err(ValidationError::Missing("password"));
    }
    Ok(())
}

pub fn search_trains(query: &SearchTrainsQuery) -> Result<SearchCriteria, ValidationError> {
    let raw = query
        .use_at
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::Missing("use_at"))?;
    let use_at = parse_iso8601("use_at", raw)?;

    if is_zero_timestamp(&use_at) {
        return Err(ValidationError::ZeroTimestamp("use_at"));
    }

    let from = required(query.from.as_deref(), "from")?;
    let to = required(query.to.as_deref(), "to")?;

    Ok(SearchCriteria {
        use_at,
        from: from.to_string(),
        to: to.to_string(),
    })
}

pub fn train_seats(query: &TrainSeatsQuery) -> Result<(), ValidationError> {
    if query.train_class.is_empty() {
        return Err(ValidationError::Missing("train_class"));
    }
    if query.train_name.is_empty() {
        return Err(ValidationError::Missing("train_name"));
    }
    Ok(())
}

/// Parse the reservation id embedded in a request path. Must be a positive integer.
pub fn reservation_id(raw: &str) -> Result<u64, ValidationError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidReservationId(raw.to_string())),
    }
}

/// Accepts RFC 3339 (`2020-12-19T10:00:00+09:00`) and the compact-offset
/// ISO-8601 form (`2020-12-19T10:00:00+0900`).
pub fn parse_iso8601(
    field: &'static str,
    raw: &str,
) -> Result<DateTime<FixedOffset>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|_| ValidationError::InvalidTimestamp {
            field,
            value: raw.to_string(),
        })
}

fn is_zero_timestamp(ts: &DateTime<FixedOffset>) -> bool {
    ts.timestamp_subsec_nanos() == 0
        && (ts.timestamp() == 0 || ts.timestamp() == YEAR_ONE_TIMESTAMP)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::Missing(field))
}
