use serde_json::Value;

use crate::error::AppError;

/// Filters accepted by the analytics endpoints. Every field is optional;
/// unset filters are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub map_id: Option<u64>,
    pub region_id: Option<u64>,
    pub event_id: Option<u64>,
    pub role_id: Option<u64>,
    pub patch_id: Option<u64>,
    pub side: Option<u64>,
}

/// Event search parameters. The free-text `query` is the one mandatory
/// field; everything else has a server-friendly default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    pub query: Option<String>,
    pub sort_by: String,
    pub ascending: bool,
    pub has_series: bool,
    pub take: u32,
}

impl EventsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        EventsQuery {
            query: Some(query.into()),
            ..EventsQuery::default()
        }
    }
}

impl Default for EventsQuery {
    fn default() -> Self {
        EventsQuery {
            query: None,
            sort_by: "startDate".to_string(),
            ascending: false,
            has_series: true,
            take: 50,
        }
    }
}

/// A player payload reshaped into a single table row: one column per
/// top-level field. Non-scalar fields keep their nested JSON verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    columns: Vec<(String, Value)>,
}

impl PlayerRow {
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(map) => Ok(PlayerRow {
                columns: map.into_iter().collect(),
            }),
            other => Err(AppError::MalformedResponse(format!(
                "expected a player object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
