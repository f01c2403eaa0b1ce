//! Transient control state sent by the dashboard widgets.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reserved dropdown value meaning "no state filter"
pub const ALL_STATES: &str = "All";

/// Inclusive hour bounds selected on the range slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HourRange {
    pub lo: u32,
    pub hi: u32,
}

impl HourRange {
    pub fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.lo <= hour && hour <= self.hi
    }
}

/// State dropdown value, carried over the wire as a plain string
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateFilter {
    #[default]
    All,
    Only(String),
}

impl StateFilter {
    pub fn matches(&self, state: &str) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(selected) => selected == state,
        }
    }

    /// Human readable dropdown label
    pub fn label(&self) -> &str {
        match self {
            StateFilter::All => "All States",
            StateFilter::Only(state) => state,
        }
    }

    /// Value submitted by the dropdown
    pub fn value(&self) -> &str {
        match self {
            StateFilter::All => ALL_STATES,
            StateFilter::Only(state) => state,
        }
    }
}

impl From<String> for StateFilter {
    fn from(value: String) -> Self {
        if value == ALL_STATES {
            StateFilter::All
        } else {
            StateFilter::Only(value)
        }
    }
}

impl From<&str> for StateFilter {
    fn from(value: &str) -> Self {
        StateFilter::from(value.to_string())
    }
}

impl From<StateFilter> for String {
    fn from(value: StateFilter) -> Self {
        value.value().to_string()
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Current value of every dashboard control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ControlValues {
    pub hour_range: HourRange,
    #[schema(value_type = String, example = "All")]
    pub state: StateFilter,
    pub hour: u32,
}

/// Partially specified control values, as sent in a query string.
/// Missing fields fall back to a base set of values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ControlQuery {
    pub lo: Option<u32>,
    pub hi: Option<u32>,
    pub state: Option<String>,
    pub hour: Option<u32>,
}

impl ControlQuery {
    pub fn resolve(self, base: &ControlValues) -> ControlValues {
        ControlValues {
            hour_range: HourRange {
                lo: self.lo.unwrap_or(base.hour_range.lo),
                hi: self.hi.unwrap_or(base.hour_range.hi),
            },
            state: self.state.map(StateFilter::from).unwrap_or_else(|| base.state.clone()),
            hour: self.hour.unwrap_or(base.hour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trips_through_strings() {
        assert_eq!(StateFilter::from("All"), StateFilter::All);
        assert_eq!(
            StateFilter::from("Penang"),
            StateFilter::Only("Penang".to_string())
        );
        assert_eq!(String::from(StateFilter::All), "All");
    }

    #[test]
    fn state_filter_serializes_as_plain_string() {
        let json = serde_json::to_string(&StateFilter::Only("Johor".to_string())).unwrap();
        assert_eq!(json, "\"Johor\"");

        let parsed: StateFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(parsed, StateFilter::All);
    }

    #[test]
    fn labels_name_the_sentinel() {
        assert_eq!(StateFilter::All.label(), "All States");
        assert_eq!(StateFilter::from("Kedah").label(), "Kedah");
    }

    #[test]
    fn query_falls_back_to_base_values() {
        let base = ControlValues {
            hour_range: HourRange::new(0, 23),
            state: StateFilter::All,
            hour: 0,
        };

        let query = ControlQuery {
            lo: Some(6),
            state: Some("Perak".to_string()),
            ..Default::default()
        };

        let values = query.resolve(&base);
        assert_eq!(values.hour_range, HourRange::new(6, 23));
        assert_eq!(values.state, StateFilter::from("Perak"));
        assert_eq!(values.hour, 0);
    }
}
