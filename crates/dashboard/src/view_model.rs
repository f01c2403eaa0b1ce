//! Control bounds and options derived once from the loaded table.

use itertools::Itertools;
use log::debug;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    controls::{ControlValues, HourRange, StateFilter},
    dataset::Dataset,
};

/// Hour slider bounds plus one tick mark per hour present in the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HourDomain {
    pub min: u32,
    pub max: u32,
    pub marks: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StateOption {
    pub label: String,
    pub value: String,
}

impl From<&StateFilter> for StateOption {
    fn from(filter: &StateFilter) -> Self {
        Self {
            label: filter.label().to_string(),
            value: filter.value().to_string(),
        }
    }
}

/// Everything the shell needs to draw its controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ControlRegistry {
    pub hours: HourDomain,
    /// `All` first, then each state in the order it first appears
    pub states: Vec<StateOption>,
}

impl ControlRegistry {
    pub fn from_dataset(data: &Dataset) -> Self {
        let marks: Vec<u32> = data.rows().iter().map(|row| row.hour).unique().collect();
        let hours = match marks.iter().minmax().into_option() {
            Some((&min, &max)) => HourDomain {
                min,
                max,
                marks: marks.clone(),
            },
            None => HourDomain {
                min: 0,
                max: 0,
                marks: Vec::new(),
            },
        };

        let states = std::iter::once(StateFilter::All)
            .chain(
                data.rows()
                    .iter()
                    .map(|row| row.state.as_str())
                    .unique()
                    .map(StateFilter::from),
            )
            .map(|filter| StateOption::from(&filter))
            .collect::<Vec<_>>();

        debug!(
            "hour domain {}..={} with {} marks, {} state options",
            hours.min,
            hours.max,
            hours.marks.len(),
            states.len()
        );

        Self { hours, states }
    }

    /// Values the controls show on first page load
    pub fn initial_values(&self) -> ControlValues {
        ControlValues {
            hour_range: HourRange::new(self.hours.min, self.hours.max),
            state: StateFilter::All,
            hour: self.hours.min,
        }
    }
}
