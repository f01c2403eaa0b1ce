use log::info;

use crate::{
    charts::{self, Figure},
    controls::ControlValues,
    dataset::Dataset,
    view_model::ControlRegistry,
};

/// Read-only state shared by every request.
///
/// Built once after the dataset is loaded. The control registry and the pressure
/// chart depend only on the table, so they are computed here and never again.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    dataset: Dataset,
    registry: ControlRegistry,
    pressure: Figure,
}

impl DashboardContext {
    pub fn new(dataset: Dataset) -> Self {
        let registry = ControlRegistry::from_dataset(&dataset);
        let pressure = charts::pressure_by_state(&dataset);
        info!(
            "dashboard ready: {} rows, hours {}..={}, {} states",
            dataset.len(),
            registry.hours.min,
            registry.hours.max,
            registry.states.len() - 1
        );
        Self {
            dataset,
            registry,
            pressure,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn pressure(&self) -> &Figure {
        &self.pressure
    }

    pub fn initial_values(&self) -> ControlValues {
        self.registry.initial_values()
    }
}
