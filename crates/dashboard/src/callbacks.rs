//! Binding of control events to chart outputs.
//!
//! Each output is bound to the controls it reads and to one pure handler. When a control
//! changes, every output bound to it is recomputed from the shared context, in table order.

use log::debug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    charts::{self, Figure},
    context::DashboardContext,
    controls::ControlValues,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    HourRangeSlider,
    StateDropdown,
    HourSlider,
}

impl ControlId {
    /// DOM ids of the inputs that make up the control
    pub fn dom_ids(&self) -> &'static [&'static str] {
        match self {
            ControlId::HourRangeSlider => &["hour-range-lo", "hour-range-hi"],
            ControlId::StateDropdown => &["state-dropdown"],
            ControlId::HourSlider => &["hour-slider"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    #[default]
    ValueChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    TemperatureGraph,
    HumidityGraph,
    GeoPlot,
}

impl OutputId {
    /// DOM id of the chart region
    pub fn dom_id(&self) -> &'static str {
        match self {
            OutputId::TemperatureGraph => "temperature-graph",
            OutputId::HumidityGraph => "humidity-graph",
            OutputId::GeoPlot => "geo-plot",
        }
    }
}

pub type Handler = fn(&DashboardContext, &ControlValues) -> Figure;

pub struct Binding {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
    pub handler: Handler,
}

impl Binding {
    pub fn listens_to(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }

    /// DOM ids of every input element this binding reads
    pub fn input_dom_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inputs.iter().flat_map(|control| control.dom_ids().iter().copied())
    }
}

/// The binding that draws `output`
pub fn binding_for(output: OutputId) -> &'static Binding {
    match output {
        OutputId::TemperatureGraph => &BINDINGS[0],
        OutputId::HumidityGraph => &BINDINGS[1],
        OutputId::GeoPlot => &BINDINGS[2],
    }
}

pub const BINDINGS: &[Binding] = &[
    Binding {
        output: OutputId::TemperatureGraph,
        inputs: &[ControlId::HourRangeSlider],
        handler: |ctx, values| charts::temperature_by_hour(ctx.dataset(), values.hour_range),
    },
    Binding {
        output: OutputId::HumidityGraph,
        inputs: &[ControlId::StateDropdown],
        handler: |ctx, values| charts::humidity_vs_temperature(ctx.dataset(), &values.state),
    },
    Binding {
        output: OutputId::GeoPlot,
        inputs: &[ControlId::StateDropdown, ControlId::HourSlider],
        handler: |ctx, values| {
            charts::geographic_distribution(ctx.dataset(), &values.state, values.hour)
        },
    },
];

/// One recomputed chart
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChartUpdate {
    pub output: OutputId,
    #[schema(value_type = Object)]
    pub figure: Figure,
}

/// Recompute every output bound to `control`
pub fn dispatch(
    ctx: &DashboardContext,
    control: ControlId,
    event: EventKind,
    values: &ControlValues,
) -> Vec<ChartUpdate> {
    debug!("dispatching {:?} {:?} with {:?}", control, event, values);
    match event {
        EventKind::ValueChanged => BINDINGS
            .iter()
            .filter(|binding| binding.listens_to(control))
            .map(|binding| ChartUpdate {
                output: binding.output,
                figure: (binding.handler)(ctx, values),
            })
            .collect(),
    }
}

/// Compute a single output from the current control values
pub fn render(ctx: &DashboardContext, output: OutputId, values: &ControlValues) -> Figure {
    (binding_for(output).handler)(ctx, values)
}

/// Compute every output, as drawn on first page load
pub fn render_all(ctx: &DashboardContext, values: &ControlValues) -> Vec<ChartUpdate> {
    BINDINGS
        .iter()
        .map(|binding| ChartUpdate {
            output: binding.output,
            figure: (binding.handler)(ctx, values),
        })
        .collect()
}
