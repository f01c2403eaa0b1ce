use maud::{html, Markup};

use crate::{
    callbacks::{binding_for, ChartUpdate, OutputId},
    charts::Figure,
    controls::ControlValues,
    templates::{
        components::{hour_range_slider, hour_slider, state_dropdown, tab_panel, tabs, Tab},
        fragments::{chart_region, data_preview, static_chart, summary, DataPage},
        layouts::{base, PageConfig},
    },
    view_model::ControlRegistry,
};

pub const PRESSURE_DOM_ID: &str = "pressure-histogram";

/// Dashboard page data
pub struct DashboardData<'a> {
    pub title: &'a str,
    pub attribution: Option<&'a str>,
    pub registry: &'a ControlRegistry,
    pub values: &'a ControlValues,
    pub preview: DataPage<'a>,
    pub charts: Vec<ChartUpdate>,
    pub pressure: &'a Figure,
}

/// Dashboard page: raw data, one tab per chart, then the summary
pub fn dashboard_page(data: &DashboardData) -> Markup {
    let config = PageConfig {
        title: data.title,
    };

    base(&config, dashboard_content(data))
}

pub fn dashboard_content(data: &DashboardData) -> Markup {
    let active = Tab::Temperature;
    let registry = data.registry;

    html! {
        (data_preview(&data.preview))

        div class="mt-5" {
            (tabs(active))
            (tab_panel(Tab::Temperature, active, html! {
                (hour_range_slider(&registry.hours, data.values.hour_range))
                (bound_chart(OutputId::TemperatureGraph, &data.charts))
            }))
            (tab_panel(Tab::Humidity, active, html! {
                (state_dropdown(&registry.states, &data.values.state))
                (bound_chart(OutputId::HumidityGraph, &data.charts))
            }))
            (tab_panel(Tab::Pressure, active, static_chart(PRESSURE_DOM_ID, data.pressure)))
            (tab_panel(Tab::Geographic, active, html! {
                (hour_slider(&registry.hours, data.values.hour))
                (bound_chart(OutputId::GeoPlot, &data.charts))
            }))
        }

        (summary(data.attribution))
    }
}

fn bound_chart(output: OutputId, charts: &[ChartUpdate]) -> Markup {
    match charts.iter().find(|update| update.output == output) {
        Some(update) => chart_region(binding_for(output), &update.figure),
        None => html! {},
    }
}
