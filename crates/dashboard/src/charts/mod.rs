//! Pure chart builders: table plus control values in, figure out.

mod figure;

pub use figure::{
    Axis, BarTrace, ColorBar, ColorMarker, ColorScale, Figure, LatLon, Layout, Legend, MapTrace, MapView,
    Mode, Title, Trace, XyTrace,
};

use crate::{
    controls::{HourRange, StateFilter},
    dataset::{group_by_first_seen, Dataset, WeatherRow},
};

pub const PRESSURE_TITLE: &str = "Average Pressure (hPa) of States in Malaysia";
pub const MAP_STYLE: &str = "carto-positron";
pub const MAP_ZOOM: f64 = 4.0;

/// Plasma sequential scale, evenly spaced stops from dark blue to yellow
pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Line chart of temperature against hour, one line per city
pub fn temperature_by_hour(data: &Dataset, range: HourRange) -> Figure {
    let title = format!(
        "Temperature by Hour in Cities of Malaysia (Hours: {} to {})",
        range.lo, range.hi
    );
    xy_figure(
        title,
        data.in_hour_range(range),
        Mode::Lines,
        ("hour", hour),
        ("temperature", temperature),
    )
}

/// Scatter of humidity against temperature, one marker series per city
pub fn humidity_vs_temperature(data: &Dataset, state: &StateFilter) -> Figure {
    let title = format!("Temperature vs Humidity in {}", state.label());
    xy_figure(
        title,
        data.in_state(state),
        Mode::Markers,
        ("temperature", temperature),
        ("humidity", humidity),
    )
}

/// Bar chart of mean pressure per state
pub fn pressure_by_state(data: &Dataset) -> Figure {
    let means = data.mean_pressure_by_state();

    let mut figure = Figure::new(PRESSURE_TITLE);
    figure.layout.xaxis = Some(Axis::titled("state"));
    figure.layout.yaxis = Some(Axis::titled("avg of pressure"));
    figure.data.push(Trace::Bar(BarTrace {
        name: Some("pressure".to_string()),
        x: means.iter().map(|m| m.state.clone()).collect(),
        y: means.iter().map(|m| m.mean).collect(),
    }));
    figure
}

/// Map of the selected hour's readings, colored by temperature
pub fn geographic_distribution(data: &Dataset, state: &StateFilter, hour: u32) -> Figure {
    let rows: Vec<&WeatherRow> = data.at_hour(hour, state).collect();

    let mut figure = Figure::new(format!(
        "Geographical Distribution of Temperature at Hour {} in {}",
        hour,
        state.label()
    ));
    figure.layout.map = Some(MapView {
        style: MAP_STYLE.to_string(),
        zoom: MAP_ZOOM,
        center: center_of(&rows),
    });
    figure.data.push(Trace::Scattermap(MapTrace {
        mode: Mode::Markers,
        lat: rows.iter().map(|r| r.latitude).collect(),
        lon: rows.iter().map(|r| r.longitude).collect(),
        hovertext: rows.iter().map(|r| r.city.clone()).collect(),
        marker: ColorMarker {
            color: rows.iter().map(|r| r.temperature).collect(),
            colorscale: plasma(),
            showscale: true,
            colorbar: ColorBar {
                title: Title::new("temperature"),
            },
        },
    }));
    figure
}

fn plasma() -> ColorScale {
    let last = (PLASMA.len() - 1) as f64;
    PLASMA
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, color.to_string()))
        .collect()
}

type Column = (&'static str, fn(&WeatherRow) -> f64);

fn hour(row: &WeatherRow) -> f64 {
    f64::from(row.hour)
}

fn temperature(row: &WeatherRow) -> f64 {
    row.temperature
}

fn humidity(row: &WeatherRow) -> f64 {
    row.humidity
}

fn xy_figure<'a>(
    title: String,
    rows: impl Iterator<Item = &'a WeatherRow>,
    mode: Mode,
    (x_name, x): Column,
    (y_name, y): Column,
) -> Figure {
    let traces = group_by_first_seen(rows, |row| row.city.as_str())
        .into_iter()
        .map(|(city, rows)| XyTrace {
            name: city.to_string(),
            mode,
            x: rows.iter().map(|row| x(row)).collect(),
            y: rows.iter().map(|row| y(row)).collect(),
        });

    let mut figure = Figure::new(title);
    figure.layout.xaxis = Some(Axis::titled(x_name));
    figure.layout.yaxis = Some(Axis::titled(y_name));
    figure.layout.legend = Some(Legend {
        title: Title::new("city"),
    });
    figure.data = traces.map(Trace::Scatter).collect();
    figure
}

/// Mean of the rows that have coordinates
fn center_of(rows: &[&WeatherRow]) -> Option<LatLon> {
    let placed: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|r| Some((r.latitude?, r.longitude?)))
        .collect();
    if placed.is_empty() {
        return None;
    }
    let n = placed.len() as f64;
    Some(LatLon {
        lat: placed.iter().map(|p| p.0).sum::<f64>() / n,
        lon: placed.iter().map(|p| p.1).sum::<f64>() / n,
    })
}
