mod loader;

pub use loader::{join, Error};

use std::{io, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::controls::{HourRange, StateFilter};

/// One hourly reading as it appears in the observations file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub city: String,
    pub state: String,
    pub hour: u32,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// City position as it appears in the coordinates file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoordinateEntry {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// An observation joined with its city's coordinates.
/// Coordinates are `None` when the city has no entry in the lookup table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRow {
    pub city: String,
    pub state: String,
    pub hour: u32,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Mean pressure of a single state
#[derive(Debug, Clone, PartialEq)]
pub struct StatePressure {
    pub state: String,
    pub mean: f64,
    pub count: usize,
}

/// The joined, read-only table every chart is computed from
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<WeatherRow>,
}

impl Dataset {
    pub fn new(rows: Vec<WeatherRow>) -> Self {
        Self { rows }
    }

    /// Read both CSV files and left join them on city
    pub fn load(observations: &Path, coordinates: &Path) -> Result<Self, Error> {
        loader::load(observations, coordinates)
    }

    pub fn from_readers<O: io::Read, C: io::Read>(
        observations: O,
        coordinates: C,
    ) -> Result<Self, Error> {
        loader::from_readers(observations, coordinates)
    }

    pub fn rows(&self) -> &[WeatherRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose hour lies in the inclusive range. An inverted range matches nothing.
    pub fn in_hour_range(&self, range: HourRange) -> impl Iterator<Item = &WeatherRow> + '_ {
        self.rows.iter().filter(move |row| range.contains(row.hour))
    }

    pub fn in_state<'a>(
        &'a self,
        state: &'a StateFilter,
    ) -> impl Iterator<Item = &'a WeatherRow> + 'a {
        self.rows.iter().filter(move |row| state.matches(&row.state))
    }

    pub fn at_hour<'a>(
        &'a self,
        hour: u32,
        state: &'a StateFilter,
    ) -> impl Iterator<Item = &'a WeatherRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.hour == hour && state.matches(&row.state))
    }

    /// Arithmetic mean of pressure per state, states in first-seen order
    pub fn mean_pressure_by_state(&self) -> Vec<StatePressure> {
        group_by_first_seen(&self.rows, |row| row.state.as_str())
            .into_iter()
            .map(|(state, rows)| StatePressure {
                state: state.to_string(),
                mean: rows.iter().map(|row| row.pressure).sum::<f64>() / rows.len() as f64,
                count: rows.len(),
            })
            .collect()
    }
}

/// Group rows by key, groups ordered by where their key first appears
pub fn group_by_first_seen<'a>(
    rows: impl IntoIterator<Item = &'a WeatherRow>,
    key: fn(&WeatherRow) -> &str,
) -> Vec<(&'a str, Vec<&'a WeatherRow>)> {
    let rows: Vec<&'a WeatherRow> = rows.into_iter().collect();
    let order: Vec<&'a str> = rows.iter().map(|row| key(*row)).unique().collect();
    let mut groups = rows.into_iter().into_group_map_by(|row| key(*row));

    order
        .into_iter()
        .filter_map(|k| groups.remove(&k).map(|group| (k, group)))
        .collect()
}
