use std::{collections::HashMap, fs::File, io, path::Path};

use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use weather_dashboard_core::is_file;

use super::{CoordinateEntry, Dataset, Observation, WeatherRow};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

pub(super) fn load(observations: &Path, coordinates: &Path) -> Result<Dataset, Error> {
    let observations = open(observations)?;
    let coordinates = open(coordinates)?;
    from_readers(observations, coordinates)
}

pub(super) fn from_readers<O: io::Read, C: io::Read>(
    observations: O,
    coordinates: C,
) -> Result<Dataset, Error> {
    let observations: Vec<Observation> = read_table("observations", observations)?;
    let coordinates: Vec<CoordinateEntry> = read_table("coordinates", coordinates)?;
    info!(
        "read {} observations and {} coordinate entries",
        observations.len(),
        coordinates.len()
    );
    Ok(join(observations, coordinates))
}

fn open(path: &Path) -> Result<File, Error> {
    let display = path.display().to_string();
    if !is_file(&display) {
        return Err(Error::NotFound(display));
    }
    File::open(path).map_err(|source| Error::Io {
        path: display,
        source,
    })
}

fn read_table<T: DeserializeOwned, R: io::Read>(
    table: &'static str,
    reader: R,
) -> Result<Vec<T>, Error> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| Error::Csv { table, source })
}

/// Left join observations with coordinates on city.
///
/// Every observation is kept. An observation whose city appears more than once in
/// `coordinates` yields one row per entry, in coordinate order.
pub fn join(observations: Vec<Observation>, coordinates: Vec<CoordinateEntry>) -> Dataset {
    let mut lookup: HashMap<&str, Vec<&CoordinateEntry>> = HashMap::new();
    for entry in &coordinates {
        lookup.entry(entry.city.as_str()).or_default().push(entry);
    }

    for (city, entries) in lookup.iter().filter(|(_, e)| e.len() > 1) {
        warn!(
            "city {} has {} coordinate entries, observations will be repeated per entry",
            city,
            entries.len()
        );
    }

    let mut rows = Vec::with_capacity(observations.len());
    let mut unmatched = 0;
    for obs in observations {
        match lookup.get(obs.city.as_str()) {
            Some(entries) => {
                for entry in entries {
                    rows.push(joined(&obs, Some(*entry)));
                }
            }
            None => {
                debug!("no coordinates for city {}", obs.city);
                unmatched += 1;
                rows.push(joined(&obs, None));
            }
        }
    }

    if unmatched > 0 {
        warn!("{} observations have no coordinates", unmatched);
    }

    Dataset::new(rows)
}

fn joined(obs: &Observation, coords: Option<&CoordinateEntry>) -> WeatherRow {
    WeatherRow {
        city: obs.city.clone(),
        state: obs.state.clone(),
        hour: obs.hour,
        temperature: obs.temperature,
        humidity: obs.humidity,
        pressure: obs.pressure,
        latitude: coords.map(|c| c.latitude),
        longitude: coords.map(|c| c.longitude),
    }
}
