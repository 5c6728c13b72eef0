use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// Station document as published by the share system:
/// `{ "data": { "stations": [...] } }`. Unknown fields are ignored.
#[derive(Deserialize, Debug)]
pub struct StationDocument {
    pub data: StationList,
}

#[derive(Deserialize, Debug)]
pub struct StationList {
    pub stations: Vec<StationRecord>,
}

#[derive(Deserialize, Debug)]
pub struct StationRecord {
    pub short_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub lon: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub lat: f64,
}

/// One row of the trip table. Extra columns (ride id, bike type,
/// membership) are skipped.
#[derive(Deserialize, Debug)]
pub struct TripRecord {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: String,
    pub ended_at: String,
}

pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<StationRecord>, LoadError> {
    let document: StationDocument = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(document.data.stations)
}

pub fn load_trips(path: impl AsRef<Path>) -> Result<Vec<TripRecord>, LoadError> {
    csv::Reader::from_path(path)?
        .deserialize()
        .map(|row| row.map_err(LoadError::from))
        .collect()
}

// The feed serves coordinates sometimes as numbers and sometimes as
// numeric strings.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_document_accepts_string_coordinates() {
        let json = r#"{
            "data": {
                "stations": [
                    {"short_name": "A32000", "lon": -71.0942, "lat": 42.3603, "name": "Kendall T"},
                    {"short_name": "B32001", "lon": "-71.1", "lat": "42.35"}
                ]
            }
        }"#;

        let document: StationDocument = serde_json::from_str(json).unwrap();
        let stations = document.data.stations;
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].short_name, "A32000");
        assert!((stations[0].lon - -71.0942).abs() < 1e-9);
        assert!((stations[1].lat - 42.35).abs() < 1e-9);
    }

    #[test]
    fn trip_rows_skip_extra_columns() {
        let csv = "\
ride_id,bike_type,started_at,ended_at,start_station_id,end_station_id,is_member
r1,electric,2024-03-01 08:00:00,2024-03-01 08:10:00,A32000,B32001,1
r2,classic,2024-03-01 17:30:00,2024-03-01 17:45:00,B32001,A32000,0
";

        let rows: Vec<TripRecord> = csv::Reader::from_reader(csv.as_bytes())
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].start_station_id, "A32000");
        assert_eq!(rows[1].ended_at, "2024-03-01 17:45:00");
    }
}
