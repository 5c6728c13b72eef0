use chrono::{NaiveDateTime, Timelike};

use crate::feed;

/// Minute of day, 0 (midnight) through 1439 (23:59).
pub type Minute = u32;

/// Half-width of the filter window, inclusive on both sides.
pub const FILTER_WINDOW: Minute = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub short_name: String,
    pub lon: f64,
    pub lat: f64,
    pub arrivals: u32,
    pub departures: u32,
    pub total_traffic: u32,
}

impl Station {
    pub fn new(short_name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            short_name: short_name.into(),
            lon,
            lat,
            arrivals: 0,
            departures: 0,
            total_traffic: 0,
        }
    }

    /// Share of this station's traffic that departs here, 0.5 for an idle
    /// station so it renders as neutral flow.
    pub fn departure_ratio(&self) -> f64 {
        if self.total_traffic == 0 {
            0.5
        } else {
            f64::from(self.departures) / f64::from(self.total_traffic)
        }
    }
}

impl From<feed::StationRecord> for Station {
    fn from(record: feed::StationRecord) -> Self {
        Self::new(record.short_name, record.lon, record.lat)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub start_station: String,
    pub end_station: String,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
}

impl From<feed::TripRecord> for Trip {
    fn from(record: feed::TripRecord) -> Self {
        Self {
            start_station: record.start_station_id,
            end_station: record.end_station_id,
            started_at: parse_timestamp(&record.started_at),
            ended_at: parse_timestamp(&record.ended_at),
        }
    }
}

// An unparsable timestamp becomes None: the trip still counts toward
// unfiltered traffic but never matches a time filter.
fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
}

/// Seconds are discarded.
pub fn minutes_since_midnight(timestamp: NaiveDateTime) -> Minute {
    timestamp.hour() * 60 + timestamp.minute()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Any,
    At(Minute),
}

impl TimeFilter {
    /// The feed's slider uses `-1` for "any time"; any value outside a
    /// day's minute range means no filter.
    pub fn from_slider(value: i32) -> Self {
        if (0..=1439).contains(&value) {
            Self::At(value as Minute)
        } else {
            Self::Any
        }
    }

    /// A trip is kept when either endpoint lies within the window around
    /// the target minute.
    pub fn keeps(&self, trip: &Trip) -> bool {
        match *self {
            Self::Any => true,
            Self::At(target) => {
                within_window(trip.started_at, target) || within_window(trip.ended_at, target)
            }
        }
    }
}

// The window does not wrap across midnight: a target near one day
// boundary never matches trips near the other.
fn within_window(timestamp: Option<NaiveDateTime>, target: Minute) -> bool {
    timestamp.is_some_and(|t| minutes_since_midnight(t).abs_diff(target) <= FILTER_WINDOW)
}

/// Slider readout label, 12-hour clock.
pub fn format_minute(minute: Minute) -> String {
    let hour = (minute / 60) % 24;
    let (hour12, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", hour12, minute % 60, meridiem)
}
