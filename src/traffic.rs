use itertools::Itertools;

use crate::data::{Station, TimeFilter, Trip};

/// Marker radius range in pixels when no time filter is active.
pub const RADIUS_UNFILTERED: (f64, f64) = (0.0, 25.0);
/// Wider range while filtering, so the thinner trip set stays legible.
pub const RADIUS_FILTERED: (f64, f64) = (3.0, 50.0);

/// Tallies trips by start and end station and returns the station list
/// with fresh arrival, departure and total counts. Stations never
/// visited by a trip get zeros; trips naming unknown stations count
/// toward no one. Input order is preserved.
pub fn compute_station_traffic<'a, I>(stations: &[Station], trips: I) -> Vec<Station>
where
    I: IntoIterator<Item = &'a Trip>,
{
    let trips: Vec<&Trip> = trips.into_iter().collect();
    let departures = trips.iter().counts_by(|trip| trip.start_station.as_str());
    let arrivals = trips.iter().counts_by(|trip| trip.end_station.as_str());

    stations
        .iter()
        .map(|station| {
            let id = station.short_name.as_str();
            let departures = departures.get(id).copied().unwrap_or(0) as u32;
            let arrivals = arrivals.get(id).copied().unwrap_or(0) as u32;
            Station {
                arrivals,
                departures,
                total_traffic: arrivals + departures,
                ..station.clone()
            }
        })
        .collect()
}

/// Identity under `TimeFilter::Any`, otherwise the trips with either
/// endpoint inside the window.
pub fn filter_trips_by_time(trips: &[Trip], filter: TimeFilter) -> Vec<&Trip> {
    trips.iter().filter(|trip| filter.keeps(trip)).collect()
}

/// Quantize a ratio over `[0, 1]` onto the three flow steps: thirds of
/// the domain map to 0, 0.5 and 1.
pub fn flow_class(ratio: f64) -> f64 {
    if ratio < 1.0 / 3.0 {
        0.0
    } else if ratio < 2.0 / 3.0 {
        0.5
    } else {
        1.0
    }
}

/// Square-root scale from trip volume to a marker radius in pixels, so
/// marker area tracks volume. Zero when there is no traffic at all.
pub fn marker_radius(volume: u32, max_volume: u32, range: (f64, f64)) -> f64 {
    if max_volume == 0 {
        return 0.0;
    }
    let (lo, hi) = range;
    lo + (hi - lo) * (f64::from(volume) / f64::from(max_volume)).sqrt()
}
