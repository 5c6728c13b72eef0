use crate::data::{Station, TimeFilter, Trip};

mod data;
mod error;
mod feed;
mod traffic;

fn main() -> Result<(), error::LoadError> {
    let mut args = std::env::args().skip(1);
    let stations_path = args
        .next()
        .unwrap_or_else(|| "data/bluebikes-stations.json".to_owned());
    let trips_path = args
        .next()
        .unwrap_or_else(|| "data/bluebikes-traffic-2024-03.csv".to_owned());
    let filter = args
        .next()
        .and_then(|value| value.parse().ok())
        .map_or(TimeFilter::Any, TimeFilter::from_slider);

    println!("Processing stations");
    let stations: Vec<Station> = feed::load_stations(&stations_path)?
        .into_iter()
        .map(Station::from)
        .collect();

    println!("Processing trips");
    let trips: Vec<Trip> = feed::load_trips(&trips_path)?
        .into_iter()
        .map(Trip::from)
        .collect();

    let kept = traffic::filter_trips_by_time(&trips, filter);
    let range = match filter {
        TimeFilter::Any => {
            println!("Showing all {} trips", trips.len());
            traffic::RADIUS_UNFILTERED
        }
        TimeFilter::At(minute) => {
            println!(
                "Showing {} of {} trips within an hour of {}",
                kept.len(),
                trips.len(),
                data::format_minute(minute)
            );
            traffic::RADIUS_FILTERED
        }
    };

    let mut counted = traffic::compute_station_traffic(&stations, kept);
    counted.sort_by(|a, b| b.total_traffic.cmp(&a.total_traffic));
    let busiest = counted.first().map_or(0, |station| station.total_traffic);

    for station in &counted {
        println!(
            "{}: {} trips ({} departures, {} arrivals), r={:.1}, flow={:.1}",
            station.short_name,
            station.total_traffic,
            station.departures,
            station.arrivals,
            traffic::marker_radius(station.total_traffic, busiest, range),
            traffic::flow_class(station.departure_ratio()),
        );
    }

    Ok(())
}
