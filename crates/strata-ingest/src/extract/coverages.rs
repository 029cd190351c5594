use strata_core::models::{CoverageEntry, DateEntry};

use crate::text::collapse_ws;
use crate::xml::ParsedElement;

/// `(lat_min, lat_max, lon_min, lon_max)`, already formatted.
type Coordinates = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TemporalRange {
    start_date: String,
    end_date: String,
    start_time: String,
    end_time: String,
    timezone: String,
}

impl TemporalRange {
    fn is_empty(&self) -> bool {
        *self == TemporalRange::default()
    }
}

/// Spatial coverage from `geoLocation` elements, combined with the temporal
/// extent of the first date whose type is `coverage`. A `geoLocationBox`
/// takes precedence over a `geoLocationPoint`; a place name or the shared
/// temporal range alone still yields an entry. With no `geoLocation` at all
/// but a temporal range present, exactly one temporal-only entry is emitted.
pub fn extract_coverages(tree: &ParsedElement, dates: &[DateEntry]) -> Vec<CoverageEntry> {
    let temporal = dates
        .iter()
        .find(|date| date.date_type == "coverage")
        .map(temporal_range)
        .unwrap_or_default();

    let locations: Vec<&ParsedElement> = tree
        .child("geoLocations")
        .map(|node| node.children_named("geoLocation").collect())
        .unwrap_or_default();

    let mut coverages: Vec<CoverageEntry> = locations
        .iter()
        .filter_map(|location| coverage_from_location(location, &temporal))
        .collect();

    if locations.is_empty() && !temporal.is_empty() {
        coverages.push(entry_with(None, &temporal, String::new()));
    }

    coverages
}

fn coverage_from_location(
    location: &ParsedElement,
    temporal: &TemporalRange,
) -> Option<CoverageEntry> {
    let place = location
        .child("geoLocationPlace")
        .map(|node| collapse_ws(node.text_trim()))
        .unwrap_or_default();

    let coordinates = box_coordinates(location).or_else(|| point_coordinates(location));

    if coordinates.is_none() && place.is_empty() && temporal.is_empty() {
        return None;
    }
    Some(entry_with(coordinates, temporal, place))
}

fn entry_with(
    coordinates: Option<Coordinates>,
    temporal: &TemporalRange,
    description: String,
) -> CoverageEntry {
    let (lat_min, lat_max, lon_min, lon_max) = coordinates.unwrap_or_default();
    CoverageEntry {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
        start_date: temporal.start_date.clone(),
        end_date: temporal.end_date.clone(),
        start_time: temporal.start_time.clone(),
        end_time: temporal.end_time.clone(),
        timezone: temporal.timezone.clone(),
        description,
    }
}

/// All four bounds must parse for the box to count.
fn box_coordinates(location: &ParsedElement) -> Option<Coordinates> {
    let bbox = location.child("geoLocationBox")?;
    let south = coordinate(bbox, "southBoundLatitude")?;
    let north = coordinate(bbox, "northBoundLatitude")?;
    let west = coordinate(bbox, "westBoundLongitude")?;
    let east = coordinate(bbox, "eastBoundLongitude")?;
    Some((Some(south), Some(north), Some(west), Some(east)))
}

/// A point fills only the min fields, so it never reads as a box.
fn point_coordinates(location: &ParsedElement) -> Option<Coordinates> {
    let point = location.child("geoLocationPoint")?;
    let lat = coordinate(point, "pointLatitude")?;
    let lon = coordinate(point, "pointLongitude")?;
    Some((Some(lat), None, Some(lon), None))
}

fn coordinate(node: &ParsedElement, name: &str) -> Option<String> {
    let value: f64 = node.child(name)?.text_trim().parse().ok()?;
    Some(format!("{value:.6}"))
}

fn temporal_range(date: &DateEntry) -> TemporalRange {
    let (start_date, start_time, start_zone) = split_instant(&date.start);
    let (end_date, end_time, end_zone) = split_instant(&date.end);
    TemporalRange {
        start_date,
        end_date,
        start_time,
        end_time,
        timezone: start_zone.or(end_zone).unwrap_or_default(),
    }
}

/// Split `2020-01-01T10:30:00Z` into date, time and timezone. A trailing
/// `Z` reads as UTC; an explicit offset suffix is kept verbatim.
fn split_instant(value: &str) -> (String, String, Option<String>) {
    let Some((date, time)) = value.split_once('T') else {
        return (value.to_string(), String::new(), None);
    };

    if let Some(stripped) = time.strip_suffix('Z') {
        return (date.to_string(), stripped.to_string(), Some("UTC".to_string()));
    }
    if let Some(offset_at) = time.rfind(['+', '-']) {
        let (clock, offset) = time.split_at(offset_at);
        return (date.to_string(), clock.to_string(), Some(offset.to_string()));
    }
    (date.to_string(), time.to_string(), None)
}
