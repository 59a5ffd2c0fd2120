//! Edge-weight metrics.
//!
//! Edges carry no stored weight: every algorithm asks a [`DistanceMetric`]
//! for the distance between the two endpoint coordinates when it needs it.

use std::fmt;

use serde::Serialize;

use crate::coordinate::Coordinate;

/// Mean Earth radius in metres used by [`geographic`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Planar distance treating longitude/latitude as Cartesian axes.
///
/// Only adequate for small, locally planar maps.
pub fn euclidean(a: &Coordinate, b: &Coordinate) -> f64 {
    let dx = a.longitude - b.longitude;
    let dy = a.latitude - b.latitude;
    dx.hypot(dy)
}

/// Great-circle (haversine) distance in metres, reading coordinates as degrees.
pub fn geographic(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push the chord a hair outside [0, 1] for antipodal points.
    let half_chord = half_chord.clamp(0.0, 1.0);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_M * angle
}

/// Source of edge weights for the shortest-path algorithms.
pub trait DistanceMetric {
    /// Weight of the edge between two coordinates. Must be non-negative.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(&Coordinate, &Coordinate) -> f64,
{
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        self(a, b)
    }
}

/// Built-in metrics selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Planar distance, the weight used for routing by default.
    #[default]
    Euclidean,
    /// Haversine great-circle distance in metres.
    Geographic,
}

impl DistanceMetric for Metric {
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Geographic => geographic(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Metric::Euclidean => "euclidean",
            Metric::Geographic => "geographic",
        };
        f.write_str(value)
    }
}
