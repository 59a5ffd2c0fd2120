use serde::{Deserialize, Serialize};

/// Longitude/latitude pair attached to every node.
///
/// Values are stored as given; the planar metric treats them as plain
/// Cartesian coordinates while the geographic metric reads them as degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    /// Largest absolute component a graph node may carry. Keeps every edge
    /// weight and every route total comfortably below `f64::MAX`.
    pub const MAX_MAGNITUDE: f64 = 1e250;

    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Finite and within [`Coordinate::MAX_MAGNITUDE`] on both axes.
    pub fn is_within_bounds(&self) -> bool {
        self.is_finite()
            && self.longitude.abs() <= Self::MAX_MAGNITUDE
            && self.latitude.abs() <= Self::MAX_MAGNITUDE
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}
