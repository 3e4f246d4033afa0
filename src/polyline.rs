//! Polyline representation for route geometries.
//!
//! Providers hand routes over as `[lat, lon]` pairs. This module turns them
//! into [`Coordinate`] sequences and offers the few geometric queries the
//! navigation core needs: bounding boxes for viewport fitting and the
//! per-step target point used by proximity auto-advance.

use serde::{Deserialize, Serialize};

/// A WGS84 position. Serialised as a `[lat, lon]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

/// Axis-aligned lat/lon box, as handed to the map for `fitBounds` and as
/// received from it when the viewport moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north_east: Coordinate,
    pub south_west: Coordinate,
}

impl BoundingBox {
    pub fn new(north_east: Coordinate, south_west: Coordinate) -> Self {
        Self {
            north_east,
            south_west,
        }
    }

    /// Smallest box covering every point. `None` when there are no points.
    pub fn from_points(points: &[Coordinate]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut north_east = *first;
        let mut south_west = *first;
        for point in rest {
            north_east.lat = north_east.lat.max(point.lat);
            north_east.lon = north_east.lon.max(point.lon);
            south_west.lat = south_west.lat.min(point.lat);
            south_west.lon = south_west.lon.min(point.lon);
        }
        Some(Self {
            north_east,
            south_west,
        })
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat <= self.north_east.lat
            && point.lat >= self.south_west.lat
            && point.lon <= self.north_east.lon
            && point.lon >= self.south_west.lon
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.north_east.lat + self.south_west.lat) / 2.0,
            (self.north_east.lon + self.south_west.lon) / 2.0,
        )
    }
}

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// Point the user should reach to finish step `step_index` of
    /// `step_count`.
    ///
    /// Steps are spread evenly over the polyline's vertices:
    /// `min(floor((i + 1) / n * len), len - 1)`. This is a coarse stand-in
    /// for projecting each instruction onto the path, and it ignores how far
    /// apart the vertices actually are.
    pub fn step_target(&self, step_index: usize, step_count: usize) -> Option<Coordinate> {
        if step_count == 0 || self.points.len() < 2 {
            return None;
        }
        let ratio = (step_index + 1) as f64 / step_count as f64;
        let index = ((ratio * self.points.len() as f64).floor() as usize).min(self.points.len() - 1);
        Some(self.points[index])
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}
