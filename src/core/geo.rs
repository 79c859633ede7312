use crate::core::constants::MAX_LATITUDE;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inverse Gudermannian: maps a latitude in degrees to its unscaled
/// mercator ordinate. Diverges at ±90°, which is why callers stay inside
/// the MAX_LATITUDE band.
fn gd_inv(lat: f64) -> f64 {
    ((90.0 + lat) * PI / 360.0).tan().ln()
}

/// Represents a geographical coordinate with longitude and latitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Creates a new LonLat coordinate
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Validates that the coordinates are within the projectable range
    pub fn is_valid(&self) -> bool {
        self.lon >= -180.0
            && self.lon <= 180.0
            && self.lat > -MAX_LATITUDE
            && self.lat < MAX_LATITUDE
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lon(lon: f64) -> f64 {
        let wrapped = lon % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the projectable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects into tile-grid coordinates at `zoom`: the world spans
    /// [0, 2^zoom] on both axes, y growing southward.
    ///
    /// Inputs are not range-checked here; latitudes at ±90° hit the
    /// singularity of the projection. The viewport setters keep the center
    /// inside the valid band.
    pub fn project(&self, zoom: u8) -> Point {
        let n = 2_f64.powi(zoom as i32);
        let y_max = gd_inv(MAX_LATITUDE);
        Point::new(
            (180.0 + self.lon) / 360.0 * n,
            (y_max - gd_inv(self.lat)) / (y_max * 2.0 / n),
        )
    }
}

impl Default for LonLat {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in continuous coordinates: projected tile units or
/// fractional screen pixels, depending on context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    /// Exact inverse of [`LonLat::project`] at the same zoom.
    pub fn unproject(&self, zoom: u8) -> LonLat {
        let n = 2_f64.powi(zoom as i32);
        let y_max = gd_inv(MAX_LATITUDE);
        let lat = (y_max - self.y * y_max * 2.0 / n).exp().atan() * 360.0 / PI - 90.0;
        LonLat::new(self.x / n * 360.0 - 180.0, lat)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Integer pixel position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Checks that the tile exists on the grid at its zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }
}
