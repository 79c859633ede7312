//! Engine configuration: the options recognized at construction time.

use crate::core::constants::{DEFAULT_SERVER, TILE_SIZE};
use crate::core::geo::{LonLat, Point};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Options recognized by [`crate::Map`]. All fields have defaults, so
/// partial JSON configurations deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Tile server URL template with literal `{z}`, `{x}`, `{y}` tokens
    pub server: String,
    /// Initial geographic center
    pub center: LonLat,
    /// Initial zoom level, clamped to [0, 18] by the viewport
    pub zoom: u8,
    /// Viewport size in pixels
    pub size: Point,
    /// Square tile edge in pixels; 256 for standard providers
    pub tile_size: u32,
    /// Flips the wheel-delta to zoom-direction mapping for hosts with
    /// reversed scroll semantics
    pub invert_wheel: bool,
}

impl MapConfig {
    /// Parses a configuration from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            center: LonLat::new(0.0, 0.0),
            zoom: 3,
            size: Point::new(800.0, 600.0),
            tile_size: TILE_SIZE,
            invert_wheel: false,
        }
    }
}
