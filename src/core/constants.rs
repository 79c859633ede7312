//! Core constants shared by the tile pipeline.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Lowest zoom level served by standard slippy-map servers.
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level served by standard slippy-map servers.
pub const MAX_ZOOM: u8 = 18;

/// Latitude cutoff of the spherical web projection. The projected square
/// covers latitudes in (-MAX_LATITUDE, MAX_LATITUDE).
pub const MAX_LATITUDE: f64 = 85.05112;

/// Default tile server URL template (OpenStreetMap).
pub const DEFAULT_SERVER: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
