//! # Tileview
//!
//! A minimal slippy-map tile engine.
//!
//! Given a tile server URL template, a geographic center and a zoom level,
//! the engine computes which raster tiles are visible in a viewport,
//! fetches them on background threads and draws each one onto a canvas at
//! its precomputed pixel offset. Drag panning and wheel zooming are wired
//! through a small event translator, so no UI framework is required.

pub mod core;
pub mod input;
pub mod prelude;
pub mod render;
pub mod tiles;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::TileBounds,
    config::MapConfig,
    geo::{LonLat, PixelPoint, Point, TileCoord},
    map::Map,
    viewport::Viewport,
};

pub use crate::input::{events::InputEvent, handler::InputHandler};

pub use crate::render::{Canvas, PixelCanvas};

pub use crate::tiles::{
    layout::{tile_placements, TilePlacement},
    loader::{TileArrival, TileLoader},
    source::{TemplateSource, TileSource},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
