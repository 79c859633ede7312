//! Prelude module for common tileview types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use tileview::prelude::*;`

pub use crate::core::{
    bounds::TileBounds,
    config::MapConfig,
    constants::{MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE},
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

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
