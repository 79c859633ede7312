pub mod layout;
pub mod loader;
pub mod source;

// Re-exports for convenience
pub use layout::{tile_placements, TilePlacement};
pub use loader::{TileArrival, TileLoader};
pub use source::{TemplateSource, TileSource};
