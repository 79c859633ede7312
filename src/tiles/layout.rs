use crate::core::bounds::TileBounds;
use crate::core::geo::{PixelPoint, TileCoord};
use crate::tiles::source::TileSource;

/// One tile of a render pass: where to fetch it and where to draw it.
/// Generated fresh per pass and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub coord: TileCoord,
    pub url: String,
    pub dest: PixelPoint,
}

/// Expands a bounding box into the ordered tile list for one render pass.
///
/// Rows run top to bottom and columns left to right, both half-open; the
/// ordering is part of the contract since it fixes draw sequencing. The
/// output is a pure function of the inputs, so the same view always yields
/// the same list.
pub fn tile_placements(
    source: &dyn TileSource,
    zoom: u8,
    bounds: &TileBounds,
    tile_size: u32,
) -> Vec<TilePlacement> {
    let mut list = Vec::with_capacity(bounds.tile_count());
    for y in bounds.y.clone() {
        for x in bounds.x.clone() {
            let coord = TileCoord::new(x, y, zoom);
            let dest = PixelPoint::new(
                bounds.origin.x + (x - bounds.x.start) as i32 * tile_size as i32,
                bounds.origin.y + (y - bounds.y.start) as i32 * tile_size as i32,
            );
            list.push(TilePlacement {
                coord,
                url: source.url(coord),
                dest,
            });
        }
    }
    list
}
