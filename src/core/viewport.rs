use crate::core::bounds::TileBounds;
use crate::core::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::core::geo::{LonLat, Point};
use serde::{Deserialize, Serialize};

/// Current view of the map: geographic center, zoom level and viewport size
/// in pixels.
///
/// The viewport is owned by one engine instance and mutated only through
/// the transition methods below, which maintain the clamping invariants:
/// zoom stays in [MIN_ZOOM, MAX_ZOOM] and the center stays inside the
/// projectable latitude band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LonLat,
    pub zoom: u8,
    pub size: Point,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LonLat, zoom: u8, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.min(MAX_ZOOM),
            size,
        }
    }

    /// Sets the center, clamping it to the projectable range
    pub fn set_center(&mut self, center: LonLat) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamping to the valid range
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom.min(MAX_ZOOM);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Steps the zoom level by `steps`, clamping to [MIN_ZOOM, MAX_ZOOM].
    /// Returns true when the zoom actually changed.
    pub fn step_zoom(&mut self, steps: i32) -> bool {
        let zoom = (self.zoom as i32 + steps).clamp(MIN_ZOOM as i32, MAX_ZOOM as i32) as u8;
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Pans the view by a pixel delta.
    ///
    /// The drag moves the visual map with the pointer, so the center shifts
    /// by the negated delta in projected space: project the center, subtract
    /// `delta / tile_size`, and unproject back so the stored state stays
    /// resolution-independent.
    pub fn pan(&mut self, delta: Point, tile_size: u32) {
        let tile = tile_size as f64;
        let p = self.center.project(self.zoom);
        let shifted = Point::new(p.x - delta.x / tile, p.y - delta.y / tile);
        self.set_center(shifted.unproject(self.zoom));
    }

    /// Resolves the visible tile bounding box for the current view
    pub fn tile_bounds(&self, tile_size: u32) -> TileBounds {
        TileBounds::resolve(self.center, self.zoom, self.size, tile_size)
    }

    fn clamp_center(center: LonLat) -> LonLat {
        LonLat::new(
            center.lon.clamp(-180.0, 180.0),
            LonLat::clamp_lat(center.lat),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LonLat::new(0.0, 0.0), 0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation_clamps() {
        let viewport = Viewport::new(LonLat::new(-74.0060, 89.0), 25, Point::new(800.0, 600.0));
        assert_eq!(viewport.zoom, 18);
        assert!(viewport.center.lat < 85.06);
    }

    #[test]
    fn test_step_zoom_clamps() {
        let mut viewport = Viewport::new(LonLat::new(0.0, 0.0), 18, Point::new(512.0, 512.0));
        for _ in 0..5 {
            viewport.step_zoom(1);
        }
        assert_eq!(viewport.zoom, 18);

        viewport.set_zoom(0);
        for _ in 0..5 {
            viewport.step_zoom(-1);
        }
        assert_eq!(viewport.zoom, 0);

        assert!(viewport.step_zoom(1));
        assert_eq!(viewport.zoom, 1);
    }

    #[test]
    fn test_pan_by_one_tile() {
        // A 256px drag to the right at zoom 2 shifts the projected center
        // one tile unit to the left: lon goes from 0 to -90.
        let mut viewport = Viewport::new(LonLat::new(0.0, 0.0), 2, Point::new(512.0, 512.0));
        viewport.pan(Point::new(256.0, 0.0), 256);
        assert!((viewport.center.lon - -90.0).abs() < 1e-9);
        assert!(viewport.center.lat.abs() < 1e-9);
    }

    #[test]
    fn test_pan_round_trips() {
        let start = LonLat::new(13.4, 52.5);
        let mut viewport = Viewport::new(start, 10, Point::new(800.0, 600.0));
        viewport.pan(Point::new(120.0, -45.0), 256);
        viewport.pan(Point::new(-120.0, 45.0), 256);
        assert!((viewport.center.lon - start.lon).abs() < 1e-9);
        assert!((viewport.center.lat - start.lat).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_step_halves_geographic_span() {
        // A fixed-size viewport covers half the longitude span after one
        // zoom step: the world doubles in tile units while the viewport's
        // half-extent stays w / tile_size / 2.
        let size = Point::new(1024.0, 768.0);
        let half_x = size.x / 256.0 / 2.0;
        let span = |zoom: u8| {
            let c = LonLat::new(0.0, 0.0).project(zoom);
            let left = Point::new(c.x - half_x, c.y).unproject(zoom).lon;
            let right = Point::new(c.x + half_x, c.y).unproject(zoom).lon;
            right - left
        };
        for zoom in 2..10u8 {
            let ratio = span(zoom) / span(zoom + 1);
            assert!((ratio - 2.0).abs() < 1e-9);
        }
    }
}
