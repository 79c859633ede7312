use crate::{
    core::{
        config::MapConfig,
        geo::{LonLat, PixelPoint, Point, TileCoord},
        viewport::Viewport,
    },
    input::{InputEvent, InputHandler},
    prelude::HashMap,
    render::Canvas,
    tiles::{tile_placements, TemplateSource, TileArrival, TileLoader, TilePlacement, TileSource},
};
use crossbeam_channel::{unbounded, Receiver};

/// The tile map engine.
///
/// Owns the view state and drives the pipeline: project the center, resolve
/// the visible tile bounds, enumerate placements, fire one download per
/// tile, and draw each tile at its precomputed position as it arrives.
///
/// Everything up to the downloads is synchronous and side-effect-free; the
/// downloads are the only asynchrony. Completions arrive out of order with
/// no barrier between them, and in-flight fetches from a superseded pass
/// are never aborted. Their results are discarded on arrival by comparing
/// the pass generation.
pub struct Map {
    viewport: Viewport,
    source: Box<dyn TileSource>,
    input: InputHandler,
    loader: TileLoader,
    arrivals: Receiver<TileArrival>,
    /// Destination of every tile of the current pass
    placements: HashMap<TileCoord, PixelPoint>,
    /// Render pass counter; bumped by [`Map::render`]
    generation: u64,
    outstanding: usize,
    tile_size: u32,
}

impl Map {
    /// Builds an engine using the template server from `config`.
    pub fn new(config: MapConfig) -> Self {
        let source = Box::new(TemplateSource::new(config.server.clone()));
        Self::with_source(config, source)
    }

    /// Builds an engine over a custom tile source.
    pub fn with_source(config: MapConfig, source: Box<dyn TileSource>) -> Self {
        let (tx, rx) = unbounded();
        Self {
            viewport: Viewport::new(config.center, config.zoom, config.size),
            source,
            input: InputHandler::new(config.tile_size, config.invert_wheel),
            loader: TileLoader::new(tx),
            arrivals: rx,
            placements: HashMap::default(),
            generation: 0,
            outstanding: 0,
            tile_size: config.tile_size,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Replaces the tile server URL template.
    pub fn set_server(&mut self, template: impl Into<String>) {
        self.source = Box::new(TemplateSource::new(template));
    }

    /// Moves the view to a new center and zoom.
    pub fn set_view(&mut self, center: LonLat, zoom: u8) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.viewport.set_zoom(zoom);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.set_size(Point::new(width, height));
    }

    /// Feeds one input event through the interaction translator. Returns
    /// true when the view changed and a re-render is due.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        self.input.handle(&mut self.viewport, event)
    }

    /// Computes the tile list for the current view. Pure with respect to
    /// the view state: identical state always yields an identical list,
    /// same ordering and same positions.
    pub fn visible_tiles(&self) -> Vec<TilePlacement> {
        let bounds = self.viewport.tile_bounds(self.tile_size);
        tile_placements(self.source.as_ref(), self.viewport.zoom, &bounds, self.tile_size)
    }

    /// Starts a new render pass: records where each visible tile lands and
    /// fires one download per tile. Returns the number of tiles in flight.
    ///
    /// Tiles draw as they arrive via [`Map::process_arrivals`]; a slow tile
    /// simply appears later without blocking the others.
    pub fn render(&mut self) -> usize {
        let list = self.visible_tiles();
        self.generation += 1;
        self.placements.clear();
        self.outstanding = list.len();
        log::debug!(
            "render pass {}: zoom {} center ({:.5}, {:.5}), {} tiles",
            self.generation,
            self.viewport.zoom,
            self.viewport.center.lon,
            self.viewport.center.lat,
            self.outstanding
        );
        for tile in list {
            self.placements.insert(tile.coord, tile.dest);
            self.loader.start_download(tile.url, tile.coord, self.generation);
        }
        self.outstanding
    }

    /// Drains finished downloads, drawing each tile of the current pass at
    /// its precomputed position. Stale arrivals from superseded passes are
    /// discarded. Returns how many tiles were drawn.
    pub fn process_arrivals(&mut self, canvas: &mut dyn Canvas) -> usize {
        let mut drawn = 0;
        while let Ok(arrival) = self.arrivals.try_recv() {
            match self.accept(&arrival) {
                Some(dest) => {
                    canvas.draw_image(&arrival.image, dest);
                    self.outstanding = self.outstanding.saturating_sub(1);
                    drawn += 1;
                }
                None => log::debug!(
                    "discarding stale tile {:?} from pass {}",
                    arrival.coord,
                    arrival.generation
                ),
            }
        }
        drawn
    }

    /// Number of tiles of the current pass still in flight.
    pub fn pending_tiles(&self) -> usize {
        self.outstanding
    }

    fn accept(&self, arrival: &TileArrival) -> Option<PixelPoint> {
        if arrival.generation != self.generation {
            return None;
        }
        self.placements.get(&arrival.coord).copied()
    }
}
