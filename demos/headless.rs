use std::thread;
use std::time::{Duration, Instant};
use tileview::{InputEvent, LonLat, Map, MapConfig, PixelCanvas, Point};

/// Headless end-to-end run: build a map over the public OSM servers, drag
/// and zoom it, fetch the visible tiles and write the assembled viewport
/// to a PNG.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MapConfig {
        center: LonLat::new(139.6503, 35.6762), // Tokyo
        zoom: 10,
        size: Point::new(1024.0, 768.0),
        ..MapConfig::default()
    };
    let mut map = Map::new(config);
    let mut canvas = PixelCanvas::new(1024, 768);

    println!("tiles in view: {}", map.visible_tiles().len());

    // Drag half a tile to the west, then zoom one step.
    map.handle_event(&InputEvent::PointerDown {
        position: Point::new(500.0, 400.0),
    });
    map.handle_event(&InputEvent::PointerMove {
        position: Point::new(372.0, 400.0),
    });
    map.handle_event(&InputEvent::PointerUp);
    map.handle_event(&InputEvent::Wheel { delta_y: -1.0 });

    let viewport = map.viewport();
    println!(
        "center ({:.4}, {:.4}) at zoom {}",
        viewport.center.lon, viewport.center.lat, viewport.zoom
    );

    let total = map.render();
    println!("fetching {} tiles...", total);

    let deadline = Instant::now() + Duration::from_secs(15);
    while map.pending_tiles() > 0 && Instant::now() < deadline {
        map.process_arrivals(&mut canvas);
        thread::sleep(Duration::from_millis(50));
    }
    map.process_arrivals(&mut canvas);

    canvas.image().save("viewport.png")?;
    println!(
        "wrote viewport.png ({} of {} tiles arrived)",
        total - map.pending_tiles(),
        total
    );

    Ok(())
}
