use crate::core::geo::TileCoord;
use crate::Result;
use crossbeam_channel::Sender;
use image::RgbaImage;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use std::thread;

/// Shared blocking HTTP client with a custom User-Agent so that public tile
/// servers (e.g. OpenStreetMap) don't reject the request. Building the client
/// once avoids the cost of TLS and connection pool setup for every tile.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("tileview/0.1 (+https://github.com/example/tileview)")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// A finished tile download: decoded pixels plus the render pass that
/// requested it, so stale completions can be told apart.
#[derive(Debug, Clone)]
pub struct TileArrival {
    pub coord: TileCoord,
    pub generation: u64,
    pub image: RgbaImage,
}

/// Fetches tiles on detached background threads and reports decoded images
/// back over a channel.
///
/// Downloads are fire-and-forget: nothing is retried and nothing is
/// cancelled. A tile that fails to fetch or decode is logged and never
/// arrives, leaving its region of the surface blank.
pub struct TileLoader {
    tx: Sender<TileArrival>,
}

impl TileLoader {
    /// Create a new tile loader given a sender to report completed downloads.
    pub fn new(tx: Sender<TileArrival>) -> Self {
        Self { tx }
    }

    /// Start downloading `url`. The fetch and decode happen on a detached
    /// thread so the caller is never blocked; completions arrive over the
    /// channel in whatever order the network produces them.
    pub fn start_download(&self, url: String, coord: TileCoord, generation: u64) {
        let tx = self.tx.clone();

        thread::spawn(move || {
            log::debug!("fetch tile {:?} pass {}", coord, generation);
            let result: Result<RgbaImage> = (|| {
                let resp = HTTP_CLIENT.get(&url).send()?;
                if !resp.status().is_success() {
                    return Err(format!("HTTP {}", resp.status()).into());
                }
                let bytes = resp.bytes()?;
                Ok(image::load_from_memory(&bytes)?.to_rgba8())
            })();

            match result {
                Ok(image) => {
                    log::debug!(
                        "tile {:?} ready ({}x{})",
                        coord,
                        image.width(),
                        image.height()
                    );
                    let _ = tx.send(TileArrival {
                        coord,
                        generation,
                        image,
                    });
                }
                Err(e) => log::warn!("tile {:?} failed: {}", coord, e),
            }
        });
    }
}
