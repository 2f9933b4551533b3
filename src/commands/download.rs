use anyhow::Result;
use std::fs::create_dir_all;
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::tiles::{self, Tile};
use crate::wikimedia;

const FETCH_DELAY: Duration = Duration::from_millis(500);

/// Downloads every tile image into `<dir>/tiles`, one request at a time.
pub async fn download(dir: &str) -> Result<()> {
    let tiles_dir = Path::new(dir).join("tiles");
    create_dir_all(&tiles_dir)?;

    let client = wikimedia::new_client()?;
    let tiles = tiles::all();
    let failed = fetch_all(&tiles, FETCH_DELAY, |tile| {
        let path = tiles_dir.join(format!("{}.svg", tile.id));
        let client = &client;
        async move { wikimedia::download_file(client, &tile.file_name, &path).await }
    })
    .await;
    info!(total = tiles.len(), failed, "tile download finished");
    Ok(())
}

/// Runs `fetch` for every tile in mapping order with a pause between requests.
/// A failed fetch is logged and does not stop the batch. Returns the number of
/// failures.
async fn fetch_all<F, Fut>(tiles: &[Tile], delay: Duration, mut fetch: F) -> usize
where
    F: FnMut(Tile) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut failed = 0;
    for tile in tiles {
        info!(id = %tile.id, url = %wikimedia::file_url(&tile.file_name), "downloading tile");
        if let Err(err) = fetch(tile.clone()).await {
            warn!(id = %tile.id, error = %err, "failed to download tile");
            failed += 1;
        }
        sleep(delay).await;
    }
    failed
}
