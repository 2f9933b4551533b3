use anyhow::{anyhow, Result};
use std::fs::{create_dir_all, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::tiles;
use crate::wikimedia;

const RETRY_DELAY: Duration = Duration::from_secs(1);

/// How many leading bytes of a file are searched for the error page marker.
/// A marker past this offset goes undetected; a truncated file that happens to
/// contain the marker is misclassified. Both are accepted.
const MARKER_PROBE_BYTES: u64 = 1000;

/// Checks every tile image under `<dir>/tiles` and refetches the ones that are
/// missing or contain a Commons error page instead of an image.
pub async fn verify(dir: &str) -> Result<()> {
    let tiles_dir = Path::new(dir).join("tiles");
    create_dir_all(&tiles_dir)?;

    let mut refetched = 0;
    for tile in tiles::all() {
        let path = tiles_dir.join(format!("{}.svg", tile.id));
        if !needs_refetch(&path)? {
            info!(id = %tile.id, "tile is ok");
            continue;
        }
        let url = wikimedia::file_url(&tile.file_name);
        info!(id = %tile.id, url = %url, "refetching tile");
        match refetch(&path, &url).await {
            Ok(()) => refetched += 1,
            Err(err) => warn!(id = %tile.id, error = %err, "failed to refetch tile"),
        }
        sleep(RETRY_DELAY).await;
    }
    info!(refetched, "verify pass finished");
    Ok(())
}

/// A tile needs refetching when its file is absent or its leading bytes
/// contain the Commons error page marker.
fn needs_refetch(path: &Path) -> Result<bool> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(err) => return Err(err.into()),
    };
    let mut head = Vec::new();
    file.take(MARKER_PROBE_BYTES).read_to_end(&mut head)?;
    Ok(String::from_utf8_lossy(&head).contains(wikimedia::ERROR_PAGE_MARKER))
}

// Refetches with curl directly instead of the in-process client to avoid TLS
// issues in this binary.
async fn refetch(path: &Path, url: &str) -> Result<()> {
    let status = Command::new("curl")
        .arg("-L")
        .arg("-o")
        .arg(path)
        .arg(url)
        .status()
        .await?;
    if !status.success() {
        return Err(anyhow!("curl exited with {}", status));
    }
    Ok(())
}
