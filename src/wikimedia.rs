use anyhow::Result;
use futures::TryStreamExt;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tokio_util::compat::FuturesAsyncReadCompatExt;
use tracing::{info, instrument};

pub static BASE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons";
pub static USER_AGENT: &str = "tile-fetcher/0.1";

/// Substring Commons serves in the body of its HTML error pages.
pub static ERROR_PAGE_MARKER: &str = "Wikimedia Error";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn new_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?)
}

/// Commons shards uploaded files into `/{h[0]}/{h[0..2]}/` directories, where
/// `h` is the lowercase hex MD5 of the filename.
pub fn file_url(file_name: &str) -> String {
    let hash = format!("{:x}", md5::compute(file_name.as_bytes()));
    format!("{}/{}/{}/{}", BASE_URL, &hash[..1], &hash[..2], file_name)
}

#[instrument(skip(client))]
pub async fn download_file(client: &Client, file_name: &str, path: &Path) -> Result<()> {
    let res = client
        .get(file_url(file_name))
        .header("user-agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?;
    info!(status = %res.status(), "fetched file from wikimedia");

    // See: https://github.com/benkay86/async-applied/blob/master/reqwest-tokio-compat/src/main.rs
    let mut byte_stream = res
        .bytes_stream()
        .map_err(|e| futures::io::Error::new(futures::io::ErrorKind::Other, e))
        .into_async_read()
        .compat();
    let mut out = tokio::fs::File::create(path).await?;
    tokio::io::copy(&mut byte_stream, &mut out).await?;

    Ok(())
}
