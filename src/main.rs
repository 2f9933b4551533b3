mod commands;
mod tiles;
mod wikimedia;

use anyhow::Result;
use argh::FromArgs;
use dotenv::dotenv;
use std::env;
use tracing_subscriber::filter::EnvFilter;

const DEFAULT_ASSETS_DIR: &str = "src/assets";

#[derive(FromArgs)]
/// Fetches Mahjong tile images from Wikimedia Commons into a local asset
/// directory.
struct Args {
    /// log to a daily-rolling file under logs/ instead of stderr
    #[argh(switch, short = 'f')]
    log_to_file: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Download(DownloadArgs),
    GenScript(GenScriptArgs),
    Verify(VerifyArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "download")]
/// download every tile image into the asset directory
struct DownloadArgs {
    /// asset directory to store tile images under
    #[argh(option, short = 'd')]
    dir: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "gen-script")]
/// write a shell script that downloads every tile image with curl
struct GenScriptArgs {
    /// asset directory the generated script stores tile images under
    #[argh(option, short = 'd')]
    dir: Option<String>,

    /// path to write the generated script to
    #[argh(option, short = 'o', default = "String::from(\"download_tiles.sh\")")]
    out: String,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "verify")]
/// verify downloaded tile images and refetch broken ones
struct VerifyArgs {
    /// asset directory containing previously downloaded tile images
    #[argh(option, short = 'd')]
    dir: Option<String>,
}

fn asset_dir(arg: Option<String>) -> String {
    arg.or_else(|| env::var("TILE_ASSETS_DIR").ok())
        .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string())
}

#[tokio::main]
pub async fn main() -> Result<()> {
    dotenv().ok();
    let args: Args = argh::from_env();

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    let _guard = if args.log_to_file {
        let file_appender = tracing_appender::rolling::daily("logs", "tile-fetcher.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        subscriber.with_writer(non_blocking).init();
        Some(guard)
    } else {
        subscriber.init();
        None
    };

    match args.command {
        Command::Download(sub) => commands::download(&asset_dir(sub.dir)).await,
        Command::GenScript(sub) => commands::gen_script(&asset_dir(sub.dir), &sub.out),
        Command::Verify(sub) => commands::verify(&asset_dir(sub.dir)).await,
    }
}
