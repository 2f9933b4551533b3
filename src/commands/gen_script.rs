use anyhow::Result;
use std::fs;
use tracing::info;

use crate::tiles;
use crate::wikimedia;

/// Writes a standalone shell script to `out` that downloads every tile image
/// with curl into `<dir>/tiles`. The script performs the same fetches as the
/// `download` command but decoupled from this process.
pub fn gen_script(dir: &str, out: &str) -> Result<()> {
    fs::write(out, render_script(dir))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(out, fs::Permissions::from_mode(0o755))?;
    }
    info!(out, "wrote tile download script");
    Ok(())
}

fn render_script(dir: &str) -> String {
    let tiles_dir = format!("{}/tiles", dir);
    let mut script = String::from("#!/bin/bash\n");
    script.push_str(&format!("mkdir -p {}\n", tiles_dir));
    for tile in tiles::all() {
        script.push_str(&format!(
            "curl -L -o {}/{}.svg {}\n",
            tiles_dir,
            tile.id,
            wikimedia::file_url(&tile.file_name)
        ));
        script.push_str("sleep 0.2\n");
    }
    script
}
