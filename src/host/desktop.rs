use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::apply::ApplyError;
use crate::catalog::models::ImageRef;
use crate::engine::decode::DecodedWallpaper;
use crate::host::ports::{Notifier, WallpaperSetter};

const STAGED_FILE_PREFIX: &str = "wallpick-";

/// Sets the desktop wallpaper through the `wallpaper` crate, which only
/// accepts a file path, so the decoded pixels are staged as a PNG first.
/// Each asset gets its own file: desktops skip reloading an unchanged path.
#[derive(Debug, Clone)]
pub struct DesktopWallpaper {
    staging_dir: PathBuf,
}

impl DesktopWallpaper {
    pub fn new(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
        }
    }

    pub fn staged_path(&self, image: ImageRef) -> PathBuf {
        let stem = Path::new(image.asset_name())
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("wallpaper");
        self.staging_dir.join(format!("{STAGED_FILE_PREFIX}{stem}.png"))
    }

    fn stage(
        &self,
        image: ImageRef,
        wallpaper: &DecodedWallpaper,
    ) -> Result<PathBuf, ApplyError> {
        fs::create_dir_all(&self.staging_dir)?;
        let path = self.staged_path(image);
        wallpaper
            .pixels()
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|error| io::Error::other(format!("{}: {error}", path.display())))?;
        debug!(
            path = %path.display(),
            width = wallpaper.width(),
            height = wallpaper.height(),
            "staged wallpaper"
        );
        Ok(canonical_or_original(path))
    }
}

impl WallpaperSetter for DesktopWallpaper {
    fn set_wallpaper(
        &self,
        image: ImageRef,
        wallpaper: &DecodedWallpaper,
    ) -> Result<(), ApplyError> {
        let path = self.stage(image, wallpaper)?;
        let path_str = path.to_str().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("non UTF-8 path: {}", path.display()),
            )
        })?;
        wallpaper::set_from_path(path_str)
            .map_err(|error| ApplyError::Platform(error.to_string()))?;
        info!(path = path_str, "desktop wallpaper updated");
        Ok(())
    }
}

fn canonical_or_original(path: PathBuf) -> PathBuf {
    fs::canonicalize(&path).unwrap_or(path)
}

/// Prints messages for the headless `apply` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_short(&self, message: &str) {
        eprintln!("{message}");
    }
}
