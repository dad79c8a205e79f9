use crate::apply::ApplyError;
use crate::catalog::models::ImageRef;
use crate::engine::decode::DecodedWallpaper;

pub trait AssetSource {
    fn load(&self, image: ImageRef) -> Option<&[u8]>;
}

pub trait WallpaperSetter {
    fn set_wallpaper(
        &self,
        image: ImageRef,
        wallpaper: &DecodedWallpaper,
    ) -> Result<(), ApplyError>;
}

/// Fire-and-forget, short-lived user-visible message.
pub trait Notifier {
    fn show_short(&self, message: &str);
}

/// The host capabilities the apply operation needs, passed in explicitly.
#[derive(Clone, Copy)]
pub struct HostContext<'a> {
    pub assets: &'a dyn AssetSource,
    pub wallpaper: &'a dyn WallpaperSetter,
    pub notifier: &'a dyn Notifier,
}

impl<'a> HostContext<'a> {
    pub fn new(
        assets: &'a dyn AssetSource,
        wallpaper: &'a dyn WallpaperSetter,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            assets,
            wallpaper,
            notifier,
        }
    }
}
