use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallpaperId(u32);

impl WallpaperId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for WallpaperId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names a bundled image asset. Resolved to bytes by an `AssetSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(asset_name: &'static str) -> Self {
        Self(asset_name)
    }

    pub fn asset_name(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperEntry {
    pub id: WallpaperId,
    pub image: ImageRef,
    pub title: &'static str,
}

impl WallpaperEntry {
    pub const fn new(id: u32, image: ImageRef, title: &'static str) -> Self {
        Self {
            id: WallpaperId::new(id),
            image,
            title,
        }
    }
}
