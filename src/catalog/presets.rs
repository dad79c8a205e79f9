use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::models::{ImageRef, WallpaperEntry, WallpaperId};

pub const MOUNTAIN_SUNSET: ImageRef = ImageRef::new("mountain_sunset.png");
pub const OCEAN_DUSK: ImageRef = ImageRef::new("ocean_dusk.png");
pub const FOREST_CANOPY: ImageRef = ImageRef::new("forest_canopy.png");
pub const DESERT_DUNES: ImageRef = ImageRef::new("desert_dunes.png");

const BUNDLED: [WallpaperEntry; 4] = [
    WallpaperEntry::new(1, MOUNTAIN_SUNSET, "Mountain Sunset"),
    WallpaperEntry::new(2, OCEAN_DUSK, "Ocean Dusk"),
    WallpaperEntry::new(3, FOREST_CANOPY, "Forest Canopy"),
    WallpaperEntry::new(4, DESERT_DUNES, "Desert Dunes"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("wallpaper id {0} appears more than once")]
    DuplicateId(u32),
}

/// Ordered, read-only list of the wallpapers offered in the grid.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WallpaperEntry>,
}

impl Catalog {
    pub fn bundled() -> Self {
        Self {
            entries: BUNDLED.to_vec(),
        }
    }

    pub fn from_entries(entries: Vec<WallpaperEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.get()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WallpaperEntry] {
        &self.entries
    }

    pub fn find(&self, id: WallpaperId) -> Option<&WallpaperEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
