use std::collections::HashMap;

use eframe::egui;
use image::RgbaImage;
use tracing::warn;

use crate::catalog::models::ImageRef;
use crate::engine::decode::decode_wallpaper;
use crate::engine::thumbs::thumbnail;
use crate::host::ports::AssetSource;

/// GPU textures for grid cells and the detail view, decoded once per asset.
/// A failed decode is remembered as `None` so it is not retried every frame.
pub struct TextureCache {
    thumbnail_edge: u32,
    grid: HashMap<&'static str, Option<egui::TextureHandle>>,
    full: HashMap<&'static str, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(thumbnail_edge: u32) -> Self {
        Self {
            thumbnail_edge,
            grid: HashMap::new(),
            full: HashMap::new(),
        }
    }

    pub fn grid_texture(
        &mut self,
        ctx: &egui::Context,
        assets: &dyn AssetSource,
        image: ImageRef,
    ) -> Option<egui::TextureHandle> {
        let edge = self.thumbnail_edge;
        self.grid
            .entry(image.asset_name())
            .or_insert_with(|| {
                load_texture(ctx, assets, image, "grid", |pixels| thumbnail(&pixels, edge))
            })
            .clone()
    }

    pub fn full_texture(
        &mut self,
        ctx: &egui::Context,
        assets: &dyn AssetSource,
        image: ImageRef,
    ) -> Option<egui::TextureHandle> {
        self.full
            .entry(image.asset_name())
            .or_insert_with(|| load_texture(ctx, assets, image, "full", |pixels| pixels))
            .clone()
    }
}

fn load_texture(
    ctx: &egui::Context,
    assets: &dyn AssetSource,
    image: ImageRef,
    variant: &str,
    prepare: impl FnOnce(RgbaImage) -> RgbaImage,
) -> Option<egui::TextureHandle> {
    let Some(bytes) = assets.load(image) else {
        warn!(asset = image.asset_name(), "asset missing, showing placeholder");
        return None;
    };
    let decoded = match decode_wallpaper(bytes) {
        Ok(decoded) => decoded,
        Err(error) => {
            warn!(asset = image.asset_name(), %error, "asset failed to decode, showing placeholder");
            return None;
        }
    };

    let pixels = prepare(decoded.into_pixels());
    let size = [pixels.width() as usize, pixels.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_raw());
    Some(ctx.load_texture(
        format!("{variant}:{}", image.asset_name()),
        color_image,
        egui::TextureOptions::LINEAR,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::testing::FakeAssets;
    use crate::catalog::assets::BundledAssets;
    use crate::catalog::presets::{FOREST_CANOPY, MOUNTAIN_SUNSET};

    #[test]
    fn grid_textures_are_downscaled() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new(120);

        let texture = cache
            .grid_texture(&ctx, &BundledAssets, MOUNTAIN_SUNSET)
            .expect("bundled asset should load");
        let [width, height] = texture.size();
        assert_eq!(width.max(height), 120);

        let full = cache
            .full_texture(&ctx, &BundledAssets, MOUNTAIN_SUNSET)
            .expect("bundled asset should load");
        assert_eq!(full.size(), [270, 480]);
    }

    #[test]
    fn undecodable_asset_is_cached_as_placeholder() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new(120);
        let assets = FakeAssets::default().with(FOREST_CANOPY, b"broken".to_vec());

        assert!(cache.grid_texture(&ctx, &assets, FOREST_CANOPY).is_none());
        assert!(cache.grid.contains_key(FOREST_CANOPY.asset_name()));
    }
}
