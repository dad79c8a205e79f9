use eframe::egui;

use crate::catalog::models::{ImageRef, WallpaperEntry, WallpaperId};
use crate::host::ports::AssetSource;
use crate::ui::textures::TextureCache;

pub const GRID_COLUMNS: usize = 2;
/// Width over height of every grid cell.
pub const CELL_ASPECT: f32 = 0.7;
const GRID_SPACING: f32 = 8.0;
const TITLE_INSET: f32 = 8.0;
const TITLE_PADDING: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub id: WallpaperId,
    pub image: ImageRef,
    pub title: &'static str,
}

impl From<&WallpaperEntry> for GridCell {
    fn from(entry: &WallpaperEntry) -> Self {
        Self {
            id: entry.id,
            image: entry.image,
            title: entry.title,
        }
    }
}

/// Catalog entries in declared order, `GRID_COLUMNS` per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    rows: Vec<Vec<GridCell>>,
}

impl GridLayout {
    pub fn build(entries: &[WallpaperEntry]) -> Self {
        let rows = entries
            .chunks(GRID_COLUMNS)
            .map(|row| row.iter().map(GridCell::from).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// UV rectangle that center-crops a `width` x `height` image to `aspect`.
pub fn crop_uv(width: u32, height: u32, aspect: f32) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if width == 0 || height == 0 || aspect <= 0.0 {
        return full;
    }

    let source_aspect = width as f32 / height as f32;
    if source_aspect > aspect {
        let visible = aspect / source_aspect;
        let inset = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = source_aspect / aspect;
        let inset = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

/// Draws the grid and returns the wallpaper clicked this frame, if any.
pub fn show_grid(
    ctx: &egui::Context,
    layout: &GridLayout,
    textures: &mut TextureCache,
    assets: &dyn AssetSource,
) -> Option<WallpaperId> {
    let mut chosen = None;

    egui::TopBottomPanel::top("grid_top_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading("Wallpapers");
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(GRID_SPACING, GRID_SPACING);
            let columns = GRID_COLUMNS as f32;
            let cell_width =
                ((ui.available_width() - GRID_SPACING * (columns - 1.0)) / columns).max(1.0);
            let cell_size = egui::vec2(cell_width, cell_width / CELL_ASPECT);

            if layout.cell_count() == 0 {
                ui.weak("No wallpapers available");
            }

            for row in layout.rows() {
                ui.horizontal(|ui| {
                    for cell in row {
                        let texture = textures.grid_texture(ctx, assets, cell.image);
                        if show_cell(ui, cell, texture.as_ref(), cell_size).clicked() {
                            chosen = Some(cell.id);
                        }
                    }
                });
            }
        });
    });

    chosen
}

fn show_cell(
    ui: &mut egui::Ui,
    cell: &GridCell,
    texture: Option<&egui::TextureHandle>,
    size: egui::Vec2,
) -> egui::Response {
    let response = match texture {
        Some(texture) => {
            let [width, height] = texture.size();
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .uv(crop_uv(width as u32, height as u32, CELL_ASPECT))
                    .fit_to_exact_size(size)
                    .maintain_aspect_ratio(false)
                    .sense(egui::Sense::click()),
            )
        }
        None => {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 6.0, ui.visuals().extreme_bg_color);
            response
        }
    };

    let painter = ui.painter_at(response.rect);
    let galley = painter.layout_no_wrap(
        cell.title.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
    let text_pos = egui::pos2(
        response.rect.left() + TITLE_INSET + TITLE_PADDING,
        response.rect.bottom() - TITLE_INSET - TITLE_PADDING - galley.size().y,
    );
    let plate = egui::Rect::from_min_size(text_pos, galley.size()).expand(TITLE_PADDING);
    painter.rect_filled(plate, 4.0, egui::Color32::from_black_alpha(170));
    painter.galley(text_pos, galley, egui::Color32::WHITE);

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets::{Catalog, OCEAN_DUSK};

    #[test]
    fn layout_places_two_entries_per_row_in_order() {
        let catalog = Catalog::bundled();
        let layout = GridLayout::build(catalog.entries());

        assert_eq!(layout.rows().len(), 2);
        assert!(layout.rows().iter().all(|row| row.len() == GRID_COLUMNS));
        let titles: Vec<_> = layout.rows().iter().flatten().map(|cell| cell.title).collect();
        assert_eq!(
            titles,
            vec!["Mountain Sunset", "Ocean Dusk", "Forest Canopy", "Desert Dunes"]
        );
    }

    #[test]
    fn odd_catalog_leaves_last_row_short() {
        let entries: Vec<_> = Catalog::bundled().entries()[..3].to_vec();
        let layout = GridLayout::build(&entries);
        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.rows()[1].len(), 1);
        assert_eq!(layout.rows()[1][0].image, entries[2].image);
    }

    #[test]
    fn empty_catalog_renders_empty_grid() {
        let layout = GridLayout::build(&[]);
        assert!(layout.rows().is_empty());
        assert_eq!(layout.cell_count(), 0);
    }

    #[test]
    fn layout_is_stable_across_builds() {
        let entries = [WallpaperEntry::new(9, OCEAN_DUSK, "Only")];
        assert_eq!(GridLayout::build(&entries), GridLayout::build(&entries));
    }

    #[test]
    fn crop_uv_trims_sides_of_wide_images() {
        let uv = crop_uv(200, 100, 0.5);
        assert!((uv.min.x - 0.375).abs() < 1e-6);
        assert!((uv.max.x - 0.625).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn crop_uv_trims_top_and_bottom_of_tall_images() {
        let uv = crop_uv(100, 400, 0.5);
        assert_eq!(uv.min.x, 0.0);
        assert!((uv.min.y - 0.25).abs() < 1e-6);
        assert!((uv.max.y - 0.75).abs() < 1e-6);
    }

    #[test]
    fn crop_uv_uses_full_texture_for_degenerate_sizes() {
        let uv = crop_uv(0, 10, CELL_ASPECT);
        assert_eq!(uv.min, egui::pos2(0.0, 0.0));
        assert_eq!(uv.max, egui::pos2(1.0, 1.0));
    }
}
