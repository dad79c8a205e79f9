use eframe::egui;

use crate::catalog::models::{ImageRef, WallpaperEntry};

pub const SET_WALLPAPER_LABEL: &str = "Set Wallpaper";
pub const BACK_LABEL: &str = "Back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Back,
    Apply,
}

/// What the detail screen shows for the selected wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView {
    pub title: &'static str,
    pub image: ImageRef,
    pub back_label: &'static str,
    pub apply_label: &'static str,
}

impl DetailView {
    pub fn for_entry(entry: &WallpaperEntry) -> Self {
        Self {
            title: entry.title,
            image: entry.image,
            back_label: BACK_LABEL,
            apply_label: SET_WALLPAPER_LABEL,
        }
    }
}

pub fn show_detail(
    ctx: &egui::Context,
    view: &DetailView,
    texture: Option<&egui::TextureHandle>,
) -> Option<DetailAction> {
    let mut action = None;

    egui::TopBottomPanel::top("detail_top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("←")
                .on_hover_text(view.back_label)
                .clicked()
            {
                action = Some(DetailAction::Back);
            }
            ui.heading(view.title);
        });
    });

    egui::TopBottomPanel::bottom("detail_actions").show(ctx, |ui| {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button(view.apply_label).clicked() {
                action = Some(DetailAction::Apply);
            }
        });
        ui.add_space(16.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| match texture {
        Some(texture) => {
            let available = ui.available_size();
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .fit_to_exact_size(available)
                        .maintain_aspect_ratio(true),
                );
            });
        }
        None => {
            ui.centered_and_justified(|ui| {
                ui.weak("Preview unavailable");
            });
        }
    });

    if action.is_none() && ctx.input(|input| input.key_pressed(egui::Key::Escape)) {
        action = Some(DetailAction::Back);
    }

    action
}
