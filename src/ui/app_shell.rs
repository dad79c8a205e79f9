use std::time::Duration;

use eframe::egui;
use tracing::debug;

use crate::app::controller::ScreenCoordinator;
use crate::app::events::AppEvent;
use crate::app::state::Screen;
use crate::catalog::assets::BundledAssets;
use crate::host::desktop::DesktopWallpaper;
use crate::host::ports::HostContext;
use crate::infra::config::AppConfig;
use crate::ui::detail::{show_detail, DetailAction, DetailView};
use crate::ui::grid::{show_grid, GridLayout};
use crate::ui::textures::TextureCache;
use crate::ui::toast::ToastQueue;

pub struct WallpaperApp {
    coordinator: ScreenCoordinator,
    assets: BundledAssets,
    wallpaper: DesktopWallpaper,
    toasts: ToastQueue,
    textures: TextureCache,
}

impl WallpaperApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        mut coordinator: ScreenCoordinator,
        config: &AppConfig,
    ) -> Self {
        let repaint_ctx = cc.egui_ctx.clone();
        coordinator.subscribe(move |screen| {
            debug!(?screen, "screen changed");
            repaint_ctx.request_repaint();
        });

        Self {
            coordinator,
            assets: BundledAssets,
            wallpaper: DesktopWallpaper::new(&config.staging_dir),
            toasts: ToastQueue::new(Duration::from_millis(config.toast_millis)),
            textures: TextureCache::new(config.thumbnail_edge),
        }
    }
}

impl eframe::App for WallpaperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let event = match self.coordinator.screen() {
            Screen::Browsing => {
                let layout = GridLayout::build(self.coordinator.catalog().entries());
                show_grid(ctx, &layout, &mut self.textures, &self.assets).map(AppEvent::ItemChosen)
            }
            Screen::Viewing(entry) => {
                let view = DetailView::for_entry(&entry);
                let texture = self.textures.full_texture(ctx, &self.assets, view.image);
                show_detail(ctx, &view, texture.as_ref()).map(|action| match action {
                    DetailAction::Back => AppEvent::Back,
                    DetailAction::Apply => AppEvent::Apply,
                })
            }
        };

        if let Some(event) = event {
            let host = HostContext::new(&self.assets, &self.wallpaper, &self.toasts);
            self.coordinator.dispatch(event, &host);
        }

        self.toasts.show(ctx);
    }
}

pub fn launch_window(coordinator: ScreenCoordinator, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("wallpick"),
        ..Default::default()
    };

    eframe::run_native(
        "wallpick",
        options,
        Box::new(|cc| Ok(Box::new(WallpaperApp::new(cc, coordinator, config)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
