use tracing::{debug, warn};

use crate::app::events::AppEvent;
use crate::app::state::{Screen, SelectionState, SubscriptionId};
use crate::apply::{apply_wallpaper, ApplyOutcome};
use crate::catalog::models::WallpaperEntry;
use crate::catalog::presets::Catalog;
use crate::host::ports::HostContext;

/// Owns the selection and decides which screen is shown.
#[derive(Debug)]
pub struct ScreenCoordinator {
    catalog: Catalog,
    selection: SelectionState,
}

impl ScreenCoordinator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen {
        self.selection.screen()
    }

    pub fn on_item_chosen(&mut self, entry: WallpaperEntry) {
        debug!(id = %entry.id, title = entry.title, "wallpaper selected");
        self.selection.select(entry);
    }

    pub fn on_back(&mut self) {
        debug!("back to grid");
        self.selection.clear();
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Screen) + 'static) -> SubscriptionId {
        self.selection.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.selection.unsubscribe(id)
    }

    /// Applies the selected wallpaper. The selection is left as it was so the
    /// user stays on the detail screen and can retry.
    pub fn apply_selected(&self, host: &HostContext<'_>) -> Option<ApplyOutcome> {
        let entry = self.selection.selected()?;
        Some(apply_wallpaper(host, entry.image))
    }

    pub fn dispatch(&mut self, event: AppEvent, host: &HostContext<'_>) -> Option<ApplyOutcome> {
        match event {
            AppEvent::ItemChosen(id) => {
                match self.catalog.find(id).copied() {
                    Some(entry) => self.on_item_chosen(entry),
                    None => warn!(%id, "ignoring selection of unknown wallpaper"),
                }
                None
            }
            AppEvent::Back => {
                self.on_back();
                None
            }
            AppEvent::Apply => {
                let outcome = self.apply_selected(host);
                if outcome.is_none() {
                    warn!("apply requested with no wallpaper selected");
                }
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::apply::testing::{png_bytes, FakeAssets, FakeWallpaper, RecordingNotifier};
    use crate::apply::{APPLY_FAILURE_MESSAGE, APPLY_SUCCESS_MESSAGE};
    use crate::catalog::assets::BundledAssets;
    use crate::catalog::models::WallpaperId;
    use crate::catalog::presets::MOUNTAIN_SUNSET;
    use crate::ui::detail::{DetailView, SET_WALLPAPER_LABEL};
    use crate::ui::grid::GridLayout;

    #[test]
    fn choosing_any_entry_enters_viewing() {
        let mut coordinator = ScreenCoordinator::new(Catalog::bundled());
        let entries = coordinator.catalog().entries().to_vec();
        for entry in entries {
            coordinator.on_item_chosen(entry);
            assert_eq!(coordinator.screen(), Screen::Viewing(entry));
        }
    }

    #[test]
    fn back_always_returns_to_browsing() {
        let mut coordinator = ScreenCoordinator::new(Catalog::bundled());
        coordinator.on_back();
        assert_eq!(coordinator.screen(), Screen::Browsing);

        let entry = coordinator.catalog().entries()[1];
        coordinator.on_item_chosen(entry);
        coordinator.on_back();
        coordinator.on_back();
        assert_eq!(coordinator.screen(), Screen::Browsing);
    }

    #[test]
    fn dispatch_ignores_unknown_ids_and_apply_while_browsing() {
        let assets = FakeAssets::default();
        let wallpaper = FakeWallpaper::default();
        let notifier = RecordingNotifier::default();
        let host = HostContext::new(&assets, &wallpaper, &notifier);
        let mut coordinator = ScreenCoordinator::new(Catalog::bundled());

        assert!(coordinator
            .dispatch(AppEvent::ItemChosen(WallpaperId::new(42)), &host)
            .is_none());
        assert_eq!(coordinator.screen(), Screen::Browsing);
        assert!(coordinator.dispatch(AppEvent::Apply, &host).is_none());
        assert!(notifier.messages.borrow().is_empty());
    }

    #[test]
    fn failed_apply_keeps_selection() {
        let entry = WallpaperEntry::new(5, MOUNTAIN_SUNSET, "Broken");
        let assets = FakeAssets::default().with(MOUNTAIN_SUNSET, Vec::new());
        let wallpaper = FakeWallpaper::default();
        let notifier = RecordingNotifier::default();
        let host = HostContext::new(&assets, &wallpaper, &notifier);
        let catalog = Catalog::from_entries(vec![entry]).expect("catalog should build");
        let mut coordinator = ScreenCoordinator::new(catalog);

        coordinator.dispatch(AppEvent::ItemChosen(entry.id), &host);
        let outcome = coordinator.dispatch(AppEvent::Apply, &host);

        assert!(matches!(outcome, Some(ApplyOutcome::Failed(_))));
        assert_eq!(coordinator.screen(), Screen::Viewing(entry));
        assert_eq!(*notifier.messages.borrow(), vec![APPLY_FAILURE_MESSAGE]);
    }

    #[test]
    fn observers_are_told_about_each_transition() {
        let renders = Rc::new(Cell::new(0));
        let mut coordinator = ScreenCoordinator::new(Catalog::bundled());
        let counter = Rc::clone(&renders);
        coordinator.subscribe(move |_| counter.set(counter.get() + 1));

        let entry = coordinator.catalog().entries()[0];
        coordinator.on_item_chosen(entry);
        coordinator.on_back();

        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn mountain_sunset_walkthrough() {
        let entry = WallpaperEntry::new(1, MOUNTAIN_SUNSET, "Mountain Sunset");
        let catalog = Catalog::from_entries(vec![entry]).expect("catalog should build");
        let mut coordinator = ScreenCoordinator::new(catalog);
        let wallpaper = FakeWallpaper::default();
        let notifier = RecordingNotifier::default();
        let host = HostContext::new(&BundledAssets, &wallpaper, &notifier);

        assert_eq!(coordinator.screen(), Screen::Browsing);
        let grid = GridLayout::build(coordinator.catalog().entries());
        assert_eq!(grid.cell_count(), 1);
        assert_eq!(grid.rows()[0][0].title, "Mountain Sunset");

        coordinator.dispatch(AppEvent::ItemChosen(grid.rows()[0][0].id), &host);
        let Screen::Viewing(selected) = coordinator.screen() else {
            panic!("expected detail view");
        };
        let detail = DetailView::for_entry(&selected);
        assert_eq!(detail.title, "Mountain Sunset");
        assert_eq!(detail.apply_label, SET_WALLPAPER_LABEL);

        let outcome = coordinator.dispatch(AppEvent::Apply, &host);
        assert!(matches!(outcome, Some(ApplyOutcome::Applied)));
        assert_eq!(*notifier.messages.borrow(), vec![APPLY_SUCCESS_MESSAGE]);
        assert_eq!(coordinator.screen(), Screen::Viewing(entry));

        coordinator.dispatch(AppEvent::Back, &host);
        assert_eq!(coordinator.screen(), Screen::Browsing);
    }

    #[test]
    fn apply_uses_injected_assets() {
        let entry = WallpaperEntry::new(1, MOUNTAIN_SUNSET, "Mountain Sunset");
        let assets = FakeAssets::default().with(MOUNTAIN_SUNSET, png_bytes());
        let wallpaper = FakeWallpaper::default();
        let notifier = RecordingNotifier::default();
        let host = HostContext::new(&assets, &wallpaper, &notifier);
        let mut coordinator =
            ScreenCoordinator::new(Catalog::from_entries(vec![entry]).expect("catalog"));

        coordinator.on_item_chosen(entry);
        let outcome = coordinator.apply_selected(&host);

        assert!(matches!(outcome, Some(ApplyOutcome::Applied)));
        assert_eq!(*wallpaper.applied.borrow(), vec![(9, 16)]);
    }
}
