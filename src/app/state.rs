use crate::catalog::models::WallpaperEntry;

/// Which screen is active. `Viewing` always carries the selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browsing,
    Viewing(WallpaperEntry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Screen)>;

/// The single selected wallpaper plus the callbacks that re-render on change.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<WallpaperEntry>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl SelectionState {
    pub fn screen(&self) -> Screen {
        match self.selected {
            Some(entry) => Screen::Viewing(entry),
            None => Screen::Browsing,
        }
    }

    pub fn selected(&self) -> Option<&WallpaperEntry> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, entry: WallpaperEntry) {
        self.selected = Some(entry);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.notify();
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Screen) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let screen = self.screen();
        for (_, observer) in &mut self.observers {
            observer(&screen);
        }
    }
}

impl std::fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::presets::Catalog;

    #[test]
    fn starts_browsing() {
        let state = SelectionState::default();
        assert_eq!(state.screen(), Screen::Browsing);
        assert!(state.selected().is_none());
    }

    #[test]
    fn observers_see_every_transition_until_unsubscribed() {
        let entry = Catalog::bundled().entries()[0];
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = SelectionState::default();
        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |screen| sink.borrow_mut().push(*screen));

        state.select(entry);
        state.clear();
        assert!(state.unsubscribe(id));
        state.select(entry);

        assert_eq!(
            *seen.borrow(),
            vec![Screen::Viewing(entry), Screen::Browsing]
        );
        assert!(!state.unsubscribe(id));
    }
}
