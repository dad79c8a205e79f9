use std::cell::RefCell;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::host::ports::Notifier;

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// Short-lived message overlay. A new message replaces the one on screen.
#[derive(Debug)]
pub struct ToastQueue {
    duration: Duration,
    current: RefCell<Option<Toast>>,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: RefCell::new(None),
        }
    }

    pub fn push_at(&self, message: &str, now: Instant) {
        *self.current.borrow_mut() = Some(Toast {
            message: message.to_string(),
            expires_at: now + self.duration,
        });
    }

    pub fn visible_at(&self, now: Instant) -> Option<String> {
        let mut current = self.current.borrow_mut();
        if current.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            *current = None;
        }
        current.as_ref().map(|toast| toast.message.clone())
    }

    fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.current
            .borrow()
            .as_ref()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
    }

    pub fn show(&self, ctx: &egui::Context) {
        let now = Instant::now();
        let Some(message) = self.visible_at(now) else {
            return;
        };

        egui::Area::new(egui::Id::new("wallpick_toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(message);
                });
            });

        if let Some(remaining) = self.remaining_at(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Notifier for ToastQueue {
    fn show_short(&self, message: &str) {
        self.push_at(message, Instant::now());
    }
}
