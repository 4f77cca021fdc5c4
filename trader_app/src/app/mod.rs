pub mod commands;
pub mod event;
pub mod reducer;
pub mod render;
pub mod state;

pub use event::*;
pub use state::*;

use std::sync::mpsc::{self, Receiver, Sender};

pub struct AppRuntime {
    pub state: AppState,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    dirty: bool,
}

impl Default for AppRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRuntime {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: AppState::default(),
            tx,
            rx,
            dirty: true,
        }
    }

    pub fn handle_event(&mut self, ev: AppEvent) {
        let changed = reducer::reduce(&mut self.state, ev);
        if changed {
            self.dirty = true;
        }
    }

    /// Runs every queued click through the reducer. Returns true if anything changed.
    pub fn drain_events(&mut self) -> bool {
        let pending: Vec<AppEvent> = self.rx.try_iter().collect();
        let before = self.dirty;
        self.dirty = false;
        for ev in pending {
            self.handle_event(ev);
        }
        let changed = self.dirty;
        self.dirty |= before;
        changed
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl eframe::App for AppRuntime {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render::render(&self.state, ctx, &self.tx);

        self.drain_events();
        if self.take_dirty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(rt: &AppRuntime, ev: UiEvent) {
        commands::emit(&rt.tx, ev);
    }

    #[test]
    fn queued_clicks_are_applied_in_order() {
        let mut rt = AppRuntime::new();
        rt.take_dirty();

        click(&rt, UiEvent::TraderSelected { name: "CyCap".into() });
        click(&rt, UiEvent::BackToHome);
        click(&rt, UiEvent::TraderSelected { name: "CyCap".into() });
        assert!(rt.drain_events());
        assert_eq!(rt.state.screen, Screen::TradeDetail);
        assert!(rt.take_dirty());
        assert!(!rt.take_dirty());
    }

    #[test]
    fn placeholder_click_does_not_dirty() {
        let mut rt = AppRuntime::new();
        rt.take_dirty();

        click(&rt, UiEvent::TraderSelected { name: "Trader2".into() });
        assert!(!rt.drain_events());
        assert!(!rt.take_dirty());
        assert_eq!(rt.state.screen, Screen::Home);
        assert_eq!(rt.state.notice_count, 1);
    }

    #[test]
    fn empty_queue_keeps_pending_repaint() {
        let mut rt = AppRuntime::new();
        assert!(!rt.drain_events());
        assert!(rt.take_dirty());
    }
}
