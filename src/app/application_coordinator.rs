//! Application-level coordination.
//!
//! Each frame, the coordinator feeds the presenter the host appearance and the
//! current instant, and asks egui to wake up again when the next presenter task
//! is due. Between deadlines the app does not repaint.

use std::time::Instant;
use timeless::PresenterUpdate;

use crate::app::{AppState, ThemeCoordinator};

/// Coordinates the presenter with the egui event loop.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Runs one event-loop step and returns what changed.
    pub fn step(state: &mut AppState, ctx: &egui::Context) -> PresenterUpdate {
        let host = ThemeCoordinator::host_theme(ctx);
        let mut update = PresenterUpdate::default();

        if state.take_host_baseline_pending() {
            if state.has_explicit_theme() {
                state.presenter.watch_host_theme(host);
            } else {
                state.presenter.adopt_host_theme(host);
                update.theme = host.is_some();
            }
        } else {
            update = update.merge(state.presenter.on_host_appearance(host));
        }

        let now = Instant::now();
        update = update.merge(state.presenter.poll(now));

        if update.theme {
            tracing::info!(theme = state.presenter.theme().name(), "theme follows system appearance");
        }

        if let Some(delay) = state.presenter.next_deadline(now) {
            ctx.request_repaint_after(delay);
        }

        update
    }

    /// Handles the dark mode switch.
    pub fn toggle_dark_mode(state: &mut AppState) {
        let mode = state.presenter.toggle_dark_mode();
        tracing::info!(theme = mode.name(), "dark mode switched");
    }

    /// Cancels the presenter's tasks and the appearance subscription.
    pub fn shutdown(state: &mut AppState) {
        state.presenter.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeless::{AppConfig, FontSet, QuoteCatalog};

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), QuoteCatalog::embedded().unwrap(), FontSet::default())
    }

    #[test]
    fn test_first_step_without_host_theme() {
        let mut state = state();
        let ctx = egui::Context::default();
        let update = ApplicationCoordinator::step(&mut state, &ctx);
        assert!(!update.theme);
        assert!(!state.presenter.is_dark_mode());
    }

    #[test]
    fn test_toggle_flips_theme() {
        let mut state = state();
        ApplicationCoordinator::toggle_dark_mode(&mut state);
        assert!(state.presenter.is_dark_mode());
        ApplicationCoordinator::toggle_dark_mode(&mut state);
        assert!(!state.presenter.is_dark_mode());
    }

    #[test]
    fn test_shutdown_stops_presenter() {
        let mut state = state();
        ApplicationCoordinator::shutdown(&mut state);
        assert!(state.presenter.is_shut_down());

        let ctx = egui::Context::default();
        assert!(!ApplicationCoordinator::step(&mut state, &ctx).any());
    }
}
