pub mod builder;
pub mod handler;
pub mod history;
pub mod palette;
pub mod session;
pub mod ui;

use crate::app::state::{AppMode, AppState};

/// Switches focus to `mode`. The palette is modal, so any switch closes it.
pub(crate) fn enter_mode(state: &mut AppState, mode: AppMode) {
    state.command_palette = None;
    state.mode = mode;
}

/// Enters `mode`, or returns to the editor when it is already active.
pub(crate) fn toggle_mode(state: &mut AppState, mode: AppMode) {
    let next = if state.mode == mode {
        AppMode::Normal
    } else {
        mode
    };
    enter_mode(state, next);
}
