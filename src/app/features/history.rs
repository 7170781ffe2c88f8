use super::{enter_mode, toggle_mode};
use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHistory => {
            toggle_mode(state, AppMode::History);
            state.history_panel.selected = 0;
            UpdateResult::Handled(None)
        }
        Action::HistoryNext => {
            let len = state.session.history().len();
            state.history_panel.select_next(len);
            UpdateResult::Handled(None)
        }
        Action::HistoryPrev => {
            state.history_panel.select_prev();
            UpdateResult::Handled(None)
        }
        Action::SelectHistoryEntry(index) => {
            let Some(command) = state.session.select_from_history(*index) else {
                return UpdateResult::Handled(None);
            };
            state.sync_editor();
            enter_mode(state, AppMode::Normal);
            UpdateResult::Handled(Some(command))
        }
        Action::ClearHistory => {
            let command = state.session.clear_history();
            state.history_panel.clamp(0);
            UpdateResult::Handled(Some(command))
        }
        _ => UpdateResult::NotHandled,
    }
}
