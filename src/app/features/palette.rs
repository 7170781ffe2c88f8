use super::enter_mode;
use crate::app::{
    action::{Action, UpdateResult},
    reducer,
    state::{AppMode, AppState, CommandPaletteState},
};
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenCommandPalette => {
            enter_mode(state, AppMode::CommandPalette);
            state.command_palette = Some(CommandPaletteState::open(state.commands.clone()));
            UpdateResult::Handled(None)
        }
        Action::CloseCommandPalette => {
            enter_mode(state, AppMode::Normal);
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteNext => {
            if let Some(cp) = &mut state.command_palette {
                cp.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPalettePrev => {
            if let Some(cp) = &mut state.command_palette {
                cp.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteInput(key) => {
            if let Some(cp) = &mut state.command_palette {
                match key.code {
                    KeyCode::Char(c) => cp.push_char(c),
                    KeyCode::Backspace => cp.pop_char(),
                    _ => {}
                }
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteSelect => {
            // Nothing highlighted means nothing to run; the palette stays open.
            let Some(selected) = state
                .command_palette
                .as_ref()
                .and_then(CommandPaletteState::selected_action)
            else {
                return UpdateResult::Handled(None);
            };
            tracing::debug!(action = ?selected, "running palette command");
            enter_mode(state, AppMode::Normal);
            UpdateResult::Handled(reducer::update(state, selected))
        }
        _ => UpdateResult::NotHandled,
    }
}
