use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key, app_state),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if let Some(action) = app_state.keymap.global_action(key) {
        return Some(action);
    }

    match app_state.mode {
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::CommandPalette => match key.code {
            KeyCode::Esc => Some(Action::CloseCommandPalette),
            KeyCode::Enter => Some(Action::CommandPaletteSelect),
            KeyCode::Down | KeyCode::Tab => Some(Action::CommandPaletteNext),
            KeyCode::Up | KeyCode::BackTab => Some(Action::CommandPalettePrev),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(_) | KeyCode::Backspace => Some(Action::CommandPaletteInput(key)),
            _ => None,
        },
        AppMode::History => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::HistoryNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::HistoryPrev),
            KeyCode::Enter => Some(Action::SelectHistoryEntry(app_state.history_panel.selected)),
            KeyCode::Delete | KeyCode::Char('c') => Some(Action::ClearHistory),
            _ => app_state.keymap.panel_action(key),
        },
        AppMode::Builder => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Tab | KeyCode::Down => Some(Action::BuilderNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::BuilderPrevField),
            KeyCode::Enter => Some(Action::GenerateQuery),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(_) | KeyCode::Backspace => {
                Some(Action::BuilderInput(key))
            }
            _ => None,
        },
        // The editor has focus and takes every key that is not global.
        AppMode::Normal => match key.code {
            KeyCode::Esc => Some(Action::DismissToast),
            _ => Some(Action::EditorInput(key)),
        },
    }
}
