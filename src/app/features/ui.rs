use super::{enter_mode, toggle_mode};
use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            toggle_mode(state, AppMode::Help);
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            enter_mode(state, AppMode::Normal);
            UpdateResult::Handled(None)
        }
        Action::DismissToast => UpdateResult::Handled(state.session.dismiss_latest_toast()),
        Action::ToastExpired(id) => {
            state.session.expire_toast(*id);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
