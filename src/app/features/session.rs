use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectSample(name) => {
            if state.session.select_sample(name) {
                state.sync_editor();
            }
            UpdateResult::Handled(None)
        }
        Action::NextSample => {
            if state.session.next_sample() {
                state.sync_editor();
            }
            UpdateResult::Handled(None)
        }
        Action::PrevSample => {
            if state.session.prev_sample() {
                state.sync_editor();
            }
            UpdateResult::Handled(None)
        }
        Action::EditorInput(key) => {
            if state.editor.input(*key) {
                let text = state.editor.text();
                state.session.edit_query(text);
            }
            UpdateResult::Handled(None)
        }
        Action::RunQuery => UpdateResult::Handled(state.session.begin_run()),
        Action::QueryCompleted(outcome) => {
            UpdateResult::Handled(Some(state.session.complete_run(outcome.clone())))
        }
        Action::ExportResults => UpdateResult::Handled(Some(state.session.export_current_result())),
        Action::ExportCompleted(outcome) => {
            UpdateResult::Handled(Some(state.session.complete_export(outcome.clone())))
        }
        Action::ToggleDarkMode => {
            state.session.toggle_dark_mode();
            state.apply_theme();
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
