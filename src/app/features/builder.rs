use super::{enter_mode, toggle_mode};
use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleBuilder => {
            toggle_mode(state, AppMode::Builder);
            UpdateResult::Handled(None)
        }
        Action::BuilderNextField => {
            state.builder.focus = state.builder.focus.next();
            UpdateResult::Handled(None)
        }
        Action::BuilderPrevField => {
            state.builder.focus = state.builder.focus.prev();
            UpdateResult::Handled(None)
        }
        Action::BuilderInput(key) => {
            match key.code {
                KeyCode::Right => state.builder.next_table(),
                KeyCode::Left => state.builder.prev_table(),
                KeyCode::Char(c) => state.builder.push_char(c),
                KeyCode::Backspace => state.builder.pop_char(),
                _ => {}
            }
            UpdateResult::Handled(None)
        }
        Action::GenerateQuery => {
            let query = state.builder.form.generate();
            tracing::debug!(%query, "generated query from builder");
            let command = state.session.apply_generated_query(query);
            state.sync_editor();
            enter_mode(state, AppMode::Normal);
            UpdateResult::Handled(Some(command))
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::MSG_QUERY_GENERATED;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty());
            update(state, &Action::BuilderInput(key));
        }
    }

    #[test]
    fn test_generate_fills_editor_and_closes() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleBuilder);
        assert_eq!(state.mode, AppMode::Builder);

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::empty());
        update(&mut state, &Action::BuilderInput(right));
        update(&mut state, &Action::BuilderNextField); // columns
        update(&mut state, &Action::BuilderNextField); // where
        type_str(&mut state, "total > 50");
        update(&mut state, &Action::BuilderNextField); // order by
        update(&mut state, &Action::BuilderNextField); // limit
        type_str(&mut state, "5x");

        update(&mut state, &Action::GenerateQuery);
        let expected = "SELECT * FROM orders WHERE total > 50 LIMIT 5;";
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.session.query(), expected);
        assert_eq!(state.editor.text(), expected);
        assert_eq!(
            state.session.toasts().latest().unwrap().message,
            MSG_QUERY_GENERATED
        );
    }

    #[test]
    fn test_builder_keeps_form_between_openings() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleBuilder);
        update(&mut state, &Action::BuilderNextField);
        type_str(&mut state, ", id");
        update(&mut state, &Action::ToggleBuilder);
        update(&mut state, &Action::ToggleBuilder);
        assert_eq!(state.builder.form.columns, "*, id");
    }
}
