use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

// Tried in order; the first feature that handles an action wins.
const FEATURES: [Feature; 5] = [
    features::ui::update,
    features::palette::update,
    features::session::update,
    features::history::update,
    features::builder::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "unhandled action");
    None
}
