use crate::app::action::Action;
use crate::app::command_palette::{filter_commands, PaletteCommand};
use std::sync::Arc;

/// Search and selection state of an open palette. Dropped on close, so every
/// open starts from an empty query, the full list and index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into `source`
    pub selected_index: usize,
    source: Arc<[PaletteCommand]>,
}

impl CommandPaletteState {
    #[must_use]
    pub fn open(source: Arc<[PaletteCommand]>) -> Self {
        let matches = (0..source.len()).collect();
        Self {
            query: String::new(),
            matches,
            selected_index: 0,
            source,
        }
    }

    /// Picks up a rebuilt command list. Only a different list triggers a
    /// refilter.
    pub fn sync(&mut self, source: &Arc<[PaletteCommand]>) {
        if !Arc::ptr_eq(&self.source, source) {
            self.source = Arc::clone(source);
            self.refilter();
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.matches = filter_commands(&self.source, &self.query);
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.matches.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PaletteCommand> {
        self.matches
            .get(self.selected_index)
            .and_then(|&i| self.source.get(i))
    }

    #[must_use]
    pub fn selected_action(&self) -> Option<Action> {
        self.selected().map(|c| c.action.clone())
    }

    pub fn visible(&self) -> impl Iterator<Item = &PaletteCommand> {
        self.matches.iter().filter_map(|&i| self.source.get(i))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::build_commands;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_open_shows_everything() {
        let commands = build_commands(false);
        let state = CommandPaletteState::open(commands.clone());
        assert_eq!(state.matches.len(), commands.len());
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected().unwrap().title, "Run Query");
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = CommandPaletteState::open(build_commands(false));
        state.select_prev();
        assert_eq!(state.selected_index, 0);
        for _ in 0..50 {
            state.select_next();
        }
        assert_eq!(state.selected_index, state.matches.len() - 1);
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut state = CommandPaletteState::open(build_commands(false));
        state.select_next();
        state.select_next();
        state.push_char('e');
        assert_eq!(state.selected_index, 0);
        state.select_next();
        state.pop_char();
        assert_eq!(state.selected_index, 0);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_empty_matches_have_no_selection() {
        let mut state = CommandPaletteState::open(build_commands(false));
        for c in "zzz".chars() {
            state.push_char(c);
        }
        assert!(state.is_empty());
        state.select_next();
        state.select_prev();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_action().is_none());
    }

    #[test]
    fn test_sync_only_refilters_on_new_list() {
        let commands = build_commands(false);
        let mut state = CommandPaletteState::open(commands.clone());
        state.select_next();
        state.sync(&commands);
        assert_eq!(state.selected_index, 1);

        let rebuilt = build_commands(true);
        state.sync(&rebuilt);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.matches.len(), rebuilt.len());
    }

    #[test]
    fn test_selected_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = CommandPaletteState::open(build_commands(false));
        let alphabet = ['a', 'e', 'r', 'x', 'q', 'u'];
        for _ in 0..2000 {
            match rng.gen_range(0..4) {
                0 => state.select_next(),
                1 => state.select_prev(),
                2 => state.push_char(alphabet[rng.gen_range(0..alphabet.len())]),
                _ => state.pop_char(),
            }
            if state.matches.is_empty() {
                assert_eq!(state.selected_index, 0);
            } else {
                assert!(state.selected_index < state.matches.len());
            }
        }
    }
}
