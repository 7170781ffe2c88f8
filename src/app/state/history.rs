/// Cursor into the history slide-out. Clamped against the log length by the
/// caller, since the log lives in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryPanelState {
    pub selected: usize,
}

impl HistoryPanelState {
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut panel = HistoryPanelState::default();
        panel.select_next(0);
        assert_eq!(panel.selected, 0);
        panel.select_next(3);
        panel.select_next(3);
        panel.select_next(3);
        assert_eq!(panel.selected, 2);
        panel.clamp(1);
        assert_eq!(panel.selected, 0);
        panel.select_prev();
        assert_eq!(panel.selected, 0);
    }
}
