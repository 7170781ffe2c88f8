use crate::app::state::CommandPaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget,
    },
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub const NO_MATCHES: &str = "No matching commands found";

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 40, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", self.theme.footer_segment_key),
                Span::raw(" navigate "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(" run "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.modal);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner_area);

        // Query, with a placeholder while empty
        let query_line = if self.state.query.is_empty() {
            Line::from(vec![
                Span::styled(" > ", self.theme.footer_segment_key),
                Span::styled("Type a command or search...", self.theme.dimmed),
            ])
        } else {
            Line::from(vec![
                Span::styled(" > ", self.theme.footer_segment_key),
                Span::styled(self.state.query.as_str(), self.theme.footer_segment_val),
                Span::styled(
                    "_",
                    self.theme
                        .footer_segment_val
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ])
        };
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        if self.state.is_empty() {
            let no_results = Line::from(Span::styled(
                format!("  {NO_MATCHES}"),
                self.theme.dimmed,
            ));
            buf.set_line(layout[2].x, layout[2].y + 1, &no_results, layout[2].width);
            return;
        }

        let width = layout[2].width as usize;
        let items: Vec<ListItem> = self
            .state
            .visible()
            .enumerate()
            .map(|(i, cmd)| {
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };

                let left = format!("{prefix}{} {}", cmd.icon, cmd.title);
                let shortcut = cmd.shortcut.unwrap_or_default();
                let gap = width
                    .saturating_sub(left.chars().count() + shortcut.chars().count() + 1)
                    .max(1);

                ListItem::new(Line::from(vec![
                    Span::styled(left, style),
                    Span::styled(" ".repeat(gap), style),
                    Span::styled(shortcut, self.theme.shortcut),
                ]))
            })
            .collect();

        let mut list_state =
            ListState::default().with_selected(Some(self.state.selected_index));
        let list = List::new(items).highlight_style(self.theme.list_selected);
        StatefulWidget::render(list, layout[2], buf, &mut list_state);
    }
}
