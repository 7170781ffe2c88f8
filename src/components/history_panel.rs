use crate::domain::history::HistoryLog;
use crate::theme::Theme;
use chrono::Local;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

const PREVIEW_CHARS: usize = 100;

/// First `PREVIEW_CHARS` characters on a single line, with `...` when cut.
pub fn preview_query(query: &str) -> String {
    let flat: String = query
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

pub struct HistoryPanel<'a> {
    pub history: &'a HistoryLog,
    pub selected: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" QUERY HISTORY ", theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", theme.footer_segment_key),
                Span::raw(": load "),
                Span::styled("c", theme.footer_segment_key),
                Span::raw(": clear "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            })
            .style(theme.modal);

        if self.history.is_empty() {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No queries run yet", theme.dimmed)),
            ])
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .history
            .entries()
            .iter()
            .map(|entry| {
                let when = entry
                    .timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string();
                let preview: String = preview_query(&entry.query);
                let shown: String = preview.chars().take(inner_width.max(1)).collect();
                ListItem::new(vec![
                    Line::from(Span::styled(when, theme.timestamp)),
                    Line::from(Span::styled(shown, theme.list_item)),
                    Line::from(""),
                ])
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.selected));
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.list_selected);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
