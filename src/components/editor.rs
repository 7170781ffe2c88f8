use crate::app::state::AppState;
use crate::theme::glyphs;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Sample selector above the query text.
pub struct EditorPanel<'a> {
    pub state: &'a AppState<'a>,
    pub focused: bool,
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.state.theme;
        let (border, title_style) = if self.focused {
            (theme.border_focus, theme.header_active)
        } else {
            (theme.border, theme.header_item)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" QUERY EDITOR ", title_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("^R", theme.footer_segment_key),
                Span::raw(": run "),
                Span::styled("^N/^P", theme.footer_segment_key),
                Span::raw(": sample "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Sample selector
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Text
            ])
            .split(inner);

        let session = &self.state.session;
        let mut selector = vec![Span::styled(" Sample: ", theme.dimmed)];
        for name in session.catalog().names() {
            if name == session.selected_sample() {
                selector.push(Span::styled(
                    format!("{} {name} ", glyphs::CURSOR),
                    theme.sample_active,
                ));
            } else {
                selector.push(Span::styled(format!("{} {name} ", glyphs::DOT), theme.dimmed));
            }
        }
        buf.set_line(layout[0].x, layout[0].y, &Line::from(selector), layout[0].width);

        Widget::render(&self.state.editor, layout[2], buf);
    }
}
