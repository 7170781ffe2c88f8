use crate::app::session::Session;
use crate::theme::{glyphs, Theme, ThemeMode};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub session: &'a Session,
    pub theme: &'a Theme,
    pub theme_mode: ThemeMode,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let sample_bg = self.theme.header_active.bg.unwrap_or(Color::Reset);
        let mode_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_sample = Style::default().fg(logo_bg).bg(sample_bg);
        let sep_sample_mode = Style::default().fg(sample_bg).bg(mode_bg);
        let sep_mode_base = Style::default().fg(mode_bg).bg(base_bg);

        let left = vec![
            Span::styled(format!(" {} SQLVIZ ", glyphs::DATABASE), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_sample),
            Span::styled(
                format!(" {} ", self.session.selected_sample()),
                self.theme.header_active,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_sample_mode),
            Span::styled(
                format!(" {} mode ", self.theme_mode.label()),
                self.theme.header_item,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_mode_base),
        ];

        let hint = " Ctrl+K for commands ";
        let used: usize = left.iter().map(Span::width).sum();
        let padding = (area.width as usize).saturating_sub(used + hint.len());

        let mut spans = left;
        spans.push(Span::styled(" ".repeat(padding), self.theme.header));
        spans.push(Span::styled(hint, self.theme.shortcut));

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
