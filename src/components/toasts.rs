use crate::app::state::{ToastKind, ToastQueue};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 3;

/// Stacks the newest toasts in the top-right corner, oldest on top.
pub struct ToastStack<'a> {
    pub toasts: &'a ToastQueue,
    pub theme: &'a Theme,
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let capacity = (area.height / TOAST_HEIGHT) as usize;
        if width < 4 || capacity == 0 {
            return;
        }

        let skip = self.toasts.len().saturating_sub(capacity);
        let mut y = area.y;
        for toast in self.toasts.iter().skip(skip) {
            let style = match toast.kind {
                ToastKind::Success => self.theme.status_success,
                ToastKind::Error => self.theme.status_error,
                ToastKind::Warning => self.theme.status_warn,
                ToastKind::Info => self.theme.status_info,
            };
            let rect = Rect::new(area.right() - width, y, width, TOAST_HEIGHT);
            Clear.render(rect, buf);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(self.theme.modal);
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", toast.kind.icon()), style),
                Span::raw(" "),
                Span::styled(toast.message.as_str(), self.theme.list_item),
            ]))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(rect, buf);

            y += TOAST_HEIGHT;
        }
    }
}
