mod groups;
mod types;

use crate::app::state::{AppState, ToastKind};
use crate::theme::{glyphs, Theme};
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if state.session.is_running() {
            Span::styled(
                format!("  {} RUNNING  ", glyphs::spinner_frame(state.frame_count)),
                theme.status_info,
            )
        } else if let Some(toast) = state.session.toasts().latest() {
            let style = match toast.kind {
                ToastKind::Success => theme.status_success,
                ToastKind::Error => theme.status_error,
                ToastKind::Warning => theme.status_warn,
                ToastKind::Info => theme.status_info,
            };
            Span::styled(format!("  {} {}  ", toast.kind.icon(), toast.kind.label()), style)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let history_len = state.session.history().len();
        spans.push(Span::styled(
            format!(" {history_len} in history "),
            theme.header_item,
        ));
        spans.push(Span::raw("  "));

        let available_width = area.width.saturating_sub(4); // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };

            // Check if we can fit at least the first item of the group
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width as usize {
                break;
            }

            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                current_width += group_label.width();
                spans.push(group_label);
            }

            for item in group.items {
                let key_span = Span::styled(
                    format!(" {} ", item.key),
                    if item.highlighted {
                        theme.header_active
                    } else {
                        theme.footer_segment_key
                    },
                );
                let desc_span = Span::styled(format!(" {} ", item.desc), theme.footer_segment_val);

                let item_width = key_span.width() + desc_span.width();
                if current_width + item_width + 1 > available_width as usize {
                    break;
                }

                spans.push(key_span);
                spans.push(desc_span);
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
