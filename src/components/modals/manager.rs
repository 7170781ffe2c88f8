use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::help::HelpModal;
use super::helpers::dim_area;

/// Draws whichever overlay the current mode calls for on top of the frame.
pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        if matches!(self.app_state.mode, AppMode::Help | AppMode::CommandPalette) {
            dim_area(buf, area);
        }

        // --- Modals ---
        if self.app_state.mode == AppMode::Help {
            HelpModal { theme: self.theme }.render(area, buf);
        }

        // --- Command Palette ---
        if let (AppMode::CommandPalette, Some(cp)) =
            (self.app_state.mode, &self.app_state.command_palette)
        {
            CommandPaletteModal {
                theme: self.theme,
                state: cp,
            }
            .render(area, buf);
        }
    }
}
