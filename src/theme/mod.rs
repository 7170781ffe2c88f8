use ratatui::style::{Modifier, Style};

pub mod catppuccin;
pub mod glyphs;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub base: Style,
    pub modal: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_success: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub editor: Style,
    pub editor_cursor_line: Style,
    pub sample_active: Style,

    pub table_header: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub number: Style,

    pub timestamp: Style,
    pub shortcut: Style,
    pub input_active: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            ThemeMode::Light => Self::from_palette(&catppuccin::CATPPUCCIN_LATTE),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),
            base: Style::default().bg(p.base).fg(p.text),
            modal: Style::default().bg(p.mantle).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_success: Style::default()
                .bg(p.teal)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            editor: Style::default().fg(p.text),
            editor_cursor_line: Style::default().bg(dim_color(p.blue, 0.25)),
            sample_active: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(p.blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            table_row: Style::default().fg(p.text),
            table_row_alt: Style::default().fg(p.text).bg(p.mantle),
            number: Style::default().fg(p.peach),

            timestamp: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            shortcut: Style::default().fg(p.overlay1),
            input_active: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),

            highlight: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}
