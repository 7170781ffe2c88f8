use super::command_palette::{build_commands, PaletteCommand};
use super::keymap::{KeyConfig, KeyMap};
use super::session::Session;
use crate::theme::{Theme, ThemeMode};
use std::sync::Arc;

pub mod builder;
pub mod command_palette;
pub mod history;
pub mod input;
pub mod toast;

// Re-exports
pub use builder::{BuilderField, QueryBuilderState};
pub use command_palette::CommandPaletteState;
pub use history::HistoryPanelState;
pub use input::AppTextArea;
pub use toast::{Toast, ToastId, ToastKind, ToastQueue};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,         // Editing the query
    CommandPalette, // Searching commands
    History,        // History slide-out has focus
    Builder,        // Query builder slide-out has focus
    Help,           // Showing the help overlay
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Source of truth ---
    pub session: Session,

    // --- Editor ---
    pub editor: AppTextArea<'a>,

    // --- Command Palette ---
    pub commands: Arc<[PaletteCommand]>,
    pub command_palette: Option<CommandPaletteState>,

    // --- Slide-outs ---
    pub history_panel: HistoryPanelState,
    pub builder: QueryBuilderState,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme_mode: ThemeMode,
    pub theme: Theme,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(session: Session, keys: &KeyConfig) -> Self {
        let mut state = Self {
            keymap: Arc::new(KeyMap::from_config(keys)),
            session,
            ..Default::default()
        };
        state.apply_theme();
        state.sync_editor();
        state
    }

    /// Reloads the editor buffer from the session after the query text was
    /// replaced from outside the editor.
    pub fn sync_editor(&mut self) {
        self.editor = AppTextArea::from_text(self.session.query());
        self.editor.set_cursor_line_style(self.theme.editor_cursor_line);
    }

    /// Rebuilds everything derived from the dark-mode preference.
    pub fn apply_theme(&mut self) {
        self.theme_mode = ThemeMode::from_dark_mode(self.session.dark_mode());
        self.theme = Theme::for_mode(self.theme_mode);
        self.commands = build_commands(self.session.dark_mode());
        if let Some(palette) = &mut self.command_palette {
            palette.sync(&self.commands);
        }
        self.editor.set_cursor_line_style(self.theme.editor_cursor_line);
    }

    #[must_use]
    pub fn is_palette_open(&self) -> bool {
        self.command_palette.is_some()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let session = Session::default();
        let theme_mode = ThemeMode::from_dark_mode(session.dark_mode());
        let editor = AppTextArea::from_text(session.query());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            commands: build_commands(session.dark_mode()),
            session,
            editor,
            command_palette: None,
            history_panel: HistoryPanelState::default(),
            builder: QueryBuilderState::default(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            frame_count: 0,
        }
    }
}
