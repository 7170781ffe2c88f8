use crate::app::command::Command;
use crate::app::state::toast::ToastId;
use crate::domain::{error::SessionError, models::QueryOutcome};
use crossterm::event::KeyEvent;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Command Palette ---
    OpenCommandPalette,          // Ctrl+K
    CloseCommandPalette,         // Esc while the palette is open
    CommandPaletteNext,          // Down
    CommandPalettePrev,          // Up
    CommandPaletteSelect,        // Enter: run the highlighted command
    CommandPaletteInput(KeyEvent), // Typing into the search field

    // --- Session ---
    SelectSample(String),
    NextSample,
    PrevSample,
    EditorInput(KeyEvent), // Keys that reach the query editor
    RunQuery,
    ExportResults,
    ToggleDarkMode,

    // --- History Panel ---
    ToggleHistory,
    HistoryNext,
    HistoryPrev,
    SelectHistoryEntry(usize),
    ClearHistory,

    // --- Query Builder ---
    ToggleBuilder,
    BuilderNextField,
    BuilderPrevField,
    BuilderInput(KeyEvent),
    GenerateQuery,

    // --- Overlays ---
    ToggleHelp,
    CancelMode,
    DismissToast,

    // --- Async Results ---
    QueryCompleted(Result<QueryOutcome, SessionError>),
    ExportCompleted(Result<PathBuf, SessionError>),
    ToastExpired(ToastId),
}

impl Action {
    /// Resolves the name used in `[keys]` config overrides. Only actions
    /// without a payload can be bound this way.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "Quit" => Action::Quit,
            "OpenCommandPalette" => Action::OpenCommandPalette,
            "NextSample" => Action::NextSample,
            "PrevSample" => Action::PrevSample,
            "RunQuery" => Action::RunQuery,
            "ExportResults" => Action::ExportResults,
            "ToggleDarkMode" => Action::ToggleDarkMode,
            "ToggleHistory" => Action::ToggleHistory,
            "ClearHistory" => Action::ClearHistory,
            "ToggleBuilder" => Action::ToggleBuilder,
            "ToggleHelp" => Action::ToggleHelp,
            "CancelMode" => Action::CancelMode,
            "DismissToast" => Action::DismissToast,
            _ => return None,
        };
        Some(action)
    }
}
