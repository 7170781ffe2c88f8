use crate::app::state::{AppMode, AppState};
use crate::components::{
    editor::EditorPanel,
    footer::Footer,
    header::Header,
    history_panel::HistoryPanel,
    modals::{
        helpers::{left_panel, right_panel},
        ModalManager,
    },
    query_builder::QueryBuilderPanel,
    results_table::ResultsTable,
    toasts::ToastStack,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

const SLIDE_OUT_WIDTH: u16 = 40;

pub struct AppLayout {
    pub header: Rect,
    pub editor: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main[1]);

    AppLayout {
        header: main[0],
        editor: body[0],
        results: body[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let session = &app_state.session;
    let layout = get_layout(area);
    f.render_widget(Block::default().style(theme.base), area);

    // --- Header ---
    f.render_widget(
        Header {
            session,
            theme,
            theme_mode: app_state.theme_mode,
        },
        layout.header,
    );

    // --- Editor / Results ---
    f.render_widget(
        EditorPanel {
            state: app_state,
            focused: app_state.mode == AppMode::Normal,
        },
        layout.editor,
    );
    f.render_widget(
        ResultsTable {
            result: session.result(),
            theme,
            is_running: session.is_running(),
            frame_count: app_state.frame_count,
        },
        layout.results,
    );

    // --- Slide-outs ---
    let body = Rect {
        y: layout.editor.y,
        height: layout.editor.height + layout.results.height,
        ..layout.editor
    };
    match app_state.mode {
        AppMode::History => f.render_widget(
            HistoryPanel {
                history: session.history(),
                selected: app_state.history_panel.selected,
                focused: true,
                theme,
            },
            right_panel(SLIDE_OUT_WIDTH, body),
        ),
        AppMode::Builder => f.render_widget(
            QueryBuilderPanel {
                state: &app_state.builder,
                theme,
            },
            left_panel(SLIDE_OUT_WIDTH, body),
        ),
        _ => {}
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    // --- Overlays ---
    f.render_widget(
        ModalManager {
            theme,
            app_state,
        },
        area,
    );
    f.render_widget(
        ToastStack {
            toasts: session.toasts(),
            theme,
        },
        body,
    );
}
