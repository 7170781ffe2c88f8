use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sqlviz::app::{
    config::AppConfig,
    features::handler::Services,
    r#loop::run_loop,
    session::Session,
    state::{AppState, ToastKind},
};
use sqlviz::domain::catalog::SampleCatalog;
use sqlviz::infrastructure::{
    delivery::DirectoryDelivery, file_store::FileStore, simulated::SimulatedExecutor,
};

const LOG_ENV: &str = "SQLVIZ_LOG";

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file in the data directory; the terminal belongs to the UI.
fn init_tracing(dir: &Path) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::fs::create_dir_all(dir).is_err() {
        tracing_subscriber::registry().with(env_filter).init();
        return None;
    }

    let appender = rolling::never(dir, "sqlviz.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on bad input happens before the terminal is
    // switched to raw mode.
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let data_dir = config.data_dir();
    let _log_guard = init_tracing(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), "starting sqlviz");

    let catalog = Arc::new(SampleCatalog::builtin());
    let store = Arc::new(FileStore::new(data_dir.clone()));
    let services = Services {
        executor: Arc::new(SimulatedExecutor::new(catalog.clone(), config.run_latency())),
        delivery: Arc::new(DirectoryDelivery::new(config.export_dir())),
    };

    let mut session = Session::new(catalog, store, config.toast_duration());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default config");
        // The loop schedules expiry for toasts that exist before it starts.
        let _ = session.notify(format!("Config ignored: {e}"), ToastKind::Warning);
    }
    let app_state = AppState::new(session, &config.keys);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
