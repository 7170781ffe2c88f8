use crate::app::{
    action::Action,
    features::handler::{handle_command, Services, ToastTimers},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut timers = ToastTimers::default();

    // Toasts raised during startup have no timer yet.
    for toast in app_state.session.toasts().iter() {
        timers.schedule(toast.id, toast.duration, action_tx.clone());
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::ToastExpired(id) = &action {
                timers.fired(*id);
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            // --- 4. Side Effects ---
            if let Some(cmd) = command {
                handle_command(cmd, &services, &action_tx, &mut timers);
            }
        }
    }

    timers.cancel_all();
    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
