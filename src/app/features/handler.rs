use crate::app::{action::Action, command::Command, state::ToastId};
use crate::domain::{
    delivery::FileDelivery, error::SessionError, executor::QueryExecutor, models::QueryOutcome,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// The collaborators commands are executed against.
#[derive(Clone)]
pub struct Services {
    pub executor: Arc<dyn QueryExecutor>,
    pub delivery: Arc<dyn FileDelivery>,
}

/// One fire-once expiry task per visible toast.
#[derive(Debug, Default)]
pub struct ToastTimers {
    handles: HashMap<ToastId, AbortHandle>,
}

impl ToastTimers {
    pub fn schedule(&mut self, id: ToastId, duration: Duration, tx: mpsc::Sender<Action>) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(Action::ToastExpired(id)).await;
        });
        if let Some(previous) = self.handles.insert(id, handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Aborts the timer for `id`. Unknown ids are ignored.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Forgets a timer that already delivered its expiry.
    pub fn fired(&mut self, id: ToastId) {
        self.handles.remove(&id);
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

pub fn handle_command(
    command: Command,
    services: &Services,
    tx: &mpsc::Sender<Action>,
    timers: &mut ToastTimers,
) {
    match command {
        Command::RunQuery { sample, query } => {
            let executor = services.executor.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let snapshot = query.clone();
                let executed =
                    tokio::spawn(async move { executor.execute(&sample, &snapshot).await }).await;
                let outcome = match executed {
                    Ok(Ok(result)) => Ok(QueryOutcome { query, result }),
                    Ok(Err(e)) => Err(SessionError::Execution(format!("{e:#}"))),
                    Err(e) => Err(SessionError::Execution(e.to_string())),
                };
                let _ = tx.send(Action::QueryCompleted(outcome)).await;
            });
        }
        Command::Export {
            filename,
            mime_type,
            content,
        } => {
            let delivery = services.delivery.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let written = tokio::task::spawn_blocking(move || {
                    delivery.deliver(&filename, &mime_type, &content)
                })
                .await;
                let outcome = match written {
                    Ok(Ok(path)) => Ok(path),
                    Ok(Err(e)) => Err(SessionError::Export(format!("{e:#}"))),
                    Err(e) => Err(SessionError::Export(e.to_string())),
                };
                let _ = tx.send(Action::ExportCompleted(outcome)).await;
            });
        }
        Command::ScheduleToastExpiry { id, duration } => {
            timers.schedule(id, duration, tx.clone());
        }
        Command::CancelToastExpiry(id) => {
            timers.cancel(id);
        }
    }
}
