use super::command::Command;
use super::persistence;
use super::state::toast::{ToastId, ToastKind, ToastQueue};
use crate::domain::{
    catalog::SampleCatalog,
    csv::{to_csv, EXPORT_FILENAME, EXPORT_MIME_TYPE},
    error::SessionError,
    history::HistoryLog,
    models::{HistoryEntry, QueryOutcome, ResultSet},
    store::KeyValueStore,
};
use crate::infrastructure::file_store::MemoryStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

pub const MSG_RUN_OK: &str = "Query executed successfully!";
pub const MSG_RUN_FAILED: &str = "Failed to execute query. Please try again.";
pub const MSG_HISTORY_LOADED: &str = "Query loaded from history";
pub const MSG_HISTORY_CLEARED: &str = "Query history cleared";
pub const MSG_EXPORT_OK: &str = "Results exported successfully!";
pub const MSG_EXPORT_FAILED: &str = "Failed to export results. Please try again.";
pub const MSG_QUERY_GENERATED: &str = "Query generated successfully";

/// Owns the query text, the displayed result, the history log and the toast
/// queue. Every mutation that users can observe goes through here.
///
/// Operations that need the runtime return a [`Command`]; the reducer passes
/// it on untouched.
#[derive(Clone)]
pub struct Session {
    catalog: Arc<SampleCatalog>,
    store: Arc<dyn KeyValueStore>,
    selected_sample: String,
    query: String,
    result: ResultSet,
    history: HistoryLog,
    dark_mode: bool,
    is_running: bool,
    toasts: ToastQueue,
    toast_duration: Duration,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("selected_sample", &self.selected_sample)
            .field("query", &self.query)
            .field("rows", &self.result.row_count())
            .field("history", &self.history.len())
            .field("dark_mode", &self.dark_mode)
            .field("is_running", &self.is_running)
            .field("toasts", &self.toasts.len())
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Arc::new(SampleCatalog::builtin()),
            Arc::new(MemoryStore::default()),
            DEFAULT_TOAST_DURATION,
        )
    }
}

impl Session {
    /// Loads the persisted preference and history from `store`, then selects
    /// the first sample of the catalog.
    pub fn new(
        catalog: Arc<SampleCatalog>,
        store: Arc<dyn KeyValueStore>,
        toast_duration: Duration,
    ) -> Self {
        let dark_mode = persistence::load_dark_mode(store.as_ref());
        let history = persistence::load_history(store.as_ref());
        let (selected_sample, query, result) = catalog
            .first()
            .map(|s| (s.name.clone(), s.query.clone(), s.result.clone()))
            .unwrap_or_default();
        tracing::info!(
            history = history.len(),
            dark_mode,
            samples = catalog.len(),
            "session loaded"
        );
        Self {
            catalog,
            store,
            selected_sample,
            query,
            result,
            history,
            dark_mode,
            is_running: false,
            toasts: ToastQueue::default(),
            toast_duration,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn catalog(&self) -> &SampleCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_sample(&self) -> &str {
        &self.selected_sample
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn result(&self) -> &ResultSet {
        &self.result
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    // --- Samples & editing ---

    /// Swaps in the sample's query and result. Returns false for unknown names.
    pub fn select_sample(&mut self, name: &str) -> bool {
        let Some(sample) = self.catalog.get(name) else {
            tracing::debug!(name, "ignoring unknown sample");
            return false;
        };
        self.selected_sample = sample.name.clone();
        self.query = sample.query.clone();
        self.result = sample.result.clone();
        true
    }

    pub fn next_sample(&mut self) -> bool {
        let Some(name) = self
            .catalog
            .next_after(&self.selected_sample)
            .map(|s| s.name.clone())
        else {
            return false;
        };
        self.select_sample(&name)
    }

    pub fn prev_sample(&mut self) -> bool {
        let Some(name) = self
            .catalog
            .prev_before(&self.selected_sample)
            .map(|s| s.name.clone())
        else {
            return false;
        };
        self.select_sample(&name)
    }

    pub fn edit_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    // --- Running ---

    /// Starts a run unless one is already in flight. The snapshot taken here
    /// is what ends up in the history.
    pub fn begin_run(&mut self) -> Option<Command> {
        if self.is_running {
            tracing::debug!("run already in flight, ignoring trigger");
            return None;
        }
        self.is_running = true;
        Some(Command::RunQuery {
            sample: self.selected_sample.clone(),
            query: self.query.clone(),
        })
    }

    pub fn complete_run(&mut self, outcome: Result<QueryOutcome, SessionError>) -> Command {
        self.is_running = false;
        match outcome {
            Ok(QueryOutcome { query, result }) => {
                self.result = result;
                if let Some(evicted) = self.history.push(HistoryEntry::new(query)) {
                    tracing::debug!(timestamp = %evicted.timestamp, "history full, evicted oldest");
                }
                persistence::save_history(self.store.as_ref(), &self.history);
                self.notify(MSG_RUN_OK, ToastKind::Success)
            }
            Err(e) => {
                tracing::warn!(error = %e, "query run failed");
                self.notify(MSG_RUN_FAILED, ToastKind::Error)
            }
        }
    }

    // --- History ---

    /// Copies the entry's text into the editor buffer. The result and the log
    /// are left alone.
    pub fn select_from_history(&mut self, index: usize) -> Option<Command> {
        let query = self.history.get(index)?.query.clone();
        self.query = query;
        Some(self.notify(MSG_HISTORY_LOADED, ToastKind::Info))
    }

    pub fn clear_history(&mut self) -> Command {
        self.history.clear();
        persistence::save_history(self.store.as_ref(), &self.history);
        self.notify(MSG_HISTORY_CLEARED, ToastKind::Info)
    }

    // --- Export ---

    #[must_use]
    pub fn export_current_result(&self) -> Command {
        Command::Export {
            filename: EXPORT_FILENAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            content: to_csv(&self.result),
        }
    }

    pub fn complete_export(&mut self, outcome: Result<PathBuf, SessionError>) -> Command {
        match outcome {
            Ok(path) => {
                tracing::info!(path = %path.display(), "results exported");
                self.notify(MSG_EXPORT_OK, ToastKind::Success)
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.notify(MSG_EXPORT_FAILED, ToastKind::Error)
            }
        }
    }

    // --- Preferences & builder ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        persistence::save_dark_mode(self.store.as_ref(), self.dark_mode);
    }

    pub fn apply_generated_query(&mut self, query: String) -> Command {
        self.query = query;
        self.notify(MSG_QUERY_GENERATED, ToastKind::Success)
    }

    // --- Toasts ---

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> Command {
        let id = self.toasts.push(message, kind, self.toast_duration);
        Command::ScheduleToastExpiry {
            id,
            duration: self.toast_duration,
        }
    }

    /// Removes the newest toast and asks the runtime to drop its timer.
    pub fn dismiss_latest_toast(&mut self) -> Option<Command> {
        let id = self.toasts.latest()?.id;
        self.toasts.remove(id);
        Some(Command::CancelToastExpiry(id))
    }

    pub fn expire_toast(&mut self, id: ToastId) -> bool {
        self.toasts.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::HISTORY_CAPACITY;
    use crate::domain::models::CellValue;

    fn session_with(store: Arc<dyn KeyValueStore>) -> Session {
        Session::new(Arc::new(SampleCatalog::builtin()), store, DEFAULT_TOAST_DURATION)
    }

    fn run_ok(session: &mut Session) -> Command {
        let Some(Command::RunQuery { sample, query }) = session.begin_run() else {
            panic!("expected a run command");
        };
        let result = session.catalog().get(&sample).unwrap().result.clone();
        session.complete_run(Ok(QueryOutcome { query, result }))
    }

    #[test]
    fn test_new_session_selects_first_sample() {
        let session = Session::default();
        assert_eq!(session.selected_sample(), "Select All Users");
        assert_eq!(session.query(), "SELECT * FROM users;");
        assert_eq!(session.result().row_count(), 4);
        assert!(session.history().is_empty());
        assert!(!session.dark_mode());
    }

    #[test]
    fn test_select_sample_does_not_touch_history_or_toasts() {
        let mut session = Session::default();
        assert!(session.select_sample("User Orders"));
        assert_eq!(session.result().columns, vec!["name", "order_id", "total"]);
        assert!(session.history().is_empty());
        assert!(session.toasts().is_empty());
        assert!(!session.select_sample("Nope"));
        assert_eq!(session.selected_sample(), "User Orders");
    }

    #[test]
    fn test_edit_query_leaves_result() {
        let mut session = Session::default();
        let before = session.result().clone();
        session.edit_query("SELECT 42;");
        assert_eq!(session.query(), "SELECT 42;");
        assert_eq!(session.result(), &before);
    }

    #[test]
    fn test_successful_run_adds_one_entry_and_one_success_toast() {
        let mut session = Session::default();
        session.select_sample("Product Analytics");
        session.edit_query("SELECT 'edited';");

        let cmd = run_ok(&mut session);
        assert!(matches!(cmd, Command::ScheduleToastExpiry { .. }));
        assert!(!session.is_running());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().get(0).unwrap().query, "SELECT 'edited';");
        assert_eq!(session.result().rows[0][1], CellValue::Int(150));
        assert_eq!(session.toasts().len(), 1);
        assert_eq!(session.toasts().count_of(ToastKind::Success), 1);
        assert_eq!(session.toasts().latest().unwrap().message, MSG_RUN_OK);
    }

    #[test]
    fn test_failed_run_adds_nothing_and_one_error_toast() {
        let mut session = Session::default();
        let before = session.result().clone();
        session.begin_run().unwrap();
        session.complete_run(Err(SessionError::Execution("boom".into())));

        assert!(!session.is_running());
        assert!(session.history().is_empty());
        assert_eq!(session.result(), &before);
        assert_eq!(session.toasts().len(), 1);
        assert_eq!(session.toasts().count_of(ToastKind::Error), 1);
        assert_eq!(session.toasts().latest().unwrap().message, MSG_RUN_FAILED);
    }

    #[test]
    fn test_run_is_not_reentrant() {
        let mut session = Session::default();
        assert!(session.begin_run().is_some());
        assert!(session.begin_run().is_none());
        assert!(session.is_running());
    }

    #[test]
    fn test_history_is_capped_and_persisted() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let mut session = session_with(store.clone());
        for i in 0..(HISTORY_CAPACITY + 5) {
            session.edit_query(format!("SELECT {i};"));
            run_ok(&mut session);
            assert!(session.history().len() <= HISTORY_CAPACITY);
        }
        assert_eq!(session.history().len(), HISTORY_CAPACITY);
        assert_eq!(session.history().get(0).unwrap().query, "SELECT 24;");
        assert_eq!(
            session.history().get(HISTORY_CAPACITY - 1).unwrap().query,
            "SELECT 5;"
        );

        let reloaded = session_with(store);
        assert_eq!(reloaded.history(), session.history());
    }

    #[test]
    fn test_select_from_history_round_trip() {
        let mut session = Session::default();
        session.edit_query("SELECT 'old';");
        run_ok(&mut session);
        session.select_sample("User Orders");
        let result_before = session.result().clone();
        let history_before = session.history().clone();

        assert!(session.select_from_history(0).is_some());
        assert_eq!(session.query(), "SELECT 'old';");
        assert_eq!(session.result(), &result_before);
        assert_eq!(session.history(), &history_before);
        assert_eq!(session.toasts().latest().unwrap().kind, ToastKind::Info);

        assert!(session.select_from_history(99).is_none());
    }

    #[test]
    fn test_clear_history_always_empties_with_one_info_toast() {
        let mut session = Session::default();
        session.clear_history();
        assert!(session.history().is_empty());
        assert_eq!(session.toasts().count_of(ToastKind::Info), 1);

        run_ok(&mut session);
        run_ok(&mut session);
        session.clear_history();
        assert!(session.history().is_empty());
        assert_eq!(session.toasts().count_of(ToastKind::Info), 2);
        assert_eq!(session.toasts().latest().unwrap().message, MSG_HISTORY_CLEARED);
    }

    #[test]
    fn test_export_command_carries_csv() {
        let session = Session::default();
        let Command::Export {
            filename,
            mime_type,
            content,
        } = session.export_current_result()
        else {
            panic!("expected an export command");
        };
        assert_eq!(filename, "query_results.csv");
        assert_eq!(mime_type, "text/csv");
        assert!(content.starts_with("id,name,email,created_at\n1,Rushi Trivedi,"));
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_export_completion_toasts() {
        let mut session = Session::default();
        session.complete_export(Ok(PathBuf::from("query_results.csv")));
        session.complete_export(Err(SessionError::Export("disk full".into())));
        assert_eq!(session.toasts().count_of(ToastKind::Success), 1);
        assert_eq!(session.toasts().count_of(ToastKind::Error), 1);
        assert_eq!(session.toasts().latest().unwrap().message, MSG_EXPORT_FAILED);
    }

    #[test]
    fn test_dark_mode_is_persisted() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
        let mut session = session_with(store.clone());
        session.toggle_dark_mode();
        assert!(session.dark_mode());
        assert!(session_with(store).dark_mode());
    }

    #[test]
    fn test_dismiss_and_expire() {
        let mut session = Session::default();
        assert!(session.dismiss_latest_toast().is_none());

        let Command::ScheduleToastExpiry { id: first, .. } = session.notify("one", ToastKind::Info)
        else {
            panic!("expected a schedule command");
        };
        session.notify("two", ToastKind::Warning);

        let Some(Command::CancelToastExpiry(dismissed)) = session.dismiss_latest_toast() else {
            panic!("expected a cancel command");
        };
        assert_ne!(dismissed, first);
        assert!(session.expire_toast(first));
        assert!(!session.expire_toast(first));
        assert!(session.toasts().is_empty());
    }

    #[test]
    fn test_sample_cycling() {
        let mut session = Session::default();
        session.next_sample();
        assert_eq!(session.selected_sample(), "User Orders");
        session.prev_sample();
        session.prev_sample();
        assert_eq!(session.selected_sample(), "Product Analytics");
    }
}
