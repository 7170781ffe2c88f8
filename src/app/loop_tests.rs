use super::*;
use crate::app::command::Command;
use crate::domain::{
    delivery::MockFileDelivery, error::SessionError, executor::MockQueryExecutor,
    models::ResultSet,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;

fn services(executor: MockQueryExecutor, delivery: MockFileDelivery) -> Services {
    Services {
        executor: Arc::new(executor),
        delivery: Arc::new(delivery),
    }
}

fn run_command() -> Command {
    Command::RunQuery {
        sample: "Select All Users".to_string(),
        query: "SELECT * FROM users;".to_string(),
    }
}

#[tokio::test]
async fn test_run_query_success_reports_snapshot() {
    let mut executor = MockQueryExecutor::new();
    executor
        .expect_execute()
        .withf(|sample, query| sample == "Select All Users" && query == "SELECT * FROM users;")
        .returning(|_, _| Ok(ResultSet::new(&["id"], vec![])));

    let services = services(executor, MockFileDelivery::new());
    let (tx, mut rx) = mpsc::channel(1);
    let mut timers = ToastTimers::default();

    handle_command(run_command(), &services, &tx, &mut timers);

    match rx.recv().await.unwrap() {
        Action::QueryCompleted(Ok(outcome)) => {
            assert_eq!(outcome.query, "SELECT * FROM users;");
            assert_eq!(outcome.result.columns, vec!["id".to_string()]);
        }
        other => panic!("Expected a successful QueryCompleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_run_query_error_propagation() {
    let mut executor = MockQueryExecutor::new();
    executor
        .expect_execute()
        .returning(|_, _| Err(anyhow::anyhow!("connection refused")));

    let services = services(executor, MockFileDelivery::new());
    let (tx, mut rx) = mpsc::channel(1);
    let mut timers = ToastTimers::default();

    handle_command(run_command(), &services, &tx, &mut timers);

    match rx.recv().await.unwrap() {
        Action::QueryCompleted(Err(SessionError::Execution(msg))) => {
            assert!(msg.contains("connection refused"));
        }
        other => panic!("Expected a failed QueryCompleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_panicking_executor_still_completes_the_run() {
    let mut executor = MockQueryExecutor::new();
    executor
        .expect_execute()
        .returning(|_, _| panic!("executor blew up"));

    let services = services(executor, MockFileDelivery::new());
    let (tx, mut rx) = mpsc::channel(1);
    let mut timers = ToastTimers::default();
    let mut state = AppState::default();

    let command = reducer::update(&mut state, Action::RunQuery).unwrap();
    assert!(state.session.is_running());
    handle_command(command, &services, &tx, &mut timers);

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("run should report back")
        .unwrap();
    assert!(matches!(
        action,
        Action::QueryCompleted(Err(SessionError::Execution(_)))
    ));

    reducer::update(&mut state, action);
    assert!(!state.session.is_running());
    assert_eq!(state.session.toasts().len(), 1);
    assert_eq!(
        state.session.toasts().count_of(crate::app::state::ToastKind::Error),
        1
    );
    assert!(reducer::update(&mut state, Action::RunQuery).is_some());
}

#[tokio::test]
async fn test_export_reports_written_path() {
    let mut delivery = MockFileDelivery::new();
    delivery
        .expect_deliver()
        .withf(|name, mime, content| {
            name == "query_results.csv" && mime == "text/csv" && content.starts_with("id")
        })
        .returning(|name, _, _| Ok(PathBuf::from("/tmp").join(name)));

    let services = services(MockQueryExecutor::new(), delivery);
    let (tx, mut rx) = mpsc::channel(1);
    let mut timers = ToastTimers::default();

    handle_command(
        Command::Export {
            filename: "query_results.csv".to_string(),
            mime_type: "text/csv".to_string(),
            content: "id\n1".to_string(),
        },
        &services,
        &tx,
        &mut timers,
    );

    match rx.recv().await.unwrap() {
        Action::ExportCompleted(Ok(path)) => {
            assert_eq!(path, PathBuf::from("/tmp/query_results.csv"));
        }
        other => panic!("Expected a successful ExportCompleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_export_error_propagation() {
    let mut delivery = MockFileDelivery::new();
    delivery
        .expect_deliver()
        .returning(|_, _, _| Err(anyhow::anyhow!("disk full")));

    let services = services(MockQueryExecutor::new(), delivery);
    let (tx, mut rx) = mpsc::channel(1);
    let mut timers = ToastTimers::default();

    handle_command(
        Command::Export {
            filename: "query_results.csv".to_string(),
            mime_type: "text/csv".to_string(),
            content: String::new(),
        },
        &services,
        &tx,
        &mut timers,
    );

    match rx.recv().await.unwrap() {
        Action::ExportCompleted(Err(SessionError::Export(msg))) => {
            assert!(msg.contains("disk full"));
        }
        other => panic!("Expected a failed ExportCompleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_toast_timer_fires_once() {
    let (tx, mut rx) = mpsc::channel(4);
    let mut timers = ToastTimers::default();

    timers.schedule(7, Duration::from_millis(10), tx.clone());
    assert_eq!(timers.len(), 1);

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timer should fire")
        .unwrap();
    assert_eq!(action, Action::ToastExpired(7));

    timers.fired(7);
    assert!(timers.is_empty());
}

#[tokio::test]
async fn test_cancelled_toast_timer_never_fires() {
    let (tx, mut rx) = mpsc::channel(4);
    let mut timers = ToastTimers::default();

    handle_command(
        Command::ScheduleToastExpiry {
            id: 1,
            duration: Duration::from_millis(30),
        },
        &services(MockQueryExecutor::new(), MockFileDelivery::new()),
        &tx,
        &mut timers,
    );
    assert!(timers.cancel(1));
    assert!(!timers.cancel(1));

    let waited = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
    assert!(waited.is_err(), "cancelled timer delivered {waited:?}");
}

#[tokio::test]
async fn test_rescheduling_replaces_previous_timer() {
    let (tx, mut rx) = mpsc::channel(4);
    let mut timers = ToastTimers::default();

    timers.schedule(3, Duration::from_secs(60), tx.clone());
    timers.schedule(3, Duration::from_millis(10), tx.clone());
    assert_eq!(timers.len(), 1);

    let action = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("replacement timer should fire")
        .unwrap();
    assert_eq!(action, Action::ToastExpired(3));
    timers.cancel_all();
    assert!(timers.is_empty());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut executor = MockQueryExecutor::new();
    executor
        .expect_execute()
        .returning(|_, _| Ok(ResultSet::new(&["id", "name"], vec![])));
    let mut delivery = MockFileDelivery::new();
    delivery
        .expect_deliver()
        .returning(|name, _, _| Ok(PathBuf::from(name)));

    let services = services(executor, delivery);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(5..100);
                    Event::Resize(w, h)
                }
                6..=10 => generate_random_mouse(&mut rng),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, services, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..24) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::Tab,
        9 => KeyCode::BackTab,
        10 => KeyCode::Delete,
        11 => KeyCode::Backspace,
        12 => KeyCode::F(rng.gen_range(1..=5)),
        _ => KeyCode::Char(rng.gen_range(b' '..=b'~') as char),
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.15) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.05) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..3) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    Event::Mouse(MouseEvent {
        kind,
        column: rng.gen_range(0..80),
        row: rng.gen_range(0..24),
        modifiers: KeyModifiers::empty(),
    })
}
