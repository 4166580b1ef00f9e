use super::*;
use classdesk_api::ADMIN_TOKEN_HEADER;
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(app: &mut TuiApp, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch))).unwrap();
    }
}

fn test_app(base_url: &str, store: Arc<MemoryCredentials>) -> TuiApp {
    let session = SessionHandle::new();
    let credentials: Arc<dyn CredentialStore> = store;
    let client = ApiClient::new(base_url, credentials.clone(), session.clone()).unwrap();
    TuiApp::new(
        std::env::temp_dir().join("classdesk-test-config.json"),
        AppConfig::default(),
        client,
        credentials,
        session,
        LogBuffer::new(50),
    )
}

fn pump_until(app: &mut TuiApp, predicate: impl Fn(&TuiApp) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(3);
    while Instant::now() < deadline {
        app.on_tick();
        if predicate(app) {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn empty_login_submit_never_hits_network() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.enter_admin();
    assert_eq!(app.view, View::Login);

    type_text(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    assert!(app.login_rx.is_none());
    assert_eq!(app.validation_message.as_deref(), Some("Enter admin token."));
}

#[test]
fn second_submit_while_outstanding_is_ignored() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.enter_admin();
    let (_tx, rx) = mpsc::channel();
    app.login_rx = Some(rx);

    type_text(&mut app, "abc123");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    assert!(app.pending_token.is_none());
}

#[test]
fn successful_login_persists_token_and_opens_dashboard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/admin/check")
            .header(ADMIN_TOKEN_HEADER, "abc123");
        then.status(200).json_body(json!({"status": "ok"}));
    });
    let store = Arc::new(MemoryCredentials::new());
    let mut app = test_app(&server.base_url(), store.clone());
    app.enter_admin();

    type_text(&mut app, "abc123");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    assert!(pump_until(&mut app, |app| app.view == View::Dashboard));
    assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));
    assert!(app.authenticated);
    assert!(app.validation_message.is_none());
}

#[test]
fn rejected_login_shows_error_and_stays_on_login() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/check");
        then.status(401)
            .json_body(json!({"detail": "Unauthorized: Invalid admin token"}));
    });
    let store = Arc::new(MemoryCredentials::new());
    let mut app = test_app(&server.base_url(), store.clone());
    app.enter_admin();

    type_text(&mut app, "bad");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    assert!(pump_until(&mut app, |app| app.validation_message.is_some()));
    assert_eq!(app.view, View::Login);
    assert_eq!(
        app.validation_message.as_deref(),
        Some("Invalid admin token.")
    );
    assert_eq!(store.get().unwrap(), None);
    assert!(!app.authenticated);
}

#[test]
fn guard_rejection_silently_forces_login() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/admin/check");
        then.status(401)
            .json_body(json!({"detail": "Unauthorized: Invalid admin token"}));
    });
    let store = Arc::new(MemoryCredentials::with_token("stale"));
    let mut app = test_app(&server.base_url(), store.clone());

    app.enter_admin();
    assert_eq!(app.view, View::Dashboard);

    assert!(pump_until(&mut app, |app| app.view == View::Login));
    assert_eq!(store.get().unwrap(), None);
    assert!(!app.authenticated);
    assert!(app.status.is_none());
    assert!(app.validation_message.is_none());
}

#[test]
fn guard_checks_at_most_once_per_admin_entry() {
    let store = Arc::new(MemoryCredentials::with_token("abc123"));
    let mut app = test_app("http://127.0.0.1:1", store);

    app.enter_admin();
    assert!(app.guard.is_checking());
    assert!(app.guard_rx.is_some());

    // Re-rendering the dashboard within the same entry must not re-check.
    app.guard_rx = None;
    app.enter_dashboard();
    assert!(app.guard_rx.is_none());

    // Leaving and coming back is a fresh mount, so the latch re-arms.
    app.leave_admin();
    app.enter_admin();
    assert!(app.guard_rx.is_some());
}

#[test]
fn absent_credential_redirects_without_network() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.enter_admin();
    assert_eq!(app.view, View::Login);
    assert!(app.guard_rx.is_none());
}

#[test]
fn chat_round_trip_appends_user_then_bot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat").json_body(json!({
            "message": "What is my attendance?",
            "role": "student",
            "student_id": 42
        }));
        then.status(200).json_body(json!({"reply": "85%"}));
    });
    let mut app = test_app(&server.base_url(), Arc::new(MemoryCredentials::new()));

    app.handle_key(key(KeyCode::Tab)).unwrap();
    type_text(&mut app, "42");
    app.handle_key(key(KeyCode::Tab)).unwrap();
    type_text(&mut app, "What is my attendance?");
    app.handle_key(key(KeyCode::Enter)).unwrap();

    assert_eq!(app.chat_log.len(), 1);
    assert_eq!(app.chat_log[0], ChatMessage::user("What is my attendance?"));

    assert!(pump_until(&mut app, |app| app.chat_log.len() == 2));
    assert_eq!(app.chat_log[1], ChatMessage::bot("85%"));
}

#[test]
fn empty_chat_message_is_not_sent() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    type_text(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter)).unwrap();
    assert!(app.chat_log.is_empty());
    assert!(app.chat_rx.is_none());
}

#[test]
fn logout_twice_leaves_the_same_state() {
    let store = Arc::new(MemoryCredentials::with_token("abc123"));
    let mut app = test_app("http://127.0.0.1:1", store.clone());
    app.authenticated = true;
    app.view = View::Dashboard;

    app.logout();
    assert_eq!(app.view, View::Chat);
    assert!(!app.authenticated);
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(app.guard, GuardState::Unchecked);

    app.logout();
    assert_eq!(app.view, View::Chat);
    assert!(!app.authenticated);
    assert_eq!(store.get().unwrap(), None);
    assert_eq!(app.guard, GuardState::Unchecked);
}

#[test]
fn forced_sign_out_collapses_admin_views_once() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.authenticated = true;
    app.view = View::Students;

    app.session.force_sign_out();
    app.on_tick();
    assert_eq!(app.view, View::Login);
    assert!(!app.authenticated);

    // A repeated signal leaves the same end state.
    app.session.force_sign_out();
    app.on_tick();
    assert_eq!(app.view, View::Login);
    assert!(!app.authenticated);
}

#[test]
fn late_response_after_leaving_view_is_discarded() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.view = View::Students;
    let (tx, rx) = mpsc::channel();
    app.roster_rx = Some(rx);

    app.leave_admin();
    let _ = tx.send(Ok(vec![Student {
        id: 1,
        name: "Asha".to_string(),
    }]));
    app.on_tick();

    assert!(app.students.is_empty());
    assert!(app.roster_rx.is_none());
}

#[test]
fn status_banner_expires_after_ttl() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    app.set_status(StatusKind::Success, "Saved");
    assert!(app.status.is_some());

    app.expire_status_at(Instant::now() + STATUS_TTL + Duration::from_secs(1));
    assert!(app.status.is_none());
}

#[test]
fn dark_mode_toggle_flips_theme_and_config() {
    let mut app = test_app("http://127.0.0.1:1", Arc::new(MemoryCredentials::new()));
    assert!(!app.theme.dark);
    app.toggle_dark_mode();
    assert!(app.theme.dark);
    assert!(app.config.dark_mode);
}
