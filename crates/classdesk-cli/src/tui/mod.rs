use crate::logging::LogBuffer;
use crate::theme::Theme;
use anyhow::Context as _;
use classdesk_api::auth::KeyringCredentials;
use classdesk_api::{ApiClient, ApiError};
use classdesk_core::config::{AppConfig, default_config_path};
use classdesk_core::credentials::{CredentialStore, MemoryCredentials};
use classdesk_core::model::{
    AttendanceDay, AttendanceStatus, AttendanceSummary, ChatExchange, ChatMessage, Student,
    StudentReport,
};
use classdesk_core::session::{GuardState, SessionHandle};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug)]
pub enum StartView {
    Chat,
    Admin,
}

const TICK_RATE_MS: u64 = 200;
const STATUS_TTL: Duration = Duration::from_secs(4);
const LOG_PANEL_HEIGHT: u16 = 7;

pub fn run_tui(
    log_buffer: LogBuffer,
    start_view: StartView,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let config_path = default_config_path()?;
    let config = AppConfig::load(&config_path)?;
    let base_url = base_url.or_else(|| config.backend_url()).context(
        "backend URL not configured; run `classdesk config init --base-url <URL>` or pass --base-url",
    )?;
    let credentials: Arc<dyn CredentialStore> = match token {
        Some(token) => Arc::new(MemoryCredentials::with_token(token)),
        None => Arc::new(KeyringCredentials),
    };
    let session = SessionHandle::new();
    let client = ApiClient::new(&base_url, credentials.clone(), session.clone())?;
    let mut app = TuiApp::new(config_path, config, client, credentials, session, log_buffer);
    if matches!(start_view, StartView::Admin) {
        app.enter_admin();
    }

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    info!(start_view = ?start_view, "starting TUI");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut TuiApp,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)?
        {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        app.on_tick();
    }
}

/// Top-level router state. `Chat` is reachable with or without a stored
/// credential; every other view belongs to the admin area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum View {
    Chat,
    Login,
    Dashboard,
    Students,
    StudentAdd,
    StudentEdit,
    StudentRemove,
    Marks,
    AttendanceMenu,
    AttendanceAdd,
    AttendanceSummary,
    AttendanceMonth,
    AttendanceExport,
    Report,
}

impl View {
    fn is_admin(self) -> bool {
        self != View::Chat
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChatFocus {
    Message,
    StudentId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
struct StatusLine {
    text: String,
    kind: StatusKind,
    expires_at: Instant,
}

/// Which admin mutation is in flight; decides where an ack lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActionContext {
    Student,
    Marks,
    Attendance,
}

#[derive(Clone, Debug)]
struct InputField {
    label: &'static str,
    value: String,
    mask: bool,
}

impl InputField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            mask: false,
        }
    }

    fn with_mask(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            mask: true,
        }
    }

    fn display_value(&self) -> String {
        if self.mask {
            "*".repeat(self.value.len())
        } else {
            self.value.clone()
        }
    }

    fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    fn pop(&mut self) {
        self.value.pop();
    }
}

mod app_core;
mod draw;
mod handle;
mod jobs;
#[cfg(test)]
mod tests;

struct TuiApp {
    config_path: PathBuf,
    config: AppConfig,
    client: ApiClient,
    credentials: Arc<dyn CredentialStore>,
    session: SessionHandle,
    log_buffer: LogBuffer,
    theme: Theme,

    view: View,
    authenticated: bool,
    guard: GuardState,
    menu_index: usize,
    attendance_menu_index: usize,
    input_fields: Vec<InputField>,
    input_index: usize,
    validation_message: Option<String>,
    status: Option<StatusLine>,

    chat_input: String,
    chat_focus: ChatFocus,
    student_id_input: String,
    chat_log: Vec<ChatMessage>,

    attendance_status: AttendanceStatus,
    action_context: Option<ActionContext>,
    students: Vec<Student>,
    report: Option<StudentReport>,
    summary: Option<AttendanceSummary>,
    month_days: Vec<AttendanceDay>,
    pending_token: Option<String>,

    guard_rx: Option<mpsc::Receiver<Result<(), ApiError>>>,
    login_rx: Option<mpsc::Receiver<Result<(), ApiError>>>,
    chat_rx: Option<mpsc::Receiver<Result<String, ApiError>>>,
    history_rx: Option<mpsc::Receiver<Result<Vec<ChatExchange>, ApiError>>>,
    roster_rx: Option<mpsc::Receiver<Result<Vec<Student>, ApiError>>>,
    action_rx: Option<mpsc::Receiver<Result<String, ApiError>>>,
    report_rx: Option<mpsc::Receiver<Result<StudentReport, ApiError>>>,
    summary_rx: Option<mpsc::Receiver<Result<AttendanceSummary, ApiError>>>,
    month_rx: Option<mpsc::Receiver<Result<Vec<AttendanceDay>, ApiError>>>,
    export_rx: Option<mpsc::Receiver<Result<PathBuf, ApiError>>>,
}
