use super::*;

impl TuiApp {
    fn initial_student_id(config: &AppConfig) -> String {
        config
            .student_id
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    pub(super) fn new(
        config_path: PathBuf,
        config: AppConfig,
        client: ApiClient,
        credentials: Arc<dyn CredentialStore>,
        session: SessionHandle,
        log_buffer: LogBuffer,
    ) -> Self {
        let theme = Theme::new(config.dark_mode);
        let student_id_input = Self::initial_student_id(&config);
        Self {
            config_path,
            config,
            client,
            credentials,
            session,
            log_buffer,
            theme,
            view: View::Chat,
            authenticated: false,
            guard: GuardState::default(),
            menu_index: 0,
            attendance_menu_index: 0,
            input_fields: Vec::new(),
            input_index: 0,
            validation_message: None,
            status: None,
            chat_input: String::new(),
            chat_focus: ChatFocus::Message,
            student_id_input,
            chat_log: Vec::new(),
            attendance_status: AttendanceStatus::Present,
            action_context: None,
            students: Vec::new(),
            report: None,
            summary: None,
            month_days: Vec::new(),
            pending_token: None,
            guard_rx: None,
            login_rx: None,
            chat_rx: None,
            history_rx: None,
            roster_rx: None,
            action_rx: None,
            report_rx: None,
            summary_rx: None,
            month_rx: None,
            export_rx: None,
        }
    }

    pub(super) fn on_tick(&mut self) {
        self.process_session_events();
        self.poll_guard_events();
        self.poll_login_events();
        self.poll_chat_events();
        self.poll_history_events();
        self.poll_roster_events();
        self.poll_action_events();
        self.poll_report_events();
        self.poll_summary_events();
        self.poll_month_events();
        self.poll_export_events();
        self.expire_status_at(Instant::now());
    }

    /// Drains the sign-out flag the API client raises on any 401.
    pub(super) fn process_session_events(&mut self) {
        if self.session.take_signed_out() {
            info!("admin session invalidated by backend");
            self.sign_out_silently();
        }
    }

    /// Collapses the admin area back to the login view without a status
    /// message. Safe to call repeatedly.
    pub(super) fn sign_out_silently(&mut self) {
        self.authenticated = false;
        self.guard.reset();
        self.drop_admin_jobs();
        self.status = None;
        if self.view.is_admin() && self.view != View::Login {
            self.view = View::Login;
            self.prepare_login_form();
        }
    }

    pub(super) fn enter_admin(&mut self) {
        self.validation_message = None;
        if self.authenticated {
            self.enter_dashboard();
            return;
        }
        match self.credentials.get() {
            // A stored credential is trusted optimistically; the session
            // guard re-validates it on dashboard entry.
            Ok(Some(_)) => self.enter_dashboard(),
            Ok(None) => {
                self.view = View::Login;
                self.prepare_login_form();
            }
            Err(err) => {
                warn!(error = %err, "credential store unreadable");
                self.view = View::Login;
                self.prepare_login_form();
            }
        }
    }

    pub(super) fn enter_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.menu_index = 0;
        self.run_session_guard();
    }

    /// One-shot credential check per admin-area entry. An absent
    /// credential redirects immediately without touching the network.
    pub(super) fn run_session_guard(&mut self) {
        if !self.guard.begin() {
            return;
        }
        match self.credentials.get() {
            Ok(Some(_)) => self.start_guard_check(),
            Ok(None) => {
                debug!("no stored credential; redirecting to login");
                self.sign_out_silently();
            }
            Err(err) => {
                warn!(error = %err, "credential store unreadable during guard");
                self.sign_out_silently();
            }
        }
    }

    pub(super) fn leave_admin(&mut self) {
        self.guard.reset();
        self.drop_admin_jobs();
        self.status = None;
        self.validation_message = None;
        self.view = View::Chat;
    }

    pub(super) fn logout(&mut self) {
        if let Err(err) = self.credentials.clear() {
            warn!(error = %err, "failed to clear credential on logout");
        }
        self.authenticated = false;
        self.guard.reset();
        self.drop_admin_jobs();
        self.status = None;
        self.view = View::Chat;
        info!("signed out");
    }

    pub(super) fn drop_admin_jobs(&mut self) {
        // Dropping a receiver discards any response that arrives after the
        // issuing view is gone.
        self.guard_rx = None;
        self.roster_rx = None;
        self.action_rx = None;
        self.report_rx = None;
        self.summary_rx = None;
        self.month_rx = None;
        self.export_rx = None;
        self.action_context = None;
    }

    pub(super) fn prepare_login_form(&mut self) {
        self.input_fields = vec![InputField::with_mask("Admin token")];
        self.input_index = 0;
    }

    pub(super) fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
        self.config.dark_mode = self.theme.dark;
        self.save_config_quietly();
    }

    pub(super) fn save_config_quietly(&mut self) {
        if let Err(err) = self.config.save(&self.config_path) {
            warn!(error = %err, "failed to save config");
        }
    }

    pub(super) fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    pub(super) fn expire_status_at(&mut self, now: Instant) {
        if let Some(status) = &self.status
            && status.expires_at <= now
        {
            self.status = None;
        }
    }

    /// Maps an admin-call failure onto the transient banner. Unauthorized
    /// stays silent; the forced sign-out already says everything.
    pub(super) fn report_api_error(&mut self, context: &str, err: &ApiError) {
        if err.is_unauthorized() {
            return;
        }
        let text = if err.is_network() {
            format!("{context}: server unreachable")
        } else {
            format!("{context}: {err}")
        };
        warn!(context, error = %err, "admin call failed");
        self.set_status(StatusKind::Error, text);
    }

    pub(super) fn field_value(&self, index: usize) -> String {
        self.input_fields
            .get(index)
            .map(|field| field.value.trim().to_string())
            .unwrap_or_default()
    }

    /// Parses a required numeric field; on failure the local validation
    /// message is set and no request leaves the client.
    pub(super) fn required_i64(&mut self, index: usize, label: &str) -> Option<i64> {
        let raw = self.field_value(index);
        if raw.is_empty() {
            self.validation_message = Some(format!("{label} is required."));
            return None;
        }
        match raw.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.validation_message = Some(format!("{label} must be a number."));
                None
            }
        }
    }

    pub(super) fn required_text(&mut self, index: usize, label: &str) -> Option<String> {
        let raw = self.field_value(index);
        if raw.is_empty() {
            self.validation_message = Some(format!("{label} is required."));
            return None;
        }
        Some(raw)
    }

    pub(super) fn chat_student_id(&self) -> Option<i64> {
        self.student_id_input.trim().parse::<i64>().ok()
    }

    pub(super) fn request_chat_history(&mut self) {
        if self.history_rx.is_some() {
            return;
        }
        let Some(student_id) = self.chat_student_id() else {
            self.chat_log
                .push(ChatMessage::bot("Enter a student ID to load history."));
            return;
        };
        self.start_history_fetch(student_id);
    }
}
