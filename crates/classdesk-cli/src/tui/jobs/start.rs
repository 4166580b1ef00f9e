use super::*;

impl TuiApp {
    pub(in crate::tui) fn start_guard_check(&mut self) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.guard_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.check());
        });
    }

    pub(in crate::tui) fn start_login(&mut self, candidate: String) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.login_rx = Some(rx);
        self.pending_token = Some(candidate.clone());
        info!("validating admin token");
        thread::spawn(move || {
            let _ = tx.send(client.validate_token(&candidate));
        });
    }

    pub(in crate::tui) fn start_chat_send(&mut self, message: String, student_id: Option<i64>) {
        let client = self.client.clone();
        let role = self.config.role;
        let (tx, rx) = mpsc::channel();
        self.chat_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.chat(&message, role, student_id));
        });
    }

    pub(in crate::tui) fn start_history_fetch(&mut self, student_id: i64) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.history_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.chat_history(student_id));
        });
    }

    pub(in crate::tui) fn start_roster_load(&mut self) {
        if self.roster_rx.is_some() {
            return;
        }
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.roster_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.students());
        });
    }

    pub(in crate::tui) fn start_action<F>(&mut self, context: ActionContext, job: F)
    where
        F: FnOnce(&ApiClient) -> Result<String, ApiError> + Send + 'static,
    {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.action_rx = Some(rx);
        self.action_context = Some(context);
        thread::spawn(move || {
            let _ = tx.send(job(&client));
        });
    }

    pub(in crate::tui) fn start_report_fetch(&mut self, student_id: i64) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.report_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.report(student_id));
        });
    }

    pub(in crate::tui) fn start_summary_fetch(&mut self, student_id: i64) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.summary_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.attendance_summary(student_id));
        });
    }

    pub(in crate::tui) fn start_month_fetch(&mut self, student_id: i64, year: i32, month: u32) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.month_rx = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(client.attendance_month(student_id, year, month));
        });
    }

    pub(in crate::tui) fn start_export(&mut self, student_id: i64, path: PathBuf) {
        let client = self.client.clone();
        let (tx, rx) = mpsc::channel();
        self.export_rx = Some(rx);
        thread::spawn(move || {
            let result = client
                .download_attendance(student_id, &path)
                .map(|_| path);
            let _ = tx.send(result);
        });
    }
}
