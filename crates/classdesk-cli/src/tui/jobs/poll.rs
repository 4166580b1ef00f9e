use super::*;

impl TuiApp {
    pub(in crate::tui) fn poll_guard_events(&mut self) {
        let Some(rx) = self.guard_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(()) => {
                    self.guard.complete();
                    self.authenticated = true;
                    info!("stored credential verified");
                }
                Err(err) => {
                    // Silent by design: the redirect to login is the message.
                    warn!(error = %err, "session guard rejected stored credential");
                    if let Err(clear_err) = self.credentials.clear() {
                        warn!(error = %clear_err, "failed to clear credential after guard failure");
                    }
                    self.sign_out_silently();
                }
            }
        }
        if !done {
            self.guard_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_login_events(&mut self) {
        let Some(rx) = self.login_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(()) => {
                    let Some(candidate) = self.pending_token.take() else {
                        continue;
                    };
                    match self.credentials.set(&candidate) {
                        Ok(()) => {
                            info!("admin login succeeded");
                            self.authenticated = true;
                            self.validation_message = None;
                            self.enter_dashboard();
                        }
                        Err(err) => {
                            warn!(error = %err, "failed to persist accepted credential");
                            let _ = self.credentials.clear();
                            self.validation_message =
                                Some("Failed to store the admin token.".to_string());
                        }
                    }
                }
                Err(err) => {
                    self.pending_token = None;
                    if let Err(clear_err) = self.credentials.clear() {
                        warn!(error = %clear_err, "failed to clear credential after login failure");
                    }
                    warn!(error = %err, "admin login failed");
                    self.validation_message = Some(match err {
                        ApiError::Unauthorized => "Invalid admin token.".to_string(),
                        ApiError::Network(_) => {
                            "Server unreachable. Is the backend running?".to_string()
                        }
                        other => other.to_string(),
                    });
                }
            }
        }
        if !done {
            self.login_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_chat_events(&mut self) {
        let Some(rx) = self.chat_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(reply) => self.chat_log.push(ChatMessage::bot(reply)),
                Err(err) => {
                    warn!(error = %err, "chat request failed");
                    let text = if err.is_network() {
                        "Server error. Is backend running?".to_string()
                    } else {
                        err.to_string()
                    };
                    self.chat_log.push(ChatMessage::bot(text));
                }
            }
        }
        if !done {
            self.chat_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_history_events(&mut self) {
        let Some(rx) = self.history_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(exchanges) => {
                    if exchanges.is_empty() {
                        self.chat_log
                            .push(ChatMessage::bot("No stored exchanges yet."));
                        continue;
                    }
                    // The backend returns newest first.
                    for exchange in exchanges.iter().rev() {
                        self.chat_log.push(ChatMessage::user(exchange.message.clone()));
                        self.chat_log.push(ChatMessage::bot(exchange.reply.clone()));
                    }
                }
                Err(err) => {
                    warn!(error = %err, "history request failed");
                    self.chat_log
                        .push(ChatMessage::bot("Could not load chat history."));
                }
            }
        }
        if !done {
            self.history_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_roster_events(&mut self) {
        let Some(rx) = self.roster_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(students) => {
                    debug!(count = students.len(), "roster loaded");
                    self.students = students;
                }
                Err(err) => self.report_api_error("Failed to load students", &err),
            }
        }
        if !done {
            self.roster_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_action_events(&mut self) {
        let Some(rx) = self.action_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            let context = self.action_context.take();
            match result {
                Ok(message) => {
                    self.set_status(StatusKind::Success, message);
                    match context {
                        Some(ActionContext::Student) => {
                            if matches!(
                                self.view,
                                View::StudentAdd | View::StudentEdit | View::StudentRemove
                            ) {
                                self.view = View::Students;
                            }
                            self.start_roster_load();
                        }
                        Some(ActionContext::Marks) => {
                            // Keep the student id, ready for the next subject.
                            for field in self.input_fields.iter_mut().skip(1) {
                                field.value.clear();
                            }
                        }
                        Some(ActionContext::Attendance) | None => {}
                    }
                }
                Err(err) => self.report_api_error("Request failed", &err),
            }
        }
        if !done {
            self.action_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_report_events(&mut self) {
        let Some(rx) = self.report_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(report) => {
                    self.report = Some(report);
                    self.set_status(StatusKind::Success, "Report loaded.");
                }
                Err(err) => {
                    self.report = None;
                    self.report_api_error("Failed to load report", &err);
                }
            }
        }
        if !done {
            self.report_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_summary_events(&mut self) {
        let Some(rx) = self.summary_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(summary) => {
                    self.summary = Some(summary);
                    self.set_status(StatusKind::Success, "Summary loaded.");
                }
                Err(err) => {
                    self.summary = None;
                    self.report_api_error("Failed to load summary", &err);
                }
            }
        }
        if !done {
            self.summary_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_month_events(&mut self) {
        let Some(rx) = self.month_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(days) => {
                    self.month_days = days;
                    self.set_status(StatusKind::Success, "Monthly view loaded.");
                }
                Err(err) => {
                    self.month_days.clear();
                    self.report_api_error("Failed to load month", &err);
                }
            }
        }
        if !done {
            self.month_rx = Some(rx);
        }
    }

    pub(in crate::tui) fn poll_export_events(&mut self) {
        let Some(rx) = self.export_rx.take() else {
            return;
        };
        let mut done = false;
        while let Ok(result) = rx.try_recv() {
            done = true;
            match result {
                Ok(path) => {
                    info!(path = %path.display(), "attendance export saved");
                    self.set_status(StatusKind::Success, format!("Saved {}", path.display()));
                }
                Err(err) => self.report_api_error("Export failed", &err),
            }
        }
        if !done {
            self.export_rx = Some(rx);
        }
    }
}
