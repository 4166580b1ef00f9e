use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_login(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.leave_admin(),
            KeyCode::Enter => self.submit_login(),
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    /// Login is a one-at-a-time state machine: an empty candidate fails
    /// locally, and a submit while one is outstanding is a no-op.
    pub(in crate::tui) fn submit_login(&mut self) {
        if self.login_rx.is_some() {
            debug!("login already submitting");
            return;
        }
        let candidate = self.field_value(0);
        if candidate.is_empty() {
            self.validation_message = Some("Enter admin token.".to_string());
            return;
        }
        self.validation_message = None;
        self.start_login(candidate);
    }
}
