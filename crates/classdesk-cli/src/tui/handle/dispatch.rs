use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') if self.view == View::Chat => {
                    self.enter_admin();
                    return Ok(false);
                }
                KeyCode::Char('d') => {
                    self.toggle_dark_mode();
                    return Ok(false);
                }
                KeyCode::Char('r') if self.view == View::Chat => {
                    self.request_chat_history();
                    return Ok(false);
                }
                _ => {}
            }
        }
        match self.view {
            View::Chat => self.handle_chat(key),
            View::Login => self.handle_login(key),
            View::Dashboard => self.handle_dashboard(key),
            View::Students => self.handle_students(key),
            View::StudentAdd | View::StudentEdit | View::StudentRemove => {
                self.handle_student_form(key)
            }
            View::Marks => self.handle_marks(key),
            View::AttendanceMenu => self.handle_attendance_menu(key),
            View::AttendanceAdd => self.handle_attendance_add(key),
            View::AttendanceSummary => self.handle_attendance_summary(key),
            View::AttendanceMonth => self.handle_attendance_month(key),
            View::AttendanceExport => self.handle_attendance_export(key),
            View::Report => self.handle_report(key),
        }
    }

    pub(in crate::tui) fn handle_text_input(&mut self, key: KeyEvent) {
        if self.input_fields.is_empty() {
            return;
        }
        let field = &mut self.input_fields[self.input_index];
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.value.clear();
                self.validation_message = None;
            }
            KeyCode::Backspace => {
                field.pop();
                self.validation_message = None;
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.push(ch);
                self.validation_message = None;
            }
            _ => {}
        }
    }
}
