use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_student_form(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Students,
            KeyCode::Tab => self.next_field(),
            KeyCode::Enter => self.submit_student_form(),
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    fn submit_student_form(&mut self) {
        if self.action_rx.is_some() {
            return;
        }
        let Some(student_id) = self.required_i64(0, "Student ID") else {
            return;
        };
        match self.view {
            View::StudentAdd => {
                let Some(name) = self.required_text(1, "Name") else {
                    return;
                };
                self.start_action(ActionContext::Student, move |client| {
                    client.add_student(student_id, &name)
                });
            }
            View::StudentEdit => {
                let Some(name) = self.required_text(1, "New name") else {
                    return;
                };
                self.start_action(ActionContext::Student, move |client| {
                    client.update_student(student_id, &name)
                });
            }
            View::StudentRemove => {
                self.start_action(ActionContext::Student, move |client| {
                    client.delete_student(student_id)
                });
            }
            _ => {}
        }
    }

    pub(in crate::tui) fn handle_marks(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Dashboard,
            KeyCode::Tab => self.next_field(),
            KeyCode::Enter => {
                if self.action_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                let Some(subject) = self.required_text(1, "Subject") else {
                    return Ok(false);
                };
                let Some(score) = self.required_i64(2, "Score") else {
                    return Ok(false);
                };
                self.start_action(ActionContext::Marks, move |client| {
                    client.add_marks(student_id, &subject, score)
                });
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_attendance_add(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::AttendanceMenu,
            KeyCode::Tab => self.next_field(),
            KeyCode::Left | KeyCode::Right => {
                self.attendance_status = self.attendance_status.toggled();
            }
            KeyCode::Enter => {
                if self.action_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                let Some(date) = self.required_text(1, "Date") else {
                    return Ok(false);
                };
                let status = self.attendance_status;
                self.start_action(ActionContext::Attendance, move |client| {
                    client.add_attendance(student_id, &date, status)
                });
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_attendance_summary(
        &mut self,
        key: KeyEvent,
    ) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::AttendanceMenu,
            KeyCode::Enter => {
                if self.summary_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                self.start_summary_fetch(student_id);
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_attendance_month(
        &mut self,
        key: KeyEvent,
    ) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::AttendanceMenu,
            KeyCode::Tab => self.next_field(),
            KeyCode::Enter => {
                if self.month_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                let Some(year) = self.required_i64(1, "Year") else {
                    return Ok(false);
                };
                let Some(month) = self.required_i64(2, "Month") else {
                    return Ok(false);
                };
                if !(1..=12).contains(&month) {
                    self.validation_message = Some("Month must be between 1 and 12.".to_string());
                    return Ok(false);
                }
                self.start_month_fetch(student_id, year as i32, month as u32);
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_attendance_export(
        &mut self,
        key: KeyEvent,
    ) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::AttendanceMenu,
            KeyCode::Tab => self.next_field(),
            KeyCode::Enter => {
                if self.export_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                let raw_path = self.field_value(1);
                let path = if raw_path.is_empty() {
                    PathBuf::from(format!("attendance_{student_id}.xlsx"))
                } else {
                    PathBuf::from(raw_path)
                };
                self.start_export(student_id, path);
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_report(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Dashboard,
            KeyCode::Enter => {
                if self.report_rx.is_some() {
                    return Ok(false);
                }
                let Some(student_id) = self.required_i64(0, "Student ID") else {
                    return Ok(false);
                };
                self.start_report_fetch(student_id);
            }
            _ => self.handle_text_input(key),
        }
        Ok(false)
    }

    fn next_field(&mut self) {
        if !self.input_fields.is_empty() {
            self.input_index = (self.input_index + 1) % self.input_fields.len();
        }
    }
}
