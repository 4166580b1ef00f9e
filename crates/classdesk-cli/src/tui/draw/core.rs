use super::*;

impl TuiApp {
    pub(in crate::tui) fn draw(&mut self, frame: &mut ratatui::Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(LOG_PANEL_HEIGHT),
                Constraint::Length(3),
            ])
            .split(frame.size());

        let header = Paragraph::new(Line::styled(
            "Classdesk — school chat & admin console",
            self.theme.title(),
        ))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, layout[0]);

        match self.view {
            View::Chat => self.draw_chat(frame, layout[1]),
            View::Login => self.draw_login(frame, layout[1]),
            View::Dashboard => self.draw_dashboard(frame, layout[1]),
            View::Students => self.draw_students(frame, layout[1]),
            View::StudentAdd => self.draw_form(frame, layout[1], "Add Student", None),
            View::StudentEdit => self.draw_form(frame, layout[1], "Update Student", None),
            View::StudentRemove => self.draw_form(
                frame,
                layout[1],
                "Remove Student",
                Some("Removes the student and every mark and attendance entry."),
            ),
            View::Marks => self.draw_form(frame, layout[1], "Add Marks", None),
            View::AttendanceMenu => self.draw_attendance_menu(frame, layout[1]),
            View::AttendanceAdd => self.draw_attendance_add(frame, layout[1]),
            View::AttendanceSummary => self.draw_attendance_summary(frame, layout[1]),
            View::AttendanceMonth => self.draw_attendance_month(frame, layout[1]),
            View::AttendanceExport => self.draw_form(
                frame,
                layout[1],
                "Export Attendance",
                Some("Leave the path empty for attendance_<id>.xlsx in the current directory."),
            ),
            View::Report => self.draw_report(frame, layout[1]),
        }

        self.draw_log_panel(frame, layout[2]);

        let footer = Paragraph::new(self.footer_text())
            .block(Block::default().borders(Borders::ALL).title("Help"));
        frame.render_widget(footer, layout[3]);
    }

    fn draw_log_panel(&mut self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .log_buffer
            .tail(visible)
            .iter()
            .map(|entry| Line::from(Span::raw(entry.format_line())))
            .collect();
        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Log"));
        frame.render_widget(panel, area);
    }

    pub(in crate::tui) fn footer_text(&self) -> String {
        match self.view {
            View::Chat => {
                "Enter: send | Tab: message/student id | Left/Right: role | Ctrl+A: admin | Ctrl+R: history | Ctrl+D: dark mode | Esc: quit"
                    .to_string()
            }
            View::Login => "Enter: sign in | Esc: back to chat | Ctrl+D: dark mode".to_string(),
            View::Dashboard => "Up/Down: navigate | Enter: open | Esc: back to chat".to_string(),
            View::Students => "a: add | u: update | d: delete | r: reload | Esc: back".to_string(),
            View::AttendanceMenu => "Up/Down: navigate | Enter: select | Esc: back".to_string(),
            View::AttendanceAdd => {
                "Tab: next field | Left/Right: toggle status | Enter: save | Esc: back".to_string()
            }
            View::AttendanceSummary | View::AttendanceMonth | View::Report => {
                "Enter: load | Tab: next field | Esc: back".to_string()
            }
            View::StudentAdd | View::StudentEdit | View::StudentRemove | View::Marks
            | View::AttendanceExport => {
                "Tab: next field | Enter: submit | Esc: back".to_string()
            }
        }
    }
}
