use super::*;

impl TuiApp {
    fn status_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        if let Some(status) = &self.status {
            let style = match status.kind {
                StatusKind::Success => self.theme.success(),
                StatusKind::Error => self.theme.error(),
            };
            lines.push(Line::styled(status.text.clone(), style));
            lines.push(Line::from(Span::raw("")));
        }
        lines
    }

    fn form_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (index, field) in self.input_fields.iter().enumerate() {
            let marker = if index == self.input_index { "> " } else { "  " };
            let text = format!("{marker}{}: {}", field.label, field.display_value());
            if index == self.input_index {
                lines.push(Line::styled(text, self.theme.title()));
            } else {
                lines.push(Line::from(Span::raw(text)));
            }
        }
        if let Some(message) = &self.validation_message {
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::styled(message.clone(), self.theme.error()));
        }
        lines
    }

    pub(in crate::tui) fn draw_form(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        title: &str,
        hint: Option<&str>,
    ) {
        let mut lines = self.status_lines();
        lines.extend(self.form_lines());
        if let Some(hint) = hint {
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::styled(hint.to_string(), self.theme.hint()));
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_login(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.form_lines();
        if self.login_rx.is_some() {
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::styled("Checking token...", self.theme.hint()));
        }
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::styled(
            "The token is validated against the backend before it is stored.",
            self.theme.hint(),
        ));
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Admin Login"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_dashboard(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let items = [
            "Students",
            "Marks",
            "Attendance",
            "Report",
            "Logout",
            "Back to chat",
        ];
        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut line = Line::from(Span::raw(*item));
                if index == self.menu_index {
                    line = line.style(self.theme.selected());
                }
                ListItem::new(line)
            })
            .collect();
        let list = List::new(list_items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Admin Dashboard"),
        );
        frame.render_widget(list, area);
    }

    pub(in crate::tui) fn draw_students(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.status_lines();
        if self.roster_rx.is_some() {
            lines.push(Line::styled("Loading students...", self.theme.hint()));
        } else if self.students.is_empty() {
            lines.push(Line::from(Span::raw("No students registered.")));
        } else {
            for student in &self.students {
                lines.push(Line::from(Span::raw(format!(
                    "{:>6}  {}",
                    student.id, student.name
                ))));
            }
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Students"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_attendance_menu(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let items = [
            "Add entry",
            "Summary",
            "Monthly view",
            "Export spreadsheet",
            "Back",
        ];
        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut line = Line::from(Span::raw(*item));
                if index == self.attendance_menu_index {
                    line = line.style(self.theme.selected());
                }
                ListItem::new(line)
            })
            .collect();
        let list = List::new(list_items)
            .block(Block::default().borders(Borders::ALL).title("Attendance"));
        frame.render_widget(list, area);
    }

    pub(in crate::tui) fn draw_attendance_add(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.status_lines();
        lines.extend(self.form_lines());
        lines.push(Line::from(Span::raw("")));
        lines.push(Line::from(Span::raw(format!(
            "Status: {}  (Left/Right to toggle)",
            self.attendance_status
        ))));
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Record Attendance"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_attendance_summary(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.status_lines();
        lines.extend(self.form_lines());
        if self.summary_rx.is_some() {
            lines.push(Line::styled("Loading summary...", self.theme.hint()));
        }
        if let Some(summary) = &self.summary {
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::from(Span::raw(format!("Total days: {}", summary.total))));
            lines.push(Line::styled(
                format!("Present:    {}", summary.present),
                self.theme.success(),
            ));
            lines.push(Line::styled(
                format!("Absent:     {}", summary.absent),
                self.theme.error(),
            ));
            lines.push(Line::from(Span::raw(format!(
                "Attendance: {:.1}%  {}",
                summary.percentage,
                percentage_bar(summary.percentage, 20)
            ))));
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Attendance Summary"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_attendance_month(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.status_lines();
        lines.extend(self.form_lines());
        lines.push(Line::from(Span::raw("")));
        if self.month_rx.is_some() {
            lines.push(Line::styled("Loading month...", self.theme.hint()));
        } else if self.month_days.is_empty() {
            lines.push(Line::styled(
                "No monthly attendance loaded yet.",
                self.theme.hint(),
            ));
        } else {
            for day in &self.month_days {
                let style = match day.status {
                    classdesk_core::model::AttendanceStatus::Present => self.theme.success(),
                    classdesk_core::model::AttendanceStatus::Absent => self.theme.error(),
                };
                lines.push(Line::styled(format!("{}  {}", day.date, day.status), style));
            }
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Monthly Attendance"));
        frame.render_widget(widget, area);
    }

    pub(in crate::tui) fn draw_report(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let mut lines = self.status_lines();
        lines.extend(self.form_lines());
        if self.report_rx.is_some() {
            lines.push(Line::styled("Loading report...", self.theme.hint()));
        }
        if let Some(report) = &self.report {
            lines.push(Line::from(Span::raw("")));
            lines.push(Line::styled(
                format!("Student: {} ({})", report.student.name, report.student.id),
                self.theme.title(),
            ));
            lines.push(Line::from(Span::raw("Academics:")));
            if report.academics.is_empty() {
                lines.push(Line::styled("  none recorded", self.theme.hint()));
            }
            for entry in &report.academics {
                lines.push(Line::from(Span::raw(format!(
                    "  {:<16} {}",
                    entry.subject, entry.score
                ))));
            }
            lines.push(Line::from(Span::raw("Attendance:")));
            if report.attendance.is_empty() {
                lines.push(Line::styled("  none recorded", self.theme.hint()));
            }
            for day in &report.attendance {
                lines.push(Line::from(Span::raw(format!(
                    "  {}  {}",
                    day.date, day.status
                ))));
            }
        }
        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Student Report"));
        frame.render_widget(widget, area);
    }
}

fn percentage_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for index in 0..width {
        bar.push(if index < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}
