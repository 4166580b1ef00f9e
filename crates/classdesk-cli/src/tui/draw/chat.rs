use super::*;
use classdesk_core::model::Sender;

impl TuiApp {
    pub(in crate::tui) fn draw_chat(
        &mut self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        let mut lines: Vec<Line> = Vec::new();
        for message in &self.chat_log {
            let (label, style) = match message.sender {
                Sender::User => ("You", self.theme.user_line()),
                Sender::Bot => ("Bot", self.theme.bot_line()),
            };
            for (index, part) in message.text.lines().enumerate() {
                if index == 0 {
                    lines.push(Line::styled(format!("{label}: {part}"), style));
                } else {
                    lines.push(Line::styled(format!("     {part}"), style));
                }
            }
        }
        if self.chat_rx.is_some() {
            lines.push(Line::styled("Bot is typing...", self.theme.hint()));
        }

        // Stick to the newest messages.
        let visible = layout[0].height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        let tail: Vec<Line> = lines.into_iter().skip(skip).collect();
        let transcript = Paragraph::new(tail)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("School Chatbot"));
        frame.render_widget(transcript, layout[0]);

        let message_style = if self.chat_focus == ChatFocus::Message {
            self.theme.selected()
        } else {
            self.theme.hint()
        };
        let id_style = if self.chat_focus == ChatFocus::StudentId {
            self.theme.selected()
        } else {
            self.theme.hint()
        };
        let student_id = if self.student_id_input.is_empty() {
            "unset".to_string()
        } else {
            self.student_id_input.clone()
        };
        let input_lines = vec![
            Line::from(vec![
                Span::styled("Message: ", message_style),
                Span::raw(self.chat_input.clone()),
            ]),
            Line::from(vec![
                Span::raw(format!("Role: {}   ", self.config.role)),
                Span::styled("Student ID: ", id_style),
                Span::raw(student_id),
            ]),
            Line::styled(
                "Ask about marks, attendance, exams...",
                self.theme.hint(),
            ),
        ];
        let input = Paragraph::new(input_lines)
            .block(Block::default().borders(Borders::ALL).title("Compose"));
        frame.render_widget(input, layout[1]);
    }
}
