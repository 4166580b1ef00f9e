use super::*;

impl TuiApp {
    pub(in crate::tui) fn handle_chat(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Tab => {
                self.chat_focus = match self.chat_focus {
                    ChatFocus::Message => ChatFocus::StudentId,
                    ChatFocus::StudentId => ChatFocus::Message,
                };
            }
            KeyCode::Left | KeyCode::Right => {
                self.config.role = self.config.role.toggled();
                self.save_config_quietly();
            }
            KeyCode::Enter => self.submit_chat(),
            KeyCode::Backspace => match self.chat_focus {
                ChatFocus::Message => {
                    self.chat_input.pop();
                }
                ChatFocus::StudentId => {
                    self.student_id_input.pop();
                }
            },
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.chat_focus {
                    ChatFocus::Message => self.chat_input.push(ch),
                    ChatFocus::StudentId => {
                        if ch.is_ascii_digit() {
                            self.student_id_input.push(ch);
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(false)
    }

    pub(in crate::tui) fn submit_chat(&mut self) {
        let message = self.chat_input.trim().to_string();
        if message.is_empty() {
            return;
        }
        if self.chat_rx.is_some() {
            debug!("chat reply still pending; ignoring send");
            return;
        }
        let student_id = self.chat_student_id();
        self.chat_log.push(ChatMessage::user(message.clone()));
        self.chat_input.clear();
        self.start_chat_send(message, student_id);
    }
}
