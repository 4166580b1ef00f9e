use ratatui::style::{Color, Modifier, Style};

/// Style palette for the TUI, switchable at runtime. The dark flag is
/// persisted in the app config so the choice survives restarts.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn title(&self) -> Style {
        let color = if self.dark { Color::Cyan } else { Color::Blue };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn user_line(&self) -> Style {
        let color = if self.dark { Color::LightGreen } else { Color::Green };
        Style::default().fg(color)
    }

    pub fn bot_line(&self) -> Style {
        let color = if self.dark { Color::LightBlue } else { Color::Blue };
        Style::default().fg(color)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
