use super::*;

const DASHBOARD_ITEMS: usize = 6;
const ATTENDANCE_ITEMS: usize = 5;

impl TuiApp {
    pub(in crate::tui) fn handle_dashboard(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.leave_admin(),
            KeyCode::Down => self.menu_index = (self.menu_index + 1) % DASHBOARD_ITEMS,
            KeyCode::Up => {
                if self.menu_index == 0 {
                    self.menu_index = DASHBOARD_ITEMS - 1;
                } else {
                    self.menu_index -= 1;
                }
            }
            KeyCode::Enter => match self.menu_index {
                0 => {
                    self.view = View::Students;
                    self.start_roster_load();
                }
                1 => {
                    self.view = View::Marks;
                    self.input_fields = vec![
                        InputField::new("Student ID"),
                        InputField::new("Subject"),
                        InputField::new("Score"),
                    ];
                    self.input_index = 0;
                    self.validation_message = None;
                }
                2 => {
                    self.view = View::AttendanceMenu;
                    self.attendance_menu_index = 0;
                }
                3 => {
                    self.view = View::Report;
                    self.input_fields = vec![InputField::new("Student ID")];
                    self.input_index = 0;
                    self.report = None;
                    self.validation_message = None;
                }
                4 => self.logout(),
                _ => self.leave_admin(),
            },
            _ => {}
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_students(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Dashboard,
            KeyCode::Char('a') => {
                self.view = View::StudentAdd;
                self.input_fields =
                    vec![InputField::new("Student ID"), InputField::new("Name")];
                self.input_index = 0;
                self.validation_message = None;
            }
            KeyCode::Char('u') => {
                self.view = View::StudentEdit;
                self.input_fields =
                    vec![InputField::new("Student ID"), InputField::new("New name")];
                self.input_index = 0;
                self.validation_message = None;
            }
            KeyCode::Char('d') => {
                self.view = View::StudentRemove;
                self.input_fields = vec![InputField::new("Student ID")];
                self.input_index = 0;
                self.validation_message = None;
            }
            KeyCode::Char('r') => self.start_roster_load(),
            _ => {}
        }
        Ok(false)
    }

    pub(in crate::tui) fn handle_attendance_menu(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        match key.code {
            KeyCode::Esc => self.view = View::Dashboard,
            KeyCode::Down => {
                self.attendance_menu_index = (self.attendance_menu_index + 1) % ATTENDANCE_ITEMS;
            }
            KeyCode::Up => {
                if self.attendance_menu_index == 0 {
                    self.attendance_menu_index = ATTENDANCE_ITEMS - 1;
                } else {
                    self.attendance_menu_index -= 1;
                }
            }
            KeyCode::Enter => match self.attendance_menu_index {
                0 => {
                    self.view = View::AttendanceAdd;
                    self.input_fields = vec![
                        InputField::new("Student ID"),
                        InputField::new("Date (YYYY-MM-DD)"),
                    ];
                    self.input_index = 0;
                    self.attendance_status = AttendanceStatus::Present;
                    self.validation_message = None;
                }
                1 => {
                    self.view = View::AttendanceSummary;
                    self.input_fields = vec![InputField::new("Student ID")];
                    self.input_index = 0;
                    self.summary = None;
                    self.validation_message = None;
                }
                2 => {
                    self.view = View::AttendanceMonth;
                    self.input_fields = vec![
                        InputField::new("Student ID"),
                        InputField::new("Year"),
                        InputField::new("Month (1-12)"),
                    ];
                    self.input_index = 0;
                    self.month_days.clear();
                    self.validation_message = None;
                }
                3 => {
                    self.view = View::AttendanceExport;
                    self.input_fields = vec![
                        InputField::new("Student ID"),
                        InputField::new("Output path (optional)"),
                    ];
                    self.input_index = 0;
                    self.validation_message = None;
                }
                _ => self.view = View::Dashboard,
            },
            _ => {}
        }
        Ok(false)
    }
}
