use super::*;
#[derive(Parser)]
#[command(name = "classdesk", author, version, about)]
pub(super) struct Cli {
    #[arg(long, global = true, help = "Backend base URL (overrides the config file)")]
    pub(super) base_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Ephemeral admin token for this invocation; not persisted"
    )]
    pub(super) token: Option<String>,
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Talk to the school chatbot")]
    Chat(ChatArgs),
    #[command(about = "Validate an admin token and store it")]
    Login(LoginArgs),
    #[command(about = "Clear the stored admin token")]
    Logout,
    #[command(about = "Check that the backend is reachable")]
    Health,
    #[command(about = "Manage students")]
    Students(StudentsArgs),
    #[command(about = "Record marks")]
    Marks(MarksArgs),
    #[command(about = "Record and inspect attendance")]
    Attendance(AttendanceArgs),
    #[command(about = "Fetch a student report")]
    Report(ReportArgs),
    #[command(about = "Manage config")]
    Config(ConfigArgs),
    #[command(about = "Launch the terminal UI")]
    Tui(TuiArgs),
}

#[derive(Parser)]
pub(super) struct ChatArgs {
    #[command(subcommand)]
    pub(super) command: ChatCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ChatCommands {
    #[command(about = "Send one message and print the reply")]
    Send(ChatSendArgs),
    #[command(about = "Show recent stored exchanges for a student")]
    History(ChatHistoryArgs),
}

#[derive(Parser)]
pub(super) struct ChatSendArgs {
    #[arg(long)]
    pub(super) message: String,
    #[arg(long, value_enum)]
    pub(super) role: Option<RoleValue>,
    #[arg(long)]
    pub(super) student_id: Option<i64>,
}

#[derive(Parser)]
pub(super) struct ChatHistoryArgs {
    #[arg(long)]
    pub(super) student_id: i64,
}

#[derive(Parser)]
pub(super) struct LoginArgs {
    #[arg(value_name = "TOKEN")]
    pub(super) candidate: String,
}

#[derive(Parser)]
pub(super) struct StudentsArgs {
    #[command(subcommand)]
    pub(super) command: StudentsCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum StudentsCommands {
    #[command(about = "List all students")]
    List,
    #[command(about = "Add a student")]
    Add(StudentAddArgs),
    #[command(about = "Rename a student")]
    Update(StudentAddArgs),
    #[command(about = "Remove a student and their records")]
    Remove(StudentIdArgs),
}

#[derive(Parser)]
pub(super) struct StudentAddArgs {
    #[arg(long)]
    pub(super) student_id: i64,
    #[arg(long)]
    pub(super) name: String,
}

#[derive(Parser)]
pub(super) struct StudentIdArgs {
    #[arg(long)]
    pub(super) student_id: i64,
}

#[derive(Parser)]
pub(super) struct MarksArgs {
    #[command(subcommand)]
    pub(super) command: MarksCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum MarksCommands {
    #[command(about = "Add or update a subject score")]
    Add(MarksAddArgs),
}

#[derive(Parser)]
pub(super) struct MarksAddArgs {
    #[arg(long)]
    pub(super) student_id: i64,
    #[arg(long)]
    pub(super) subject: String,
    #[arg(long)]
    pub(super) score: i64,
}

#[derive(Parser)]
pub(super) struct AttendanceArgs {
    #[command(subcommand)]
    pub(super) command: AttendanceCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum AttendanceCommands {
    #[command(about = "Record attendance for a day")]
    Add(AttendanceAddArgs),
    #[command(about = "Show totals and percentage")]
    Summary(StudentIdArgs),
    #[command(about = "Show one month of entries")]
    Month(AttendanceMonthArgs),
    #[command(about = "Download the spreadsheet export")]
    Export(AttendanceExportArgs),
}

#[derive(Parser)]
pub(super) struct AttendanceAddArgs {
    #[arg(long)]
    pub(super) student_id: i64,
    #[arg(long, help = "Date in YYYY-MM-DD form")]
    pub(super) date: String,
    #[arg(long, value_enum, default_value = "present")]
    pub(super) status: StatusValue,
}

#[derive(Parser)]
pub(super) struct AttendanceMonthArgs {
    #[arg(long)]
    pub(super) student_id: i64,
    #[arg(long)]
    pub(super) year: i32,
    #[arg(long)]
    pub(super) month: u32,
}

#[derive(Parser)]
pub(super) struct AttendanceExportArgs {
    #[arg(long)]
    pub(super) student_id: i64,
    #[arg(long, help = "Output path; defaults to attendance_<id>.xlsx")]
    pub(super) output: Option<PathBuf>,
}

#[derive(Parser)]
pub(super) struct ReportArgs {
    #[arg(long)]
    pub(super) student_id: i64,
}

#[derive(Parser)]
pub(super) struct ConfigArgs {
    #[command(subcommand)]
    pub(super) command: ConfigCommands,
}

#[derive(clap::Subcommand)]
pub(super) enum ConfigCommands {
    #[command(about = "Initialize config with the backend base URL")]
    Init(ConfigInitArgs),
    #[command(about = "Print the current config")]
    Show,
}

#[derive(Parser)]
pub(super) struct ConfigInitArgs {
    #[arg(long)]
    pub(super) base_url: String,
    #[arg(long, value_enum)]
    pub(super) role: Option<RoleValue>,
    #[arg(long)]
    pub(super) student_id: Option<i64>,
}

#[derive(Parser)]
pub(super) struct TuiArgs {
    #[arg(long, help = "Open the admin area instead of the chat view")]
    pub(super) admin: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub(super) enum RoleValue {
    Student,
    Parent,
}

impl From<RoleValue> for ChatRole {
    fn from(value: RoleValue) -> Self {
        match value {
            RoleValue::Student => ChatRole::Student,
            RoleValue::Parent => ChatRole::Parent,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(super) enum StatusValue {
    Present,
    Absent,
}

impl From<StatusValue> for AttendanceStatus {
    fn from(value: StatusValue) -> Self {
        match value {
            StatusValue::Present => AttendanceStatus::Present,
            StatusValue::Absent => AttendanceStatus::Absent,
        }
    }
}
