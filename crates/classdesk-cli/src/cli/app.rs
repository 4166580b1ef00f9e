use super::*;
pub fn run() -> anyhow::Result<()> {
    let log_buffer = logging::LogBuffer::new(200);
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(logging::LogLayer::new(log_buffer.clone()))
        .init();

    let cli = Cli::parse();
    info!(command = command_label(&cli.command), "running command");

    match cli.command {
        Commands::Chat(args) => handle_chat(args, cli.base_url, cli.token),
        Commands::Login(args) => handle_login(args, cli.base_url),
        Commands::Logout => handle_logout(),
        Commands::Health => handle_health(cli.base_url, cli.token),
        Commands::Students(args) => handle_students(args, cli.base_url, cli.token),
        Commands::Marks(args) => handle_marks(args, cli.base_url, cli.token),
        Commands::Attendance(args) => handle_attendance(args, cli.base_url, cli.token),
        Commands::Report(args) => handle_report(args, cli.base_url, cli.token),
        Commands::Config(args) => handle_config(args),
        Commands::Tui(args) => {
            let start_view = if args.admin {
                tui::StartView::Admin
            } else {
                tui::StartView::Chat
            };
            tui::run_tui(log_buffer.clone(), start_view, cli.base_url, cli.token)
        }
    }
}

fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Chat(_) => "chat",
        Commands::Login(_) => "login",
        Commands::Logout => "logout",
        Commands::Health => "health",
        Commands::Students(_) => "students",
        Commands::Marks(_) => "marks",
        Commands::Attendance(_) => "attendance",
        Commands::Report(_) => "report",
        Commands::Config(_) => "config",
        Commands::Tui(_) => "tui",
    }
}
