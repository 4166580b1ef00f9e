use super::*;

pub(super) fn handle_students(
    args: StudentsArgs,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, _) = build_client(base_url, token)?;
    match args.command {
        StudentsCommands::List => {
            let students = client
                .students()
                .map_err(|err| anyhow::anyhow!(describe_api_error("List students failed", &err)))?;
            if students.is_empty() {
                println!("No students registered.");
                return Ok(());
            }
            for student in students {
                println!("{:>6}  {}", student.id, student.name);
            }
            Ok(())
        }
        StudentsCommands::Add(args) => {
            print_ack(client.add_student(args.student_id, &args.name), "Add student")
        }
        StudentsCommands::Update(args) => print_ack(
            client.update_student(args.student_id, &args.name),
            "Update student",
        ),
        StudentsCommands::Remove(args) => {
            print_ack(client.delete_student(args.student_id), "Remove student")
        }
    }
}

pub(super) fn handle_marks(
    args: MarksArgs,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, _) = build_client(base_url, token)?;
    match args.command {
        MarksCommands::Add(args) => print_ack(
            client.add_marks(args.student_id, &args.subject, args.score),
            "Save marks",
        ),
    }
}

pub(super) fn handle_attendance(
    args: AttendanceArgs,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, _) = build_client(base_url, token)?;
    match args.command {
        AttendanceCommands::Add(args) => print_ack(
            client.add_attendance(args.student_id, &args.date, args.status.into()),
            "Save attendance",
        ),
        AttendanceCommands::Summary(args) => {
            let summary = client.attendance_summary(args.student_id).map_err(|err| {
                anyhow::anyhow!(describe_api_error("Load summary failed", &err))
            })?;
            println!("Total days: {}", summary.total);
            println!("Present:    {}", summary.present);
            println!("Absent:     {}", summary.absent);
            println!("Attendance: {:.1}%", summary.percentage);
            Ok(())
        }
        AttendanceCommands::Month(args) => {
            let days = client
                .attendance_month(args.student_id, args.year, args.month)
                .map_err(|err| {
                    anyhow::anyhow!(describe_api_error("Load month failed", &err))
                })?;
            if days.is_empty() {
                println!("No entries for {}-{:02}.", args.year, args.month);
                return Ok(());
            }
            for day in days {
                println!("{}  {}", day.date, day.status);
            }
            Ok(())
        }
        AttendanceCommands::Export(args) => {
            let path = args
                .output
                .unwrap_or_else(|| PathBuf::from(format!("attendance_{}.xlsx", args.student_id)));
            client
                .download_attendance(args.student_id, &path)
                .map_err(|err| anyhow::anyhow!(describe_api_error("Export failed", &err)))?;
            println!("Saved {}", path.display());
            Ok(())
        }
    }
}

pub(super) fn handle_report(
    args: ReportArgs,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, _) = build_client(base_url, token)?;
    let report = client
        .report(args.student_id)
        .map_err(|err| anyhow::anyhow!(describe_api_error("Load report failed", &err)))?;

    println!("Student: {} ({})", report.student.name, report.student.id);
    println!();
    println!("Academics:");
    if report.academics.is_empty() {
        println!("  none recorded");
    }
    for entry in &report.academics {
        println!("  {:<16} {}", entry.subject, entry.score);
    }
    println!();
    println!("Attendance:");
    if report.attendance.is_empty() {
        println!("  none recorded");
    }
    for day in &report.attendance {
        println!("  {}  {}", day.date, day.status);
    }
    Ok(())
}

fn print_ack(result: Result<String, ApiError>, context: &str) -> anyhow::Result<()> {
    match result {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) => anyhow::bail!(describe_api_error(context, &err)),
    }
}
