use super::*;

#[test]
fn parses_students_list() {
    let cli = Cli::try_parse_from(["classdesk", "students", "list"]).unwrap();
    assert!(matches!(cli.command, Commands::Students(_)));
    assert!(cli.base_url.is_none());
}

#[test]
fn parses_chat_send_with_overrides() {
    let cli = Cli::try_parse_from([
        "classdesk",
        "--base-url",
        "http://localhost:8000",
        "chat",
        "send",
        "--message",
        "What is my attendance?",
        "--role",
        "parent",
        "--student-id",
        "42",
    ])
    .unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
    let Commands::Chat(chat) = cli.command else {
        panic!("expected chat command");
    };
    let ChatCommands::Send(send) = chat.command else {
        panic!("expected chat send");
    };
    assert_eq!(send.message, "What is my attendance?");
    assert_eq!(send.student_id, Some(42));
    assert!(matches!(send.role, Some(RoleValue::Parent)));
}

#[test]
fn parses_attendance_add_with_default_status() {
    let cli = Cli::try_parse_from([
        "classdesk",
        "attendance",
        "add",
        "--student-id",
        "7",
        "--date",
        "2025-06-02",
    ])
    .unwrap();
    let Commands::Attendance(attendance) = cli.command else {
        panic!("expected attendance command");
    };
    let AttendanceCommands::Add(add) = attendance.command else {
        panic!("expected attendance add");
    };
    assert!(matches!(add.status, StatusValue::Present));
}

#[test]
fn login_takes_positional_token() {
    let cli = Cli::try_parse_from(["classdesk", "login", "abc123"]).unwrap();
    let Commands::Login(login) = cli.command else {
        panic!("expected login command");
    };
    assert_eq!(login.candidate, "abc123");
}

#[test]
fn value_enums_map_to_domain_types() {
    assert_eq!(ChatRole::from(RoleValue::Student), ChatRole::Student);
    assert_eq!(ChatRole::from(RoleValue::Parent), ChatRole::Parent);
    assert_eq!(
        AttendanceStatus::from(StatusValue::Absent),
        AttendanceStatus::Absent
    );
}

#[test]
fn unauthorized_error_mentions_login_command() {
    let line = describe_api_error("List students failed", &ApiError::Unauthorized);
    assert!(line.contains("classdesk login"));
}

#[test]
fn backend_error_keeps_the_detail() {
    let err = ApiError::Backend {
        status: 400,
        detail: "Student already exists".to_string(),
    };
    let line = describe_api_error("Add student failed", &err);
    assert!(line.contains("Student already exists"));
    assert!(line.starts_with("Add student failed"));
}
