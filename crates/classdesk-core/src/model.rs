use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkEntry {
    pub subject: String,
    pub score: i64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDay {
    pub date: String,
    pub status: AttendanceStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    pub student: Student,
    pub academics: Vec<MarkEntry>,
    pub attendance: Vec<AttendanceDay>,
}

/// Who the chatbot is talking to. The backend adjusts its tone per role.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    Student,
    Parent,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::Student => "student",
            ChatRole::Parent => "parent",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ChatRole::Student => ChatRole::Parent,
            ChatRole::Parent => ChatRole::Student,
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the local chat transcript. In-memory only; the transcript
/// starts empty on every launch.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// A stored question/answer pair returned by the chat history endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatExchange {
    pub message: String,
    pub reply: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatRole::Parent).unwrap();
        assert_eq!(json, "\"parent\"");
        let role: ChatRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, ChatRole::Student);
    }

    #[test]
    fn attendance_status_matches_backend_casing() {
        assert_eq!(AttendanceStatus::Present.as_str(), "Present");
        let status: AttendanceStatus = serde_json::from_str("\"Absent\"").unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
    }

    #[test]
    fn toggles_flip_both_ways() {
        assert_eq!(ChatRole::Student.toggled(), ChatRole::Parent);
        assert_eq!(ChatRole::Parent.toggled(), ChatRole::Student);
        assert_eq!(
            AttendanceStatus::Absent.toggled(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn report_decodes_backend_shape() {
        let payload = r#"{
            "student": {"id": 42, "name": "Asha"},
            "academics": [{"subject": "Math", "score": 91}],
            "attendance": [{"date": "2025-06-02", "status": "Present"}]
        }"#;
        let report: StudentReport = serde_json::from_str(payload).unwrap();
        assert_eq!(report.student.id, 42);
        assert_eq!(report.academics[0].subject, "Math");
        assert_eq!(report.attendance[0].status, AttendanceStatus::Present);
    }
}
