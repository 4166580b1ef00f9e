use crate::error::ApiError;
use anyhow::Context;
use classdesk_core::credentials::CredentialStore;
use classdesk_core::model::{
    AttendanceDay, AttendanceStatus, AttendanceSummary, ChatExchange, ChatRole, Student,
    StudentReport,
};
use classdesk_core::session::SessionHandle;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The one gateway to the school backend. Every call reads the credential
/// store right before dispatch and funnels its response through the same
/// inspection, so a rejected credential signs the whole application out no
/// matter which call tripped it.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    session: SessionHandle,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        credentials: Arc<dyn CredentialStore>,
        session: SessionHandle,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            session,
        })
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the stored credential (when present) and sends.
    fn dispatch(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.credentials.get() {
            Ok(Some(token)) => request.header(ADMIN_TOKEN_HEADER, token),
            Ok(None) => request,
            Err(err) => {
                warn!(error = %err, "credential store unreadable; sending without token");
                request
            }
        };
        let response = request.send().map_err(ApiError::Network)?;
        self.inspect(response)
    }

    /// Response-side interception. A 401 from any endpoint clears the
    /// stored credential and raises the shared sign-out flag before the
    /// error reaches the caller.
    fn inspect(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.credentials.clear() {
                warn!(error = %err, "failed to clear rejected credential");
            }
            self.session.force_sign_out();
            warn!("backend rejected admin credential");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let detail = response
                .json::<ErrorEnvelope>()
                .ok()
                .map(|envelope| envelope.detail)
                .unwrap_or_else(|| format!("request failed with HTTP {status}"));
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }

    pub fn health(&self) -> Result<String, ApiError> {
        let response = self.dispatch(self.http.get(self.url("/")))?;
        let reply: HealthReply = response.json().map_err(ApiError::Decode)?;
        Ok(reply.message)
    }

    pub fn chat(
        &self,
        message: &str,
        role: ChatRole,
        student_id: Option<i64>,
    ) -> Result<String, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
            role,
            student_id,
        };
        debug!(role = %role, student_id, "sending chat message");
        let response = self.dispatch(self.http.post(self.url("/chat")).json(&body))?;
        let reply: ChatReply = response.json().map_err(ApiError::Decode)?;
        Ok(reply.reply)
    }

    pub fn chat_history(&self, student_id: i64) -> Result<Vec<ChatExchange>, ApiError> {
        let response =
            self.dispatch(self.http.get(self.url(&format!("/chat/history/{student_id}"))))?;
        response.json().map_err(ApiError::Decode)
    }

    /// Validates the stored credential. 200 means valid; anything else goes
    /// through the usual interception.
    pub fn check(&self) -> Result<(), ApiError> {
        self.dispatch(self.http.get(self.url("/admin/check")))
            .map(|_| ())
    }

    /// Validates a candidate credential before it is persisted. The
    /// candidate rides in the header explicitly; the response still passes
    /// through the shared inspection.
    pub fn validate_token(&self, candidate: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url("/admin/check"))
            .header(ADMIN_TOKEN_HEADER, candidate)
            .send()
            .map_err(ApiError::Network)?;
        self.inspect(response).map(|_| ())
    }

    pub fn students(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.dispatch(self.http.get(self.url("/admin/students")))?;
        response.json().map_err(ApiError::Decode)
    }

    pub fn add_student(&self, student_id: i64, name: &str) -> Result<String, ApiError> {
        let response = self.dispatch(
            self.http
                .post(self.url("/admin/students"))
                .query(&[("student_id", student_id.to_string()), ("name", name.to_string())]),
        )?;
        ack_message(response)
    }

    pub fn update_student(&self, student_id: i64, name: &str) -> Result<String, ApiError> {
        let response = self.dispatch(
            self.http
                .put(self.url(&format!("/admin/students/{student_id}")))
                .query(&[("name", name)]),
        )?;
        ack_message(response)
    }

    pub fn delete_student(&self, student_id: i64) -> Result<String, ApiError> {
        let response =
            self.dispatch(self.http.delete(self.url(&format!("/admin/students/{student_id}"))))?;
        ack_message(response)
    }

    pub fn add_marks(&self, student_id: i64, subject: &str, score: i64) -> Result<String, ApiError> {
        let response = self.dispatch(self.http.post(self.url("/admin/marks")).query(&[
            ("student_id", student_id.to_string()),
            ("subject", subject.to_string()),
            ("score", score.to_string()),
        ]))?;
        ack_message(response)
    }

    pub fn add_attendance(
        &self,
        student_id: i64,
        date: &str,
        status: AttendanceStatus,
    ) -> Result<String, ApiError> {
        let response = self.dispatch(self.http.post(self.url("/admin/attendance")).query(&[
            ("student_id", student_id.to_string()),
            ("date", date.to_string()),
            ("status", status.as_str().to_string()),
        ]))?;
        ack_message(response)
    }

    pub fn report(&self, student_id: i64) -> Result<StudentReport, ApiError> {
        let response =
            self.dispatch(self.http.get(self.url(&format!("/admin/report/{student_id}"))))?;
        response.json().map_err(ApiError::Decode)
    }

    pub fn attendance_summary(&self, student_id: i64) -> Result<AttendanceSummary, ApiError> {
        let response = self.dispatch(
            self.http
                .get(self.url(&format!("/admin/attendance/summary/{student_id}"))),
        )?;
        response.json().map_err(ApiError::Decode)
    }

    pub fn attendance_month(
        &self,
        student_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<AttendanceDay>, ApiError> {
        let response = self.dispatch(
            self.http
                .get(self.url(&format!("/admin/attendance/month/{student_id}")))
                .query(&[("year", year.to_string()), ("month", month.to_string())]),
        )?;
        response.json().map_err(ApiError::Decode)
    }

    /// Fetches the spreadsheet export as raw bytes; the caller decides
    /// where to write them.
    pub fn export_attendance(&self, student_id: i64) -> Result<Vec<u8>, ApiError> {
        let response = self.dispatch(
            self.http
                .get(self.url(&format!("/admin/attendance/export/{student_id}"))),
        )?;
        let bytes = response.bytes().map_err(ApiError::Network)?;
        Ok(bytes.to_vec())
    }

    /// Downloads the spreadsheet export to `path`, the terminal equivalent
    /// of the browser's file download.
    pub fn download_attendance(&self, student_id: i64, path: &Path) -> Result<(), ApiError> {
        let bytes = self.export_attendance(student_id)?;
        fs::write(path, bytes).map_err(ApiError::Io)?;
        debug!(path = %path.display(), "attendance export written");
        Ok(())
    }
}

fn ack_message(response: Response) -> Result<String, ApiError> {
    let ack: Ack = response.json().map_err(ApiError::Decode)?;
    Ok(ack.message)
}

#[derive(Serialize)]
struct ChatRequest {
    message: String,
    role: ChatRole,
    student_id: Option<i64>,
}

#[derive(Deserialize)]
struct ChatReply {
    reply: String,
}

#[derive(Deserialize)]
struct HealthReply {
    message: String,
}

#[derive(Deserialize)]
struct Ack {
    message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use classdesk_core::credentials::MemoryCredentials;
    use httpmock::Method::{DELETE, GET, POST};
    use httpmock::MockServer;
    use serde_json::json;

    fn client_with(server: &MockServer, store: Arc<dyn CredentialStore>) -> ApiClient {
        ApiClient::new(&server.base_url(), store, SessionHandle::new()).unwrap()
    }

    #[test]
    fn admin_request_carries_stored_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/students")
                .header(ADMIN_TOKEN_HEADER, "abc123");
            then.status(200)
                .json_body(json!([{"id": 1, "name": "Asha"}]));
        });
        let store = Arc::new(MemoryCredentials::with_token("abc123"));
        let client = client_with(&server, store);

        let students = client.students().unwrap();

        assert_eq!(students, vec![Student { id: 1, name: "Asha".to_string() }]);
        mock.assert_calls(1);
    }

    #[test]
    fn request_without_stored_token_sends_no_header() {
        let server = MockServer::start();
        let strict = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/check")
                .header_exists(ADMIN_TOKEN_HEADER);
            then.status(200).json_body(json!({"status": "ok"}));
        });
        let client = client_with(&server, Arc::new(MemoryCredentials::new()));

        let err = client.check().unwrap_err();

        // The header-requiring mock never matches, so the server answers
        // with its unmatched-request status instead of 200.
        assert!(matches!(err, ApiError::Backend { .. }));
        strict.assert_calls(0);
    }

    #[test]
    fn unauthorized_clears_store_and_raises_sign_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/admin/report/42");
            then.status(401)
                .json_body(json!({"detail": "Unauthorized: Invalid admin token"}));
        });
        let store = Arc::new(MemoryCredentials::with_token("stale"));
        let session = SessionHandle::new();
        let client =
            ApiClient::new(&server.base_url(), store.clone(), session.clone()).unwrap();

        let err = client.report(42).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(store.get().unwrap(), None);
        assert!(session.take_signed_out());

        // A second unauthorized response leaves the same end state.
        let err = client.report(42).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(store.get().unwrap(), None);
        assert!(session.take_signed_out());
    }

    #[test]
    fn accepted_candidate_validates_against_backend() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/check")
                .header(ADMIN_TOKEN_HEADER, "abc123");
            then.status(200).json_body(json!({"status": "ok"}));
        });
        let client = client_with(&server, Arc::new(MemoryCredentials::new()));

        client.validate_token("abc123").unwrap();
        mock.assert_calls(1);
    }

    #[test]
    fn rejected_candidate_leaves_store_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/admin/check")
                .header(ADMIN_TOKEN_HEADER, "bad");
            then.status(401)
                .json_body(json!({"detail": "Unauthorized: Invalid admin token"}));
        });
        let store = Arc::new(MemoryCredentials::new());
        let client = client_with(&server, store.clone());

        let err = client.validate_token("bad").unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn chat_round_trip_posts_payload_and_returns_reply() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/chat").json_body(json!({
                "message": "What is my attendance?",
                "role": "student",
                "student_id": 42
            }));
            then.status(200).json_body(json!({"reply": "85%"}));
        });
        let client = client_with(&server, Arc::new(MemoryCredentials::new()));

        let reply = client
            .chat("What is my attendance?", ChatRole::Student, Some(42))
            .unwrap();

        assert_eq!(reply, "85%");
        mock.assert_calls(1);
    }

    #[test]
    fn domain_error_surfaces_backend_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/admin/students");
            then.status(400)
                .json_body(json!({"detail": "Student already exists"}));
        });
        let client =
            client_with(&server, Arc::new(MemoryCredentials::with_token("abc123")));

        let err = client.add_student(1, "Asha").unwrap_err();

        match err {
            ApiError::Backend { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Student already exists");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_backend_is_a_transport_error() {
        let store = Arc::new(MemoryCredentials::new());
        let client =
            ApiClient::new("http://127.0.0.1:1", store, SessionHandle::new()).unwrap();

        let err = client.students().unwrap_err();
        assert!(err.is_network());
    }

    #[test]
    fn delete_student_returns_ack_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/admin/students/7");
            then.status(200)
                .json_body(json!({"message": "Student deleted successfully"}));
        });
        let client =
            client_with(&server, Arc::new(MemoryCredentials::with_token("abc123")));

        let message = client.delete_student(7).unwrap();
        assert_eq!(message, "Student deleted successfully");
    }

    #[test]
    fn month_view_passes_year_and_month() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/attendance/month/42")
                .query_param("year", "2025")
                .query_param("month", "6");
            then.status(200)
                .json_body(json!([{"date": "2025-06-02", "status": "Present"}]));
        });
        let client =
            client_with(&server, Arc::new(MemoryCredentials::with_token("abc123")));

        let days = client.attendance_month(42, 2025, 6).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].status, AttendanceStatus::Present);
        mock.assert_calls(1);
    }

    #[test]
    fn export_returns_raw_bytes() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/admin/attendance/export/42");
            then.status(200).body(b"PK\x03\x04fake-sheet");
        });
        let client =
            client_with(&server, Arc::new(MemoryCredentials::with_token("abc123")));

        let bytes = client.export_attendance(42).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn download_writes_export_to_disk() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/admin/attendance/export/42");
            then.status(200).body(b"PK\x03\x04fake-sheet");
        });
        let client =
            client_with(&server, Arc::new(MemoryCredentials::with_token("abc123")));
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("attendance_42.xlsx");

        client.download_attendance(42, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..2], b"PK");
    }
}
