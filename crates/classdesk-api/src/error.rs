use thiserror::Error;

/// Failure taxonomy for backend calls. `Unauthorized` is handled globally
/// by the client (credential cleared, session flagged) before it reaches a
/// caller; the remaining variants are presented by whichever view issued
/// the call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("admin credential missing or rejected")]
    Unauthorized,
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    #[error("server unreachable: {0}")]
    Network(#[source] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("failed to write export: {0}")]
    Io(#[source] std::io::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_is_the_display_text() {
        let err = ApiError::Backend {
            status: 400,
            detail: "Student already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Student already exists");
        assert!(!err.is_unauthorized());
    }
}
