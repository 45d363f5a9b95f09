use serde::{Deserialize, Serialize};

/// Payload accepted by the contact-intake service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessageRequest {
    pub user_name: String,
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    pub message: String,
}

impl ContactMessageRequest {
    /// Domain part of the sender address, safe to log.
    pub fn email_domain(&self) -> &str {
        self.user_email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

/// Failure reported by the contact-intake boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> ContactMessageRequest {
        ContactMessageRequest {
            user_name: "Jan Kowalski".into(),
            user_email: "jan@firma.pl".into(),
            user_company: None,
            user_phone: Some("+48 600 100 200".into()),
            message: "Hello".into(),
        }
    }

    #[test]
    fn contact_request_omits_absent_optional_fields() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(value["user_name"], json!("Jan Kowalski"));
        assert_eq!(value["user_phone"], json!("+48 600 100 200"));
        assert!(value.get("user_company").is_none());
    }

    #[test]
    fn contact_request_reports_email_domain() {
        assert_eq!(request().email_domain(), "firma.pl");

        let mut odd = request();
        odd.user_email = "no-at-sign".into();
        assert_eq!(odd.email_domain(), "");
    }

    #[test]
    fn request_failure_displays_its_message() {
        let error = ApiError::request_failed("intake unavailable");
        assert_eq!(error.code, "REQUEST_FAILED");
        assert_eq!(error.to_string(), "intake unavailable");
    }
}
