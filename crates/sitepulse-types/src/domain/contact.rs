use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A received contact-form message (admin view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Outgoing contact-form submission.
///
/// Checked client-side before any request goes out; server-side validation
/// failures still surface as status errors with the server's message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactDraft {
    /// Per-field checks mirroring the form-level validation of the site.
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required".to_string());
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(format!("'{}' is not a valid email address", email));
        }
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: None,
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut missing_name = draft();
        missing_name.name = "  ".to_string();
        assert!(missing_name.validate().is_err());

        let mut missing_message = draft();
        missing_message.message = String::new();
        assert!(missing_message.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["plainaddress", "@host", "user@"] {
            let mut d = draft();
            d.email = bad.to_string();
            assert!(d.validate().is_err(), "{bad} should be rejected");
        }
    }
}
