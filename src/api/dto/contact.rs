//! DTOs for the contact form relay.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use validator::Validate;

use crate::domain::entities::ContactSubmission;

/// Contact form body. Fields beyond the known four are collected in `extra`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid e-mail address"))]
    pub email: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContactRequest {
    /// Converts to the domain submission.
    ///
    /// Extra strings, numbers and booleans are kept as text; nulls, arrays
    /// and objects are dropped.
    pub fn into_submission(self) -> ContactSubmission {
        let extra = self
            .extra
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                _ => None,
            })
            .collect();

        ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            extra,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}
