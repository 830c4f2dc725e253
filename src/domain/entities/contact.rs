//! Contact form submission relayed by e-mail.

use std::collections::BTreeMap;

/// A validated contact form submission.
///
/// `extra` holds any fields beyond the known ones, already rendered to text
/// and keyed by their original (camelCase) names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub extra: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// Labelled, non-empty fields in display order: known fields first, then
    /// extra fields alphabetically.
    pub fn labelled_fields(&self) -> Vec<(String, &str)> {
        let mut fields: Vec<(String, &str)> = vec![
            ("Name".to_string(), self.name.as_str()),
            ("Email".to_string(), self.email.as_str()),
        ];

        if let Some(subject) = self.subject.as_deref() {
            fields.push(("Subject".to_string(), subject));
        }
        fields.push(("Message".to_string(), self.message.as_str()));

        for (key, value) in &self.extra {
            fields.push((field_label(key), value.as_str()));
        }

        fields.retain(|(_, value)| !value.trim().is_empty());
        fields
    }
}

/// Turns a camelCase field name into a display label:
/// `phoneNumber` becomes `Phone Number`.
pub fn field_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);

    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }

    label
}
