//! DTOs for link shortening, redirect and batch lookup endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::ShortLink;

/// Request to shorten a single URL.
///
/// A missing or `null` `originalUrl` deserializes as `None` so it is reported
/// as a validation error rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(
        required(message = "originalUrl is required"),
        length(min = 1, message = "originalUrl must not be empty"),
        custom(function = "reject_control_characters"),
        url(message = "Invalid URL format")
    )]
    pub original_url: Option<String>,
}

impl ShortenRequest {
    /// Submitted URL, empty when absent.
    pub fn url(&self) -> &str {
        self.original_url.as_deref().unwrap_or_default()
    }
}

fn reject_control_characters(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("control_character")
            .with_message("URL must not contain control characters".into()));
    }
    Ok(())
}

/// Public view of a short link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkResponse {
    pub short_url: String,
    /// `data:image/png;base64,...` QR code of `short_url`.
    pub qr_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub id: Uuid,
}

impl ShortLinkResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            short_url,
            qr_code: link.qr_code,
            original_url: link.original_url,
            clicks: link.clicks,
            id: link.id,
        }
    }
}

/// Batch lookup by primary key.
///
/// Ids are kept as strings: anything that is not a UUID simply matches nothing.
#[derive(Debug, Deserialize)]
pub struct BatchLookupRequest {
    #[serde(default)]
    pub ids: Vec<String>,
}

impl BatchLookupRequest {
    /// Parsed ids in first-seen order, dropping malformed and duplicate entries.
    pub fn parsed_ids(&self) -> Vec<Uuid> {
        let mut seen = HashSet::with_capacity(self.ids.len());

        self.ids
            .iter()
            .filter_map(|s| Uuid::parse_str(s.trim()).ok())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_shorten_request_validation() {
        let ok: ShortenRequest =
            serde_json::from_str(r#"{"originalUrl":"https://example.com"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let missing: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());

        let null: ShortenRequest = serde_json::from_str(r#"{"originalUrl":null}"#).unwrap();
        assert!(null.validate().is_err());
        assert_eq!(null.url(), "");

        let bad: ShortenRequest = serde_json::from_str(r#"{"originalUrl":"nope"}"#).unwrap();
        assert!(bad.validate().is_err());

        let newline: ShortenRequest =
            serde_json::from_str(r#"{"originalUrl":"https://example.com/a\nb"}"#).unwrap();
        assert!(newline.validate().is_err());
    }

    #[test]
    fn test_response_is_camel_case() {
        let link = ShortLink::new(
            Uuid::nil(),
            "https://example.com".to_string(),
            "abc".to_string(),
            "data:image/png;base64,AAAA".to_string(),
            7,
            Utc::now(),
        );
        let value =
            serde_json::to_value(ShortLinkResponse::new(link, "http://x/api/shorten/abc".into()))
                .unwrap();

        assert_eq!(value["shortUrl"], "http://x/api/shorten/abc");
        assert_eq!(value["qrCode"], "data:image/png;base64,AAAA");
        assert_eq!(value["originalUrl"], "https://example.com");
        assert_eq!(value["clicks"], 7);
        assert_eq!(value["id"], Uuid::nil().to_string());
    }

    #[test]
    fn test_parsed_ids_drops_invalid_and_duplicates() {
        let a = Uuid::new_v4();
        let request = BatchLookupRequest {
            ids: vec![
                a.to_string(),
                "abc123".to_string(),
                a.to_string(),
                String::new(),
            ],
        };

        assert_eq!(request.parsed_ids(), vec![a]);
    }

    #[test]
    fn test_parsed_ids_keeps_first_seen_order() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let mut raw: Vec<String> = ids.iter().map(Uuid::to_string).collect();
        raw.push(ids[2].to_string());
        raw.push(ids[0].to_string());

        let request = BatchLookupRequest { ids: raw };

        assert_eq!(request.parsed_ids(), ids);
    }

    #[test]
    fn test_parsed_ids_large_batch() {
        let ids: Vec<Uuid> = (0..200_000).map(|_| Uuid::new_v4()).collect();
        let request = BatchLookupRequest {
            ids: ids.iter().chain(ids.iter()).map(Uuid::to_string).collect(),
        };

        let started = std::time::Instant::now();
        let parsed = request.parsed_ids();

        assert_eq!(parsed, ids);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
