//! Cataas API Client
//!
//! Fetches one batch of cat records and normalizes them into `Cat` cards.
//! Records without a usable identifier are dropped, not errors.

use gloo_net::http::Request;

use crate::models::{Cat, RawCat};

const API_BASE: &str = "https://cataas.com";
/// Tag filter sent with every batch request.
const BATCH_TAGS: &str = "cute";
/// Fixed batch size; one batch per browsing round.
pub const BATCH_LIMIT: usize = 15;

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Parse(String),
}

impl ApiError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Parse(message) => write!(f, "malformed response: {message}"),
        }
    }
}

/// Fetches one batch of cute cats.
pub async fn fetch_batch() -> Result<Vec<Cat>, ApiError> {
    let url = format!("{API_BASE}/api/cats?tags={BATCH_TAGS}&limit={BATCH_LIMIT}");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Network(format!(
            "HTTP {} while fetching cats",
            response.status()
        )));
    }

    let text = response.text().await.map_err(ApiError::network)?;
    parse_batch(&text)
}

/// Parses a batch body and normalizes every record that carries an id.
pub fn parse_batch(body: &str) -> Result<Vec<Cat>, ApiError> {
    let raw: Vec<RawCat> = serde_json::from_str(body).map_err(ApiError::parse)?;
    Ok(raw.into_iter().filter_map(normalize).collect())
}

/// `_id` wins over `id` when both are present, matching the endpoint's
/// canonical field.
fn normalize(raw: RawCat) -> Option<Cat> {
    let id = raw.mongo_id.or(raw.id)?;
    Some(Cat {
        image_url: format!("{API_BASE}/cat/{id}"),
        tags: raw.tags.unwrap_or_default(),
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_batch_normalizes_records() {
        let body = r#"[
            {"_id": "abc123", "tags": ["cute", "orange"]},
            {"id": "def456"}
        ]"#;

        let cats = parse_batch(body).unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].id, "abc123");
        assert_eq!(cats[0].tags, vec!["cute", "orange"]);
        assert_eq!(cats[0].image_url, "https://cataas.com/cat/abc123");
        assert_eq!(cats[1].id, "def456");
        assert!(cats[1].tags.is_empty());
    }

    #[test]
    fn records_without_ids_are_dropped() {
        // 15 records, 2 without any identifier.
        let mut records: Vec<String> = (0..13)
            .map(|n| format!(r#"{{"_id": "cat-{n}"}}"#))
            .collect();
        records.push(r#"{"tags": ["cute"]}"#.to_string());
        records.push("{}".to_string());
        let body = format!("[{}]", records.join(","));

        let cats = parse_batch(&body).unwrap();
        assert_eq!(cats.len(), 13);
    }

    #[test]
    fn mongo_id_wins_over_id() {
        let body = r#"[{"_id": "primary", "id": "secondary"}]"#;
        let cats = parse_batch(body).unwrap();
        assert_eq!(cats[0].id, "primary");
    }

    #[test]
    fn null_tags_normalize_to_empty() {
        let body = r#"[{"_id": "abc", "tags": null}]"#;
        let cats = parse_batch(body).unwrap();
        assert!(cats[0].tags.is_empty());
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(parse_batch("not json"), Err(ApiError::Parse(_))));
        assert!(matches!(
            parse_batch(r#"{"error": "rate limited"}"#),
            Err(ApiError::Parse(_))
        ));
    }
}
