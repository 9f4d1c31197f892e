use std::io::Read;

use anyhow::anyhow;
use axum::http::HeaderMap;
use flate2::read::GzDecoder;
use thiserror::Error;

use backend_application::dtos::EventBody;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("decoded body exceeds {0} bytes")]
    TooLarge(usize),
    #[error(transparent)]
    Invalid(#[from] anyhow::Error),
}

/// Decodes an event body, holding the decompressed size to `limit` bytes.
pub fn parse_event_body(
    headers: &HeaderMap,
    body: &[u8],
    limit: usize,
) -> Result<EventBody, BodyError> {
    let content = maybe_gunzip(headers, body, limit)?;
    if content.trim().is_empty() {
        return Err(anyhow!("request body is empty").into());
    }
    let event: EventBody = serde_json::from_str(&content).map_err(anyhow::Error::from)?;
    Ok(event)
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8], limit: usize) -> Result<String, BodyError> {
    let gzip = headers
        .get("Content-Encoding")
        .map(|encoding| encoding.to_str().unwrap_or("").eq_ignore_ascii_case("gzip"))
        .unwrap_or(false);
    let bytes = if gzip {
        let mut out = Vec::new();
        GzDecoder::new(body)
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut out)
            .map_err(anyhow::Error::from)?;
        out
    } else {
        body.to_vec()
    };
    if bytes.len() > limit {
        return Err(BodyError::TooLarge(limit));
    }
    Ok(String::from_utf8(bytes).map_err(anyhow::Error::from)?)
}
