//! Master-key request signing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ClientError;

type HmacSha256 = Hmac<Sha256>;

pub(crate) fn decode_key(key: &str) -> Result<Vec<u8>, ClientError> {
    STANDARD.decode(key.trim()).map_err(|e| ClientError::InvalidKey(e.to_string()))
}

/// RFC 1123 timestamp as sent in `x-ms-date`.
pub(crate) fn http_date(now: chrono::DateTime<chrono::Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// URL-encoded `authorization` header value for one request.
///
/// The signed string is `verb\nresource_type\nresource_link\ndate\n\n`, with
/// everything but the resource link lower-cased.
pub(crate) fn authorization_token(
    key: &[u8],
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> Result<String, ClientError> {
    let payload = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_link,
        date.to_lowercase()
    );

    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| ClientError::InvalidKey(e.to_string()))?;
    mac.update(payload.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    let token = format!("type=master&ver=1.0&sig={signature}");
    Ok(url::form_urlencoded::byte_serialize(token.as_bytes()).collect())
}
