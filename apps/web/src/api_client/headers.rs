//! Header precedence for outbound API calls.
//!
//! 1. `Content-Type: application/json` by default.
//! 2. Caller-supplied headers replace defaults with the same name.
//! 3. Multipart bodies carry no explicit content-type at all; the transport writes it
//!    together with the boundary parameter.
//! 4. `Authorization: Bearer <token>` is set when a token exists and removed otherwise.

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};

pub fn merge(
    caller: &HeaderMap,
    is_multipart: bool,
    token: Option<&str>,
) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut merged = HeaderMap::new();
    merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for name in caller.keys() {
        merged.remove(name);
    }
    for (name, value) in caller.iter() {
        merged.append(name.clone(), value.clone());
    }

    if is_multipart {
        merged.remove(CONTENT_TYPE);
    }

    match token {
        Some(token) => {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            merged.insert(AUTHORIZATION, value);
        }
        None => {
            merged.remove(AUTHORIZATION);
        }
    }

    Ok(merged)
}
