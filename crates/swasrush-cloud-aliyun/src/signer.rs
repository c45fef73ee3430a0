//! RPC-style request signing (signature version 1.0, HMAC-SHA1)

use crate::error::{AliyunError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "1.0";

/// RFC 3986 encoding: only `A-Z a-z 0-9 - _ . ~` are left as-is
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// `k=v` pairs sorted by key and joined with `&`
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn string_to_sign(method: &str, canonical: &str) -> String {
    format!(
        "{}&{}&{}",
        method,
        percent_encode("/"),
        percent_encode(canonical)
    )
}

/// Base64 HMAC-SHA1 of `string_to_sign`, keyed with `<secret>&`
pub fn sign(access_key_secret: &str, string_to_sign: &str) -> Result<String> {
    let key = format!("{}&", access_key_secret);
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| AliyunError::InvalidKey(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Sign `params` in place and return the final query string
pub fn signed_query(
    method: &str,
    access_key_secret: &str,
    mut params: BTreeMap<String, String>,
) -> Result<String> {
    let canonical = canonical_query(&params);
    let signature = sign(access_key_secret, &string_to_sign(method, &canonical))?;
    params.insert("Signature".to_string(), signature);
    Ok(canonical_query(&params))
}
