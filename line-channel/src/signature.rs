//! `X-Line-Signature`: base64 of HMAC-SHA256 over the raw request body, keyed by the channel secret.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Request header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

fn mac(channel_secret: &str, body: &[u8]) -> Result<HmacSha256, InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())?;
    mac.update(body);
    Ok(mac)
}

/// Signature LINE would send for `body`.
pub fn sign(channel_secret: &str, body: &[u8]) -> Result<String, InvalidLength> {
    Ok(STANDARD.encode(mac(channel_secret, body)?.finalize().into_bytes()))
}

/// True when `signature` is exactly the base64 HMAC of `body`. Compares in constant time.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature) else {
        return false;
    };
    match mac(channel_secret, body) {
        Ok(mac) => mac.verify_slice(&expected).is_ok(),
        Err(_) => false,
    }
}
