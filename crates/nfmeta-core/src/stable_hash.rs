use crate::stable_json::canonical_json_bytes;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// `sha256:<hex>` over the canonical JSON encoding of `value`.
pub fn fingerprint_hex(value: &Value) -> serde_json::Result<String> {
    let bytes = canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("sha256:{digest:x}"))
}

#[cfg(test)]
#[path = "stable_hash_test.rs"]
mod tests;
