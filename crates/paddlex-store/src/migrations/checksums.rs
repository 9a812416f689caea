use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of migration SQL
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
