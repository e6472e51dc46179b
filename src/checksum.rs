use sha2::{Digest, Sha256};

pub struct Checksum {
    value: String,
}

impl Checksum {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// SHA-256 of `content`, hex encoded.
    pub fn of_bytes(content: &[u8]) -> Self {
        Checksum {
            value: hex::encode(Sha256::digest(content)),
        }
    }
}
