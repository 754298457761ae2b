use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// Backs the `natural_key_hash` index column: the hash is stable across runs
/// and systems because the data is first serialized to CBOR (a deterministic
/// binary form) and then hashed with a fixed-seed XxHash64.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_key_sensitive() {
        let a = hash_as_i64(&"SVC-001").unwrap();
        let b = hash_as_i64(&"SVC-001").unwrap();
        let c = hash_as_i64(&"SVC-002").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
