use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

const KNOWN_INPUT: &[u8] = b"abc";
const KNOWN_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// Identity of a label within its scope: lowercase hex SHA-256 of
/// `"{project_id}@{repository_id}@{name}"`.
///
/// The name is hashed as given; case and whitespace are significant.
#[must_use]
pub fn hash(project_id: i32, repository_id: i32, name: &str) -> String {
    let token = format!("{project_id}@{repository_id}@{name}");
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Known-answer check of the digest. Must pass before any identity is
/// written as a uniqueness key.
pub fn verify_digest() -> Result<()> {
    if hex::encode(Sha256::digest(KNOWN_INPUT)) != KNOWN_DIGEST {
        tracing::error!("sha-256 known-answer check failed");
        return Err(Error::HashingUnavailable);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_value() {
        assert_eq!(
            hash(1, 10, "bug"),
            "77a4d420f364005769b761346c30530c77b0fd2d4f0a5a94e9358c08f63127af"
        );
    }

    #[test]
    fn test_hash_is_stable() {
        let first = hash(3, 7, "needs review");
        for _ in 0..10 {
            assert_eq!(hash(3, 7, "needs review"), first);
        }
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_is_case_sensitive() {
        assert_eq!(
            hash(1, 10, "Bug"),
            "01ccb6312e9fa8c38e297a9451648d3098bd3e8782e0b685e0323cf2dc2cef4a"
        );
        assert_ne!(hash(1, 10, "bug"), hash(1, 10, "bug "));
    }

    #[test]
    fn test_hash_differs_across_scopes() {
        let base = hash(1, 10, "bug");
        assert_ne!(base, hash(1, 11, "bug"));
        assert_ne!(base, hash(2, 10, "bug"));
        assert_ne!(base, hash(1, 10, "feature"));
        assert_ne!(hash(1, 23, "x"), hash(12, 3, "x"));
    }

    #[test]
    fn test_verify_digest_passes() {
        verify_digest().unwrap();
    }
}
