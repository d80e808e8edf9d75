//! Argon2id password hashing and verification.
//!
//! All password hashes use the Argon2id variant with a cryptographically
//! random salt generated via [`OsRng`]. The PHC string format is used for
//! storage so that algorithm parameters and salt are embedded in the hash
//! itself; the comparison inside verification is constant-time.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt,
/// and hash). Two hashes of the same plaintext differ, but each is
/// self-verifying.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// A stored digest that cannot be parsed verifies as `false`; verification
/// never aborts the request.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");

        // The hash must be a valid PHC string starting with the argon2id identifier.
        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );

        assert!(
            verify_password(password, &hash),
            "correct password should verify as true"
        );
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        assert!(
            !verify_password("wrong-password", &hash),
            "wrong password should verify as false"
        );
    }

    /// Same plaintext, two different digests (random salt), both verify.
    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("shared-password").expect("hashing should succeed");
        let second = hash_password("shared-password").expect("hashing should succeed");

        assert_ne!(first, second, "salted hashes must differ across calls");
        assert!(verify_password("shared-password", &first));
        assert!(verify_password("shared-password", &second));
    }

    /// A malformed digest is a verification failure, not an error.
    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "$argon2id$truncated"));
    }
}
