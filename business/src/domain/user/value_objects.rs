use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use super::errors::UserError;

/// A stored credential in PHC string format (`$argon2id$v=19$...`).
///
/// Plaintext passwords never leave the caller: they are hashed on the way in
/// and verified against the hash on the way out.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hashes `plain` with Argon2id and a fresh random salt.
    pub fn generate(plain: &str) -> Result<Self, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|_| UserError::PasswordHashing)?;
        Ok(Self(hash.to_string()))
    }

    /// Wraps a value read from the store without parsing it.
    pub fn from_repository(stored: String) -> Self {
        Self(stored)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// False for values that are not PHC strings, e.g. legacy plaintext rows.
    pub fn is_well_formed(&self) -> bool {
        PasswordHash::new(&self.0).is_ok()
    }

    /// Constant-time verification. Malformed stored values never match.
    pub fn verify(&self, plain: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_verify_matching_password() {
        let hashed = HashedPassword::generate("3229c1097c00d497a0fd282d586be050").unwrap();

        assert!(hashed.is_well_formed());
        assert!(hashed.verify("3229c1097c00d497a0fd282d586be050"));
    }

    #[test]
    fn should_reject_wrong_password() {
        let hashed = HashedPassword::generate("secret").unwrap();

        assert!(!hashed.verify("Secret"));
        assert!(!hashed.verify(""));
    }

    #[test]
    fn should_never_match_plaintext_stored_value() {
        let legacy = HashedPassword::from_repository("secret".to_string());

        assert!(!legacy.is_well_formed());
        assert!(!legacy.verify("secret"));
    }

    #[test]
    fn should_salt_each_hash() {
        let first = HashedPassword::generate("secret").unwrap();
        let second = HashedPassword::generate("secret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn should_not_leak_hash_in_debug_output() {
        let hashed = HashedPassword::generate("secret").unwrap();

        assert_eq!(format!("{:?}", hashed), "HashedPassword(***)");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn should_verify_only_the_original_password(plain in ".{0,24}", other in ".{0,24}") {
            let hashed = HashedPassword::generate(&plain).unwrap();

            prop_assert!(hashed.verify(&plain));
            prop_assert_eq!(hashed.verify(&other), plain == other);
        }
    }
}
