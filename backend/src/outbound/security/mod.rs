//! Password hashing adapter.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Argon2id hasher producing PHC encoded strings.
///
/// # Examples
/// ```
/// use jobdesk::domain::ports::PasswordHasher;
/// use jobdesk::outbound::security::Argon2Hasher;
///
/// let hasher = Argon2Hasher::default();
/// let encoded = hasher.hash("password123").expect("hash");
/// assert!(hasher.verify("password123", &encoded).expect("verify"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    argon: Argon2<'static>,
}

impl Argon2Hasher {
    /// Use explicit Argon2 parameters, e.g. cheaper ones in tests.
    #[must_use]
    pub fn with_params(params: argon2::Params) -> Self {
        Self {
            argon: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(encoded).map_err(|err| PasswordHashError::malformed_hash(err.to_string()))?;
        match self.argon.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::hash(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Hash and verify behaviour.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2Hasher {
        let params = argon2::Params::new(8, 1, 1, None).expect("valid params");
        Argon2Hasher::with_params(params)
    }

    #[rstest]
    fn verifies_matching_password(hasher: Argon2Hasher) {
        let encoded = hasher.hash("password123").expect("hash");
        assert!(encoded.starts_with("$argon2id$"));
        assert!(hasher.verify("password123", &encoded).expect("verify"));
    }

    #[rstest]
    fn rejects_wrong_password(hasher: Argon2Hasher) {
        let encoded = hasher.hash("password123").expect("hash");
        assert!(!hasher.verify("password124", &encoded).expect("verify"));
    }

    #[rstest]
    fn salts_every_hash(hasher: Argon2Hasher) {
        let first = hasher.hash("password123").expect("hash");
        let second = hasher.hash("password123").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn malformed_hash_is_an_error(hasher: Argon2Hasher) {
        let error = hasher.verify("password123", "plain-text").expect_err("malformed");
        assert!(matches!(error, PasswordHashError::MalformedHash { .. }));
    }
}
