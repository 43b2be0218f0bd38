//! Authentication primitives: login credentials and account registration.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::ValidationErrors;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN: usize = 8;
/// Username length bounds, inclusive.
pub const USERNAME_MIN: usize = 2;
/// Upper username bound.
pub const USERNAME_MAX: usize = 30;
/// Email length bounds, inclusive.
pub const EMAIL_MIN: usize = 5;
/// Upper email bound.
pub const EMAIL_MAX: usize = 60;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the account service.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty; whitespace is kept as typed.
///
/// # Examples
/// ```
/// use jobdesk::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "password123").expect("valid");
/// assert_eq!(creds.username(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the credential lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate every registration field, reporting all failures at once.
    ///
    /// # Examples
    /// ```
    /// use jobdesk::domain::Registration;
    ///
    /// let errors = Registration::try_new(Some("x"), Some("nope"), Some("short"))
    ///     .expect_err("all three fields fail");
    /// assert_eq!(errors.iter().count(), 3);
    /// ```
    pub fn try_new(
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = errors.required("username", username).map(str::trim);
        if let Some(name) = username {
            let length = name.chars().count();
            if length < USERNAME_MIN {
                errors.add("username", "Username must be at least 2 characters long");
            } else if length > USERNAME_MAX {
                errors.add("username", "Username must be 30 characters or less");
            } else if !super::validation::username_regex().is_match(name) {
                errors.add(
                    "username",
                    "Username must contain only letters, numbers, spaces, and underscores",
                );
            }
        }

        let email = errors.required("email", email).map(str::trim);
        if let Some(address) = email {
            let length = address.chars().count();
            if !address.contains('@') || !address.contains('.') {
                errors.add("email", "Invalid email format");
            } else if length < EMAIL_MIN {
                errors.add("email", "Email must be at least 5 characters long");
            } else if length > EMAIL_MAX {
                errors.add("email", "Email must be 60 characters or less");
            }
        }

        let password = errors.required("password", password);
        if let Some(secret) = password
            && secret.chars().count() < PASSWORD_MIN
        {
            errors.add("password", "Password must be at least 8 characters long");
        }

        match (username, email, password) {
            (Some(username), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                username: username.to_owned(),
                email: email.to_owned(),
                password: Zeroizing::new(password.to_owned()),
            }),
            _ => Err(errors),
        }
    }

    /// Requested username, trimmed.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Requested email address, trimmed.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plain-text password to be hashed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
