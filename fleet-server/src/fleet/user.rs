//! Dashboard user accounts.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use serde::{Deserialize, Serialize};

use super::error::FleetError;

/// A registered user. The password is only kept as an argon2 hash.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub city: Option<String>,
}

/// Registration form. Missing fields deserialize as blank and fail validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
}

impl NewUser {
    /// Trim fields and reject blanks. A blank city becomes `None`.
    pub fn normalized(&self) -> Result<NewUser, FleetError> {
        let username = required(&self.username, "Username")?;
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FleetError::MissingField("Password"));
        }
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(NewUser {
            username,
            email,
            password: self.password.clone(),
            city,
        })
    }
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, FleetError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| FleetError::Hash(e.to_string()))
}

/// Check a password against a stored hash. A corrupt hash never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub(super) fn required(value: &str, field: &'static str) -> Result<String, FleetError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FleetError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
