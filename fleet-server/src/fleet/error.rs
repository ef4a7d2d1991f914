//! Fleet registry error types.

/// Errors from user and vehicle registration.
///
/// Display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FleetError {
    /// A required form field was blank
    #[error("{0} is required.")]
    MissingField(&'static str),

    /// A numeric form field did not parse
    #[error("{field} must be a whole number.")]
    InvalidNumber { field: &'static str },

    /// Email already registered
    #[error("An account with this email already exists.")]
    UserExists,

    /// Email/password pair did not match
    #[error("Invalid email or password!")]
    InvalidCredentials,

    /// Vehicle ID already registered
    #[error("Vehicle ID already exists!")]
    VehicleExists,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hash(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            FleetError::MissingField("Email").to_string(),
            "Email is required."
        );
        assert_eq!(
            FleetError::InvalidNumber { field: "Speed" }.to_string(),
            "Speed must be a whole number."
        );
        assert_eq!(
            FleetError::VehicleExists.to_string(),
            "Vehicle ID already exists!"
        );
        assert_eq!(
            FleetError::InvalidCredentials.to_string(),
            "Invalid email or password!"
        );
    }
}
