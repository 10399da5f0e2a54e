use validator::ValidateEmail;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidationError {
    #[error("This field has to be filled.")]
    Missing,
    #[error("This is not a valid email.")]
    Malformed,
}

/// An email address that passed validation. The inner value is kept exactly
/// as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupEmail(String);

impl SignupEmail {
    pub fn parse(s: String) -> Result<Self, EmailValidationError> {
        if s.is_empty() {
            return Err(EmailValidationError::Missing);
        }
        if !s.validate_email() {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(s))
    }

    /// Absent form fields are reported the same way as empty ones.
    pub fn parse_field(field: Option<String>) -> Result<Self, EmailValidationError> {
        match field {
            Some(s) => Self::parse(s),
            None => Err(EmailValidationError::Missing),
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SignupEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
