//! Newsletter sign-up input check

use crate::core::error::Error;
use crate::Result;

/// Toast text shown when the address is rejected
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Toast text shown after a successful sign-up
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

/// Trims the input and accepts it when it is non-empty and contains an `@`
pub fn validate_email(input: &str) -> Result<String> {
    let email = input.trim();

    if email.is_empty() || !email.contains('@') {
        return Err(Error::InvalidData(INVALID_EMAIL_MESSAGE.into()));
    }

    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email("  nour@example.com ").unwrap(), "nour@example.com");
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("not-an-address").is_err());
    }
}
