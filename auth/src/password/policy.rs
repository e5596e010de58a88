use super::errors::PolicyError;

/// Registration-time password strength rules.
///
/// All rules must hold; validation stops at the first violated rule so the
/// returned error names one specific, correctable problem.
pub struct PasswordPolicy;

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;
    const SPECIAL_CHARS: &'static str = "!@#$%^&*()_+";

    /// Validate a candidate password against the policy.
    ///
    /// Rules: length >= 8, at least one ASCII uppercase letter, at least one
    /// digit, at least one character from `!@#$%^&*()_+`.
    ///
    /// # Arguments
    /// * `password` - Candidate plaintext password
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingUppercase` - No ASCII uppercase letter
    /// * `MissingDigit` - No ASCII digit
    /// * `MissingSpecialChar` - No character from the allowed special set
    pub fn validate(password: &str) -> Result<(), PolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PolicyError::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PolicyError::MissingDigit);
        }

        if !password.chars().any(|c| Self::SPECIAL_CHARS.contains(c)) {
            return Err(PolicyError::MissingSpecialChar {
                allowed: Self::SPECIAL_CHARS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        assert_eq!(
            PasswordPolicy::validate("abc"),
            Err(PolicyError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            PasswordPolicy::validate("password1"),
            Err(PolicyError::MissingUppercase)
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(
            PasswordPolicy::validate("Password!"),
            Err(PolicyError::MissingDigit)
        );
    }

    #[test]
    fn test_missing_special_char() {
        assert!(matches!(
            PasswordPolicy::validate("Password1"),
            Err(PolicyError::MissingSpecialChar { .. })
        ));
    }

    #[test]
    fn test_valid_passwords() {
        assert!(PasswordPolicy::validate("Password1!").is_ok());
        assert!(PasswordPolicy::validate("Secur3!pass").is_ok());
        assert!(PasswordPolicy::validate("A1+aaaaa").is_ok());
    }
}
