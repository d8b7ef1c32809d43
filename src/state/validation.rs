//! Institutional email and name validation

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Compiled institutional email pattern, cached using OnceLock
static INSTITUTIONAL_EMAIL: OnceLock<Regex> = OnceLock::new();

fn institutional_email_pattern() -> &'static Regex {
    INSTITUTIONAL_EMAIL.get_or_init(|| {
        // ASCII-only case folding: Unicode folding would let `ſ` match `s`
        Regex::new(r"(?i-u)^[a-z0-9._%+-]+@(asu\.edu|asurite\.asu\.edu)$")
            .expect("institutional email pattern is a valid regex")
    })
}

/// Validation failure shown inline above the submit button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email is not an @asu.edu or @asurite.asu.edu address
    #[error("Please use your official ASU email address (@asu.edu)")]
    InvalidEmail,
    /// First or last name is blank
    #[error("Please enter your first and last name")]
    MissingName,
}

/// Check whether `candidate` is an institutional email address.
///
/// Purely syntactic: the local part must be one or more of `[A-Za-z0-9._%+-]`
/// and the domain must be `asu.edu` or `asurite.asu.edu`, case-insensitive.
/// The string is tested as typed, so surrounding whitespace fails the check.
pub fn is_institutional_email(candidate: &str) -> bool {
    institutional_email_pattern().is_match(candidate)
}

/// Validate a signup attempt. The email is checked before the names.
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(), ValidationError> {
    if !is_institutional_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod institutional_email {
        use super::*;

        #[test]
        fn test_accepts_asu_domain() {
            assert!(is_institutional_email("sparky@asu.edu"));
            assert!(is_institutional_email("jdoe12@asu.edu"));
        }

        #[test]
        fn test_accepts_asurite_subdomain() {
            assert!(is_institutional_email("jdoe12@asurite.asu.edu"));
        }

        #[test]
        fn test_is_case_insensitive() {
            assert!(is_institutional_email("Sparky@ASU.EDU"));
            assert!(is_institutional_email("SPARKY@Asurite.Asu.Edu"));
        }

        #[test]
        fn test_accepts_every_local_part_symbol() {
            for local in ["a.b", "a_b", "a%b", "a+b", "a-b", "A9", "."] {
                let email = format!("{local}@asu.edu");
                assert!(is_institutional_email(&email), "{email} should be valid");
            }
        }

        #[test]
        fn test_rejects_empty_string() {
            assert!(!is_institutional_email(""));
        }

        #[test]
        fn test_rejects_missing_at_sign() {
            assert!(!is_institutional_email("sparkyasu.edu"));
        }

        #[test]
        fn test_rejects_empty_local_part() {
            assert!(!is_institutional_email("@asu.edu"));
        }

        #[test]
        fn test_rejects_other_domains() {
            for email in [
                "user@gmail.com",
                "sparky@asu.com",
                "sparky@notasu.edu",
                "sparky@mail.asu.edu",
                "sparky@asu.edu.evil.com",
                "sparky@asuXedu",
                "sparky@a\u{17F}u.edu",
            ] {
                assert!(!is_institutional_email(email), "{email} should be rejected");
            }
        }

        #[test]
        fn test_rejects_disallowed_local_characters() {
            for email in [
                "spa rky@asu.edu",
                "sparky!@asu.edu",
                "a@b@asu.edu",
                "spärky@asu.edu",
                "\u{17F}parky@asu.edu",
                "\u{212A}evin@asu.edu",
            ] {
                assert!(!is_institutional_email(email), "{email} should be rejected");
            }
        }

        #[test]
        fn test_rejects_surrounding_whitespace() {
            assert!(!is_institutional_email(" sparky@asu.edu"));
            assert!(!is_institutional_email("sparky@asu.edu\n"));
        }
    }

    mod validate_signup {
        use super::*;

        #[test]
        fn test_complete_input_passes() {
            assert_eq!(validate_signup("Sparky", "Sun Devil", "sparky@asu.edu"), Ok(()));
        }

        #[test]
        fn test_empty_first_name_fails() {
            assert_eq!(
                validate_signup("", "Sun Devil", "sparky@asu.edu"),
                Err(ValidationError::MissingName)
            );
        }

        #[test]
        fn test_whitespace_last_name_fails() {
            assert_eq!(
                validate_signup("Sparky", "   ", "sparky@asu.edu"),
                Err(ValidationError::MissingName)
            );
        }

        #[test]
        fn test_email_is_checked_before_names() {
            assert_eq!(
                validate_signup("", "", "user@gmail.com"),
                Err(ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_error_messages() {
            assert_eq!(
                ValidationError::InvalidEmail.to_string(),
                "Please use your official ASU email address (@asu.edu)"
            );
            assert_eq!(
                ValidationError::MissingName.to_string(),
                "Please enter your first and last name"
            );
        }
    }
}
