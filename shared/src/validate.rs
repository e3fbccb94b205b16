//! Local precondition checks run before any network call.
//!
//! These are cheap client-side filters, not the source of truth — the
//! authentication service performs the authoritative validation.

use validator::ValidationError;

/// Number of digits a one-time code must have.
pub const OTP_LENGTH: usize = 6;

/// Conservative email shape check: `local@domain` with at least one dot in
/// the domain, no whitespace, exactly one `@`.
pub fn email_shape(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email_empty"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("email_shape"));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::new("email_shape"));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::new("email_shape"));
    }
    // The dot must separate non-empty labels ("user@example." is not a host).
    if !domain.split('.').skip(1).any(|label| !label.is_empty()) {
        return Err(ValidationError::new("email_shape"));
    }
    Ok(())
}

/// Strip non-digit characters from a raw code input, keeping at most
/// [`OTP_LENGTH`] digits. Applied on every keystroke so the input field only
/// ever holds digits.
pub fn normalize_otp(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

/// A code is submittable only when its digit-stripped form is exactly
/// [`OTP_LENGTH`] digits long.
pub fn otp_shape(code: &str) -> Result<(), ValidationError> {
    if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("otp_length"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_shapes() {
        for email in [
            "user@example.com",
            "first.last@sub.example.co",
            "u@d.io",
            "user+tag@example.com",
        ] {
            assert!(email_shape(email).is_ok(), "{email} should pass");
        }
    }

    #[test]
    fn test_empty_email_rejected_with_distinct_code() {
        let err = email_shape("").expect_err("empty must fail");
        assert_eq!(err.code, "email_empty");
    }

    #[test]
    fn test_malformed_email_shapes_rejected() {
        for email in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@nodot",
            "user@example.",
            "user @example.com",
            "user@exa mple.com",
            "user@@example.com",
            "a@b@c.com",
        ] {
            let err = email_shape(email).expect_err(&format!("{email} should fail"));
            assert_eq!(err.code, "email_shape");
        }
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let first = email_shape("not-an-email").expect_err("should fail");
        let second = email_shape("not-an-email").expect_err("should fail");
        assert_eq!(first.code, second.code);
    }

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(normalize_otp("12a45"), "1245");
        assert_eq!(normalize_otp(" 1 2-3.4x5!6 "), "123456");
        assert_eq!(normalize_otp("abc"), "");
    }

    #[test]
    fn test_normalize_caps_at_six_digits() {
        assert_eq!(normalize_otp("123456789"), "123456");
    }

    #[test]
    fn test_otp_shape_requires_exactly_six_digits() {
        assert!(otp_shape("123456").is_ok());
        assert!(otp_shape("000000").is_ok());
        assert!(otp_shape("1245").is_err());
        assert!(otp_shape("12345").is_err());
        assert!(otp_shape("1234567").is_err());
        assert!(otp_shape("").is_err());
        assert!(otp_shape("12345a").is_err());
    }

    #[test]
    fn test_digit_stripped_short_code_rejected() {
        // "12a45" strips to "1245", length 4, so submission must be blocked.
        let normalized = normalize_otp("12a45");
        assert!(otp_shape(&normalized).is_err());
    }
}
