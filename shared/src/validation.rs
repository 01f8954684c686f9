//! Input validation
//!
//! Length and range bounds live on the request types as `validator`
//! derive rules; the helpers here cover what the derive rules cannot
//! express (trimming, character set) and are called by the services.

/// Maximum accepted username length, in bytes.
pub const MAX_USERNAME_LEN: usize = 64;

/// Maximum accepted exercise description length, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum accepted exercise duration, in seconds (24 hours).
pub const MAX_DURATION_SECS: i32 = 86_400;

/// Validate a username after trimming surrounding whitespace.
pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if trimmed.len() > MAX_USERNAME_LEN {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        ));
    }
    let username_regex = regex_lite::Regex::new(r"^[A-Za-z0-9._ -]+$").unwrap();
    if !username_regex.is_match(trimmed) {
        return Err(
            "Username may only contain letters, digits, spaces, '.', '_' and '-'".to_string(),
        );
    }
    Ok(())
}

/// Validate an exercise description after trimming.
pub fn validate_description(description: &str) -> Result<(), String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    if trimmed.len() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        ));
    }
    Ok(())
}

/// Validate an exercise duration in seconds.
pub fn validate_duration(duration: i32) -> Result<(), String> {
    if duration < 1 {
        return Err("Duration must be a positive number of seconds".to_string());
    }
    if duration > MAX_DURATION_SECS {
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("fcc_test").is_ok());
        assert!(validate_username("Jane Doe-2").is_ok());
        assert!(validate_username("  spaced  ").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("tab\tname").is_err());
        assert!(validate_username("emoji🏃").is_err());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("morning run").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert!(validate_description(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration(1).is_ok());
        assert!(validate_duration(1800).is_ok());
        assert!(validate_duration(MAX_DURATION_SECS).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(-30).is_err());
        assert!(validate_duration(MAX_DURATION_SECS + 1).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_alphanumeric_usernames_valid(name in "[A-Za-z0-9]{1,64}") {
            prop_assert!(validate_username(&name).is_ok());
        }

        #[test]
        fn prop_valid_duration_range(secs in 1i32..=86_400) {
            prop_assert!(validate_duration(secs).is_ok());
        }

        #[test]
        fn prop_nonpositive_duration_invalid(secs in i32::MIN..=0) {
            prop_assert!(validate_duration(secs).is_err());
        }
    }
}
