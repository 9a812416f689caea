//! Sensitive data marker for automatic redaction
//!
//! Configuration secrets such as `DB_PASSWORD` are wrapped in `Sensitive<T>`
//! so that logging the configuration never leaks them.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use paddlex_core_types::Sensitive;
///
/// let password = Sensitive::new("secret123");
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(format!("{}", password), "***REDACTED***");
/// assert_eq!(password.expose(), &"secret123");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let secret = Sensitive::new("my-secret-password");
        let debug_str = format!("{:?}", secret);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("my-secret-password"));
    }

    #[test]
    fn test_sensitive_into_inner() {
        let secret = Sensitive::new(String::from("postgres"));
        assert_eq!(secret.into_inner(), "postgres");
    }

    #[test]
    fn test_sensitive_inside_config_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct DatabaseSettings {
            user: String,
            password: Sensitive<String>,
        }

        let settings = DatabaseSettings {
            user: "postgres".to_string(),
            password: Sensitive::new("hunter2".to_string()),
        };

        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("postgres"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("hunter2"));
    }
}
