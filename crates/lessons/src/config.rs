use thiserror::Error;

/// Text used by the walkthrough's wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    reminder: String,
    divide_by_zero: String,
}

/// Errors that can occur when validating a walkthrough config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("reminder text must not be empty")]
    EmptyReminder,

    #[error("divide-by-zero diagnostic must not be empty")]
    EmptyDiagnostic,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new("Don't forget...", "Can't divide by 0").unwrap()
    }
}

impl Config {
    /// Creates a new config with validated text.
    ///
    /// # Errors
    ///
    /// Returns an error if either text is empty or only whitespace.
    pub fn new(
        reminder: impl Into<String>,
        divide_by_zero: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let reminder = reminder.into();
        let divide_by_zero = divide_by_zero.into();

        if reminder.trim().is_empty() {
            return Err(ConfigError::EmptyReminder);
        }
        if divide_by_zero.trim().is_empty() {
            return Err(ConfigError::EmptyDiagnostic);
        }

        Ok(Self {
            reminder,
            divide_by_zero,
        })
    }

    /// Returns the line printed after a reminded action.
    #[must_use]
    pub fn reminder(&self) -> &str {
        &self.reminder
    }

    /// Returns the line printed when a guarded division is skipped.
    #[must_use]
    pub fn divide_by_zero(&self) -> &str {
        &self.divide_by_zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text() {
        let config = Config::default();

        assert_eq!(config.reminder(), "Don't forget...");
        assert_eq!(config.divide_by_zero(), "Can't divide by 0");
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(
            Config::new("", "Can't divide by 0"),
            Err(ConfigError::EmptyReminder)
        );
        assert_eq!(
            Config::new("Remember!", "  "),
            Err(ConfigError::EmptyDiagnostic)
        );
    }

    #[test]
    fn accepts_custom_text() {
        let config = Config::new("Remember!", "No zero divisors").unwrap();

        assert_eq!(config.reminder(), "Remember!");
        assert_eq!(config.divide_by_zero(), "No zero divisors");
    }
}
