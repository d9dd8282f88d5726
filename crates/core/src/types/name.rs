//! Customer name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomerName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerNameError {
    /// The input is empty or contains only whitespace.
    #[error("name cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A customer's display name.
///
/// Parsing trims surrounding whitespace, so `"  Juan  "` and `"Juan"` are the
/// same name. A name that is empty after trimming is rejected - the customer
/// form must not submit it to the backend.
///
/// ## Constraints
///
/// - Non-empty after trimming
/// - At most 100 characters (the backend's column width)
///
/// ## Examples
///
/// ```
/// use comandera_core::CustomerName;
///
/// let name = CustomerName::parse("  Juan  ").unwrap();
/// assert_eq!(name.as_str(), "Juan");
///
/// assert!(CustomerName::parse("").is_err());
/// assert!(CustomerName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Maximum length of a customer name.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `CustomerName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than 100
    /// characters.
    pub fn parse(s: &str) -> Result<Self, CustomerNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CustomerNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = CustomerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
