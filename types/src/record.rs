//! Registry entry types.
//!
//! `UserName` and `Age` can only be built from input that already passed the
//! registry's acceptance rules, so a `UserRecord` is valid by construction.

use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use crate::UserId;

/// A display name guaranteed to be non-empty after trimming. Stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("name must not be empty")]
pub struct EmptyNameError;

impl UserName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmptyNameError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(EmptyNameError)
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for UserName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Age in years. Always finite and strictly positive; fractional values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Age(f64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("age is empty")]
    Empty,
    #[error("age {0:?} is not a number")]
    NotNumeric(String),
    #[error("age must be greater than zero")]
    NotPositive,
}

impl Age {
    pub fn new(years: f64) -> Result<Self, AgeError> {
        if !years.is_finite() {
            return Err(AgeError::NotNumeric(years.to_string()));
        }
        if years <= 0.0 {
            return Err(AgeError::NotPositive);
        }
        Ok(Self(years))
    }

    /// Parse raw form input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, AgeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AgeError::Empty);
        }
        let years: f64 = trimmed
            .parse()
            .map_err(|_| AgeError::NotNumeric(trimmed.to_owned()))?;
        Self::new(years)
    }

    #[must_use]
    pub fn years(self) -> f64 {
        self.0
    }
}

// Whole ages print without a fraction: 30.0 -> "30".
impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: UserName,
    pub age: Age,
}

impl UserRecord {
    #[must_use]
    pub fn new(id: UserId, name: UserName, age: Age) -> Self {
        Self { id, name, age }
    }

    /// Row text used by the list view, e.g. `Ann - 30 years old`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {} years old", self.name, self.age)
    }
}
