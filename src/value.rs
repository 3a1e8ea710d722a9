use crate::{
    error::{Error, Result},
    validate::validate_non_empty,
};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

/// A string that is never blank and never carries surrounding whitespace.
///
/// Equality, ordering and hashing all go through the stored `str`, so the
/// wrapper hashes exactly like the text it holds. That is what allows a
/// `HashMap<NonBlankTrimmedString, _>` to be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonBlankTrimmedString(String);

impl NonBlankTrimmedString {
    /// Trim `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidValue` if `raw` is empty or whitespace only.
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        validate_non_empty(raw.as_ref()).map(|v| Self(v.to_owned()))
    }

    /// Like [`Self::new`], but for input that may be missing altogether.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidValue` if `raw` is `None` or blank.
    pub fn from_optional(raw: Option<&str>) -> Result<Self> {
        raw.ok_or_else(|| Error::invalid_value("input is absent"))
            .and_then(Self::new)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Must stay in step with `Borrow<str>`.
impl Hash for NonBlankTrimmedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for NonBlankTrimmedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Deref for NonBlankTrimmedString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NonBlankTrimmedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NonBlankTrimmedString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for NonBlankTrimmedString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for NonBlankTrimmedString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        if validate_non_empty(&value)?.len() == value.len() {
            // Already trimmed, reuse the allocation.
            return Ok(Self(value));
        }
        Self::new(value)
    }
}

impl TryFrom<&str> for NonBlankTrimmedString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<NonBlankTrimmedString> for String {
    fn from(value: NonBlankTrimmedString) -> Self {
        value.0
    }
}

impl PartialEq<str> for NonBlankTrimmedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NonBlankTrimmedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for NonBlankTrimmedString {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}
