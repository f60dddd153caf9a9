//! Typed building identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::normalizer::normalize_for_matching;
use crate::validator::check_identifier;
use crate::{Error, Result};

/// A canonical building identifier: non-empty, `[a-z0-9]` only.
///
/// Holding one of these means the key has passed validation, so it can be
/// persisted and compared by plain string equality. Deserialization
/// re-validates, which catches malformed identifiers already in storage.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildingIdentifier(String);

impl BuildingIdentifier {
    /// Validate an externally supplied identifier.
    ///
    /// # Errors
    /// Returns `InvalidIdentifier` with the first problem found.
    pub fn parse(identifier: &str) -> Result<Self> {
        let result = check_identifier(identifier);
        match result.reason() {
            None => Ok(Self(identifier.to_string())),
            Some(reason) => Err(Error::InvalidIdentifier {
                identifier: identifier.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    /// Compute the identifier for a building's address and postcode.
    ///
    /// Returns `None` when nothing survives normalization; such records
    /// must not be stored under an identifier.
    pub fn from_address(address: &str, postcode: &str) -> Option<Self> {
        let id = normalize_for_matching(address, postcode);
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BuildingIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BuildingIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BuildingIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BuildingIdentifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BuildingIdentifier> for String {
    fn from(id: BuildingIdentifier) -> Self {
        id.0
    }
}
