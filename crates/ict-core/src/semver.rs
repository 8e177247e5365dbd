//! Semantic version strings of the form `MAJOR.MINOR.PATCH[-PRERELEASE]`.
//!
//! Equality and ordering look at the numeric components only. The pre-release
//! suffix is kept for display but does not participate in comparison, so
//! `1.2.3-rc1 == 1.2.3`, unlike semver.org precedence.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const NUMERIC_PATTERN: &str = r"^[0-9]+$";
const PRERELEASE_PATTERN: &str = r"^[0-9A-Za-z-]+$";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version `{value}`: {reason}; version must follow semantic versioning (see semver.org)")]
pub struct VersionError {
    pub value: String,
    pub reason: String,
}

/// Numeric components are kept as their digit strings, so any length is
/// accepted. Without leading zeros, a longer string is the larger number.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    major: String,
    minor: String,
    patch: String,
    prerelease: Option<String>,
}

impl Version {
    pub fn parse(value: &str) -> Result<Self, VersionError> {
        let fail = |reason: &str| VersionError {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let parts = value.split('.').collect::<Vec<_>>();
        let [major, minor, last] = parts.as_slice() else {
            return Err(fail("expected exactly three dot-separated components"));
        };

        let (patch, prerelease) = match last.split_once('-') {
            Some((patch, prerelease)) => {
                let pattern = Regex::new(PRERELEASE_PATTERN).expect("valid regex");
                if !pattern.is_match(prerelease) {
                    return Err(fail("pre-release suffix must match [0-9A-Za-z-]+"));
                }
                (patch, Some(prerelease.to_string()))
            }
            None => (*last, None),
        };

        Ok(Self {
            raw: value.to_string(),
            major: parse_component(major).ok_or_else(|| fail("invalid major component"))?,
            minor: parse_component(minor).ok_or_else(|| fail("invalid minor component"))?,
            patch: parse_component(patch).ok_or_else(|| fail("invalid patch component"))?,
            prerelease,
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn numeric(&self) -> [(usize, &str); 3] {
        [
            (self.major.len(), self.major.as_str()),
            (self.minor.len(), self.minor.as_str()),
            (self.patch.len(), self.patch.as_str()),
        ]
    }
}

/// Digits only, and no leading zero unless the component is exactly `0`.
fn parse_component(component: &str) -> Option<String> {
    let pattern = Regex::new(NUMERIC_PATTERN).expect("valid regex");
    if !pattern.is_match(component) {
        return None;
    }
    if component.len() > 1 && component.starts_with('0') {
        return None;
    }
    Some(component.to_string())
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.numeric() == other.numeric()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric().cmp(&other.numeric())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "semver_test.rs"]
mod tests;
