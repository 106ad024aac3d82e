//! monday.com API version definitions.
//!
//! monday.com releases API versions quarterly and selects them per request
//! through the `API-Version` header. When no version is configured the header
//! is omitted and the platform's current default applies.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// monday.com API version.
///
/// # Example
///
/// ```rust
/// use monday_api::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.to_string(), "2024-10");
///
/// // Versions not known to this crate are still accepted
/// let future: ApiVersion = "2027-01".parse().unwrap();
/// assert!(!future.is_stable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-10
    V2023_10,
    /// API version 2024-01
    V2024_01,
    /// API version 2024-04
    V2024_04,
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// Version string for releases newer than this crate.
    Custom(String),
}

/// Versions this crate knows by name, oldest first.
const RELEASED: &[(ApiVersion, &str)] = &[
    (ApiVersion::V2023_10, "2023-10"),
    (ApiVersion::V2024_01, "2024-01"),
    (ApiVersion::V2024_04, "2024-04"),
    (ApiVersion::V2024_07, "2024-07"),
    (ApiVersion::V2024_10, "2024-10"),
    (ApiVersion::V2025_01, "2025-01"),
    (ApiVersion::V2025_04, "2025-04"),
    (ApiVersion::V2025_07, "2025-07"),
    (ApiVersion::V2025_10, "2025-10"),
];

impl ApiVersion {
    /// Returns the newest released version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `false` for [`ApiVersion::Custom`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the `YYYY-MM` value sent in the `API-Version` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Custom(version) => version,
            known => RELEASED
                .iter()
                .find(|(version, _)| version == known)
                .map_or("", |(_, name)| *name),
        }
    }

    /// monday releases in January, April, July and October.
    fn is_quarterly(s: &str) -> bool {
        match s.split_once('-') {
            Some((year, month)) => {
                year.len() == 4
                    && year.bytes().all(|b| b.is_ascii_digit())
                    && matches!(month, "01" | "04" | "07" | "10")
            }
            None => false,
        }
    }
}

// `YYYY-MM` strings sort chronologically.
impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| self.is_stable().cmp(&other.is_stable()))
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((version, _)) = RELEASED.iter().find(|(_, name)| *name == s) {
            return Ok(version.clone());
        }

        if Self::is_quarterly(s) {
            Ok(Self::Custom(s.to_string()))
        } else {
            Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2023-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2023_10
        );
        assert_eq!(
            " 2025-01 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2025_01
        );
    }

    #[test]
    fn test_api_version_accepts_future_quarterly_versions() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert_eq!(version.to_string(), "2026-04");
        assert!(version > ApiVersion::latest());
    }

    #[test]
    fn test_api_version_rejects_invalid_format() {
        for bad in ["2024-02", "24-01", "2024/01", "latest", "", "2024-1"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_api_version_ordering() {
        assert!(ApiVersion::V2023_10 < ApiVersion::V2024_01);
        assert!(ApiVersion::V2025_07 < ApiVersion::latest());
        assert!(ApiVersion::Custom("2022-10".to_string()) < ApiVersion::V2023_10);
    }

    #[test]
    fn test_every_released_version_round_trips_through_its_name() {
        for (version, name) in RELEASED {
            assert_eq!(version.as_str(), *name);
            assert_eq!(name.parse::<ApiVersion>().unwrap(), *version);
        }
    }
}
