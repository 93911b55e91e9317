use crate::constants::JAVA_VERSION_PATTERN;
use crate::probe::ProbeError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A Java runtime version as reported by `java -version`, e.g. `1.8.0_151`.
///
/// Fields are numeric so comparisons are numeric too; minor `10` is newer
/// than minor `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
    pub build: u32,
}

impl JavaVersion {
    /// The Java 8+ gate. Legacy runtimes report `1.x.y_z` with the platform
    /// version in the minor component; Java 9 and later moved it to major,
    /// so any major above 1 passes.
    pub fn meets_minimum_minor(&self, minor: u32) -> bool {
        self.major > 1 || self.minor >= minor
    }
}

impl FromStr for JavaVersion {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Unanchored on purpose: `1.8.0_151-b12` still carries a usable
        // version prefix.
        let pattern = Regex::new(JAVA_VERSION_PATTERN).expect("version pattern is valid");
        let captures = pattern
            .captures(s)
            .ok_or_else(|| ProbeError::UnparsableVersion(s.to_string()))?;

        let group = |i: usize| -> Result<u32, ProbeError> {
            captures
                .get(i)
                .ok_or_else(|| ProbeError::UnparsableVersion(s.to_string()))?
                .as_str()
                .parse()
                .map_err(|_| ProbeError::UnparsableVersion(s.to_string()))
        };

        Ok(Self {
            major: group(1)?,
            minor: group(2)?,
            revision: group(3)?,
            build: group(4)?,
        })
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}_{}",
            self.major, self.minor, self.revision, self.build
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version_string() {
        let version: JavaVersion = "1.8.0_151".parse().unwrap();
        assert_eq!(
            version,
            JavaVersion {
                major: 1,
                minor: 8,
                revision: 0,
                build: 151
            }
        );
    }

    #[test]
    fn parses_version_string_with_trailing_build_info() {
        let version: JavaVersion = "1.8.0_292-b10".parse().unwrap();
        assert_eq!(version.build, 292);
    }

    #[test]
    fn rejects_strings_without_the_full_pattern() {
        for raw in ["9-ea", "17", "1.8", "1.8.0", ""] {
            assert_eq!(
                raw.parse::<JavaVersion>(),
                Err(ProbeError::UnparsableVersion(raw.to_string())),
                "expected {raw:?} to be unparsable"
            );
        }
    }

    #[test]
    fn minor_comparison_is_numeric() {
        let nine: JavaVersion = "1.9.0_0".parse().unwrap();
        let ten: JavaVersion = "1.10.0_0".parse().unwrap();
        assert!(ten.minor > nine.minor);
        assert!(ten.meets_minimum_minor(9));
    }

    #[test]
    fn gate_accepts_eight_and_above() {
        let old: JavaVersion = "1.7.0_80".parse().unwrap();
        let supported: JavaVersion = "1.8.0_151".parse().unwrap();
        let modern: JavaVersion = "9.0.1_0".parse().unwrap();
        assert!(!old.meets_minimum_minor(8));
        assert!(supported.meets_minimum_minor(8));
        assert!(modern.meets_minimum_minor(8));
    }

    #[test]
    fn displays_in_java_notation() {
        let version: JavaVersion = "1.8.0_151".parse().unwrap();
        assert_eq!(version.to_string(), "1.8.0_151");
    }
}
