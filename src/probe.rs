use crate::constants::{JAVA_BIN, JAVA_VERSION_FLAG, VERSION_LINE_MARKER};
use crate::version::JavaVersion;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("No Java installation was found.")]
    NotFound,
    #[error("Unknown Java version: {0}")]
    UnparsableVersion(String),
}

/// Runs `java -version` and parses the reported runtime version.
///
/// The JVM writes its version banner to stderr, so that is the stream we
/// capture. A runtime that cannot be spawned at all is indistinguishable
/// from one that is absent, and both report as `NotFound`.
pub fn probe() -> Result<JavaVersion, ProbeError> {
    debug!("probing for a Java runtime: {JAVA_BIN} {JAVA_VERSION_FLAG}");
    let output = Command::new(JAVA_BIN)
        .arg(JAVA_VERSION_FLAG)
        .output()
        .map_err(|_| ProbeError::NotFound)?;
    parse_probe_output(&String::from_utf8_lossy(&output.stderr))
}

/// Extracts a [`JavaVersion`] from the accumulated `java -version`
/// diagnostics. Only the first line is inspected; it is expected to look
/// like `java version "1.8.0_151"`, with the version as the quoted third
/// token.
pub fn parse_probe_output(diagnostics: &str) -> Result<JavaVersion, ProbeError> {
    let line = diagnostics.lines().next().unwrap_or_default();
    if !line.contains(VERSION_LINE_MARKER) {
        return Err(ProbeError::NotFound);
    }
    let raw = line
        .split_whitespace()
        .nth(2)
        .ok_or(ProbeError::NotFound)?
        .replace('"', "");
    raw.parse()
}
