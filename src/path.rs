use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Directory the launcher binary lives in. The shell's jars are laid out
/// under `lib/` next to the binary, so the classpath is derived from here
/// rather than from the caller's working directory.
pub fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("could not locate the launcher executable")?;
    let dir = exe
        .parent()
        .context("launcher executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// The wildcard classpath entry handed to the JVM, e.g. `/opt/esshell/lib/*`.
/// The JVM expands the `*` itself; the launcher never reads the directory.
pub fn shell_classpath() -> Result<PathBuf> {
    Ok(install_dir()?.join(crate::constants::SHELL_LIB_DIR).join("*"))
}
