use crate::constants::{JAVA_BIN, SHELL_ENTRY_POINT};
use crate::path::shell_classpath;
use anyhow::{Context, Result};
use std::io;
use std::process::{Command, ExitCode, Stdio};
use std::thread;
use tracing::debug;

/// Runs the shell JVM in proxy mode: the child owns the interactive session
/// while the launcher shuttles its three standard streams, then exits with
/// the child's status.
///
/// Each stream gets its own relay thread so a stalled consumer on one never
/// blocks the others. The stdin relay is deliberately not joined; it may sit
/// in a blocking terminal read after the child has already exited.
pub fn run_shell() -> Result<ExitCode> {
    let classpath = shell_classpath()?;
    debug!(
        "launching shell: {JAVA_BIN} -cp {} {SHELL_ENTRY_POINT}",
        classpath.display()
    );

    let mut child = Command::new(JAVA_BIN)
        .arg("-cp")
        .arg(&classpath)
        .arg(SHELL_ENTRY_POINT)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to start the shell process")?;

    let mut child_stdin = child
        .stdin
        .take()
        .context("shell process has no stdin handle")?;
    let mut child_stdout = child
        .stdout
        .take()
        .context("shell process has no stdout handle")?;
    let mut child_stderr = child
        .stderr
        .take()
        .context("shell process has no stderr handle")?;

    // Dropping child_stdin when our own stdin hits EOF lets the shell see
    // end-of-input instead of hanging.
    thread::spawn(move || {
        let _ = io::copy(&mut io::stdin(), &mut child_stdin);
    });
    let stdout_relay = thread::spawn(move || {
        let _ = io::copy(&mut child_stdout, &mut io::stdout());
    });
    let stderr_relay = thread::spawn(move || {
        let _ = io::copy(&mut child_stderr, &mut io::stderr());
    });

    let _ = stdout_relay.join();
    let _ = stderr_relay.join();
    let status = child.wait().context("failed to wait on the shell process")?;
    debug!("shell exited with {status}");

    Ok(match status.code() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        // Killed by a signal; there is no code to propagate.
        None => ExitCode::FAILURE,
    })
}
