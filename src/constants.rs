pub const JAVA_BIN: &str = "java";
pub const JAVA_VERSION_FLAG: &str = "-version";

/// The first line of the `java -version` diagnostics must contain this
/// substring to count as a version line.
pub const VERSION_LINE_MARKER: &str = "version";

/// Java version strings look like `1.8.0_151`: major, minor, revision, build.
pub const JAVA_VERSION_PATTERN: &str = r"(\d+)\.(\d+)\.(\d+)_(\d+)";

/// The shell requires Java 8 or above.
pub const MIN_JAVA_MINOR: u32 = 8;

pub const SHELL_ENTRY_POINT: &str = "com.antonjohansson.elasticsearchshell.EntryPoint";

/// Directory next to the launcher binary that holds the shell's jars.
pub const SHELL_LIB_DIR: &str = "lib";
