/// Fixed name of the slide source file inside a project directory.
pub const SLIDES_FILENAME: &str = "slides.md";

/// Default timeout for external toolchain subprocesses in seconds.
/// `npm install -g @slidev/cli` can legitimately take a while.
pub const DEFAULT_SUBPROCESS_TIMEOUT_SECS: u64 = 120;

/// Subprocess timeout, overridable via `SLIDEV_MCP_TIMEOUT_SECS`.
pub fn subprocess_timeout_secs() -> u64 {
    std::env::var("SLIDEV_MCP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SUBPROCESS_TIMEOUT_SECS)
}
