use super::{CommandRunner, ExecOutcome};

/// Fetch a web page as markdown via the external `crwl` crawler.
///
/// The crawler extracts readable text; captchas and network errors come back
/// in its output and are the caller's problem to interpret.
pub async fn fetch_url(runner: &dyn CommandRunner, url: &str) -> ExecOutcome {
    runner.run("crwl", &[url, "-o", "markdown"], None).await
}
