use std::path::Path;
use std::sync::Arc;

use super::{CommandRunner, ExecOutcome};

/// Thin wrapper over the external `slidev` CLI and its npm install path.
pub struct SlidevCli {
    runner: Arc<dyn CommandRunner>,
    node_probe: fn() -> bool,
}

fn default_node_probe() -> bool {
    which::which("node").is_ok()
}

impl SlidevCli {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            node_probe: default_node_probe,
        }
    }

    /// Substitute the Node.js detection, so tests do not depend on what is
    /// installed on the host.
    pub fn with_node_probe(runner: Arc<dyn CommandRunner>, node_probe: fn() -> bool) -> Self {
        Self { runner, node_probe }
    }

    /// Whether Node.js is on the PATH. Slidev cannot run without it.
    pub fn node_installed(&self) -> bool {
        (self.node_probe)()
    }

    pub async fn version(&self) -> ExecOutcome {
        self.runner.run("slidev", &["--version"], None).await
    }

    pub async fn install(&self) -> ExecOutcome {
        self.runner
            .run("npm", &["install", "-g", "@slidev/cli"], None)
            .await
    }

    pub async fn export(&self, project_dir: &Path, format: &str) -> ExecOutcome {
        self.runner
            .run("slidev", &["export", "--format", format], Some(project_dir))
            .await
    }

    /// Shell invocation for the interactive preview server. Returned as a
    /// descriptor for the caller to run in its own terminal; the dev server
    /// never terminates, so executing it here would block the tool call.
    /// The `yes |` prefix answers slidev's first-run prompt to install
    /// missing packages.
    pub fn preview_command(&self, project_dir: &Path) -> String {
        format!("cd {} && yes | slidev --open", project_dir.display())
    }
}
