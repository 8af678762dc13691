use std::path::Path;
use std::sync::Arc;

use crate::slides::SlideStore;
use crate::toolchain::{CommandRunner, SlidevCli, TokioCommandRunner};

/// Session state behind the tool façade: the slide store plus handles to the
/// external toolchain. One instance per server; the HTTP layer serializes
/// access through a mutex, so tool calls never overlap.
pub struct SlidevMcpServer {
    pub(crate) store: SlideStore,
    pub(crate) slidev: SlidevCli,
    pub(crate) runner: Arc<dyn CommandRunner>,
}

impl Default for SlidevMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidevMcpServer {
    pub fn new() -> Self {
        Self::with_runner(Arc::new(TokioCommandRunner))
    }

    /// Build a server with a substitute command runner. Tests use this to
    /// script toolchain behaviour without spawning processes.
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            store: SlideStore::new(),
            slidev: SlidevCli::new(runner.clone()),
            runner,
        }
    }

    pub fn store(&self) -> &SlideStore {
        &self.store
    }

    pub fn active_project_path(&self) -> Option<&Path> {
        self.store.active().map(|d| d.root_path.as_path())
    }
}
