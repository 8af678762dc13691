use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::SlidevMcpServer;

#[derive(Clone)]
pub struct AppState {
    pub server: Arc<Mutex<SlidevMcpServer>>,
    pub shutdown_tx: watch::Sender<bool>,
}
