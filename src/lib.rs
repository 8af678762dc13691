pub mod config;
pub mod guide;
pub mod http;
pub mod mcp;
pub mod protocol;
pub mod slides;
pub mod toolchain;

pub use mcp::SlidevMcpServer;
