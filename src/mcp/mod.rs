pub mod handlers;
mod server;
pub mod tools;

pub use server::SlidevMcpServer;
