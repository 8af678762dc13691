mod exec;
mod fetcher;
mod slidev;

pub use exec::{CommandRunner, ExecOutcome, ExecOutput, TokioCommandRunner};
pub use fetcher::fetch_url;
pub use slidev::SlidevCli;
