/// Embedded Slidev usage guide served by the `get_slidev_usage` tool, so an
/// agent can learn the layout vocabulary without network access.
pub const SLIDEV_USAGE_GUIDE: &str = include_str!("assets/slidev-usage.md");
