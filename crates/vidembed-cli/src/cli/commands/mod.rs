//! CLI command handlers, one file per command.

mod page;
mod resolve;
mod watch;

pub use page::run_page;
pub use resolve::run_resolve;
pub use watch::run_watch;
