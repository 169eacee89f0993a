//! CLI command handlers, one file per subcommand.

mod info;
mod normalize;

pub use info::run_info;
pub use normalize::run_normalize;
