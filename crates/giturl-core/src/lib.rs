pub mod config;
pub mod logging;

pub mod extract;
pub mod hosts;
pub mod normalize;

pub use extract::{extract_info, try_extract, ExtractError, RepoInfo};
pub use hosts::{is_secure_host, SECURE_HOSTS};
pub use normalize::normalize;
