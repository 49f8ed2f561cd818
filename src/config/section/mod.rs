//! Configuration section definitions.

mod detect;
mod nav;
mod rewrite;
mod site;
mod watch;

pub use detect::DetectConfig;
pub use nav::NavConfig;
pub use rewrite::RewriteConfig;
pub use site::SiteConfig;
pub use watch::WatchConfig;
