//! Core types - pure abstractions shared across the codebase.

mod link;
mod platform;
mod state;
mod url;

pub use link::LinkKind;
pub use platform::Platform;
pub use state::{is_shutdown, setup_shutdown_handler};
pub use url::{BasePath, path_segments, split_fragment, split_query, strip_html_suffix};
