//! Document transforms, applied in pass order.

pub mod active;
pub mod head;
pub mod link;

pub use active::ActiveTransform;
pub use link::{LinkTransform, ORIGINAL_ATTR, REROUTE_ATTR};
