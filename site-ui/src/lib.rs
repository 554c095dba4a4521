//! site-ui - View components for the documentation homepage
//!
//! Contains the static feature list, its display types, and the pure view
//! components that render it. The host app in `site-web` mounts these and
//! renders them to HTML for static export.

pub mod components;
pub mod display_types;
pub mod features;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use display_types::*;
pub use features::FEATURE_LIST;
