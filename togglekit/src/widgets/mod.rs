//! Widget implementations.

pub mod toggle;

pub use toggle::{DEFAULT_TEMPLATE, Toggle, ToggleConfig};
