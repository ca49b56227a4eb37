//! Toggle widget - a checkbox-style control with icon, label, and change
//! notification.

pub mod events;
pub mod render;
mod state;

pub use render::DEFAULT_TEMPLATE;
pub use state::{ChangeCallback, Toggle, ToggleConfig};
