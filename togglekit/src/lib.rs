pub mod error;
pub mod events;
pub mod template;
pub mod widget;
pub mod widgets;

pub use error::WidgetError;
pub use widget::{Widget, WidgetCore};

pub mod prelude {
    pub use crate::error::WidgetError;
    pub use crate::events::{Decision, EventResult, WidgetEvent, WidgetEventKind};
    pub use crate::widget::{Widget, WidgetCore};
    pub use crate::widgets::{DEFAULT_TEMPLATE, Toggle, ToggleConfig};

    pub use eldom::{ClickEvent, Element, EventKind, MouseButton};
}
