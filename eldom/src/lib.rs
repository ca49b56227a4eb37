pub mod element;
pub mod event;
pub mod markup;
pub mod query;

pub use element::{find_element, Content, Element};
pub use event::{ClickEvent, EventKind, MouseButton};
pub use markup::{parse, MarkupError};
pub use query::{collect_by_class, find_by_class, find_by_class_mut};
