/// Named events an element can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// A mouse click delivered to a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

impl ClickEvent {
    pub fn new(x: u16, y: u16, button: MouseButton) -> Self {
        Self { x, y, button }
    }

    /// A left-button click, the common case in tests and demos.
    pub fn left(x: u16, y: u16) -> Self {
        Self::new(x, y, MouseButton::Left)
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
