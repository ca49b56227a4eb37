//! Widget event types and veto decisions.
//!
//! Widgets fire typed notifications synchronously through their
//! [`WidgetCore`](crate::widget::WidgetCore). Listeners answer with a
//! [`Decision`]; the widget applies its default behavior only when no
//! participant vetoed.

/// Identifies which notification a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetEventKind {
    /// Value changed (toggle checked state).
    Change,
}

/// A notification delivered to widget listeners.
///
/// For `Change`, `checked` carries the *prospective* state: the value the
/// widget will hold if no listener vetoes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    /// Which kind of notification.
    pub kind: WidgetEventKind,
    /// Widget ID that fired the notification.
    pub widget_id: String,
    /// Prospective checked state.
    pub checked: bool,
}

impl WidgetEvent {
    /// Create a `Change` notification.
    pub fn change(widget_id: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: WidgetEventKind::Change,
            widget_id: widget_id.into(),
            checked,
        }
    }
}

/// A listener's verdict on a notification.
///
/// Suppression is an explicit return value; the fired event itself is an
/// immutable borrow and carries no writable veto channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    /// Let the widget apply its default behavior.
    #[default]
    Proceed,
    /// Suppress the default behavior for this interaction.
    Veto,
}

impl Decision {
    /// Check whether this decision suppresses the default behavior.
    pub fn is_veto(self) -> bool {
        matches!(self, Decision::Veto)
    }

    /// Combine with another decision; a veto from either side wins.
    pub fn and(self, other: Decision) -> Decision {
        if self.is_veto() || other.is_veto() {
            Decision::Veto
        } else {
            Decision::Proceed
        }
    }
}

/// Result of dispatching an input event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored (unbound, unrendered, or disposed widget).
    Ignored,
    /// Event was consumed and the state change applied.
    Consumed,
    /// A listener vetoed the state change; nothing was applied.
    Vetoed,
}

impl EventResult {
    /// Check if the event reached the widget at all.
    pub fn is_handled(self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
