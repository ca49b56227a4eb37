//! Event handling for the Toggle widget.

use eldom::{ClickEvent, EventKind};

use crate::error::WidgetError;
use crate::events::{Decision, EventResult, WidgetEvent};
use crate::widget::Widget;

use super::Toggle;

impl Toggle {
    /// Dispatch a click on the container.
    ///
    /// Computes the prospective state, consults the `on_change` callback
    /// and the registered `change` listeners, and toggles unless one of
    /// them vetoed. Clicks on a disposed, unrendered, or unbound widget
    /// are ignored.
    pub fn handle_click(&mut self, event: &ClickEvent) -> EventResult {
        if self.core.is_disposed() || !self.rendered {
            return EventResult::Ignored;
        }
        let bound = self
            .container
            .as_ref()
            .is_some_and(|c| c.is_bound(EventKind::Click));
        if !bound {
            return EventResult::Ignored;
        }

        let prospective = !self.checked;
        let change = WidgetEvent::change(self.core.id(), prospective);
        log::trace!(
            "{}: click at ({}, {}), prospective checked = {}",
            self.core.id(),
            event.x,
            event.y,
            prospective
        );

        let mut decision = Decision::Proceed;
        if let Some(callback) = self.on_change.as_mut() {
            decision = decision.and(callback(&change));
        }
        decision = decision.and(self.core.fire(&change));

        if decision.is_veto() {
            return EventResult::Vetoed;
        }

        let applied = if prospective {
            self.check()
        } else {
            self.uncheck()
        };
        debug_assert!(applied.is_ok(), "container vanished mid-dispatch");
        EventResult::Consumed
    }
}

impl Widget for Toggle {
    fn id(&self) -> &str {
        Toggle::id(self)
    }

    fn render(&mut self) -> Result<(), WidgetError> {
        Toggle::render(self)
    }

    fn is_rendered(&self) -> bool {
        Toggle::is_rendered(self)
    }

    fn dispose(&mut self) {
        Toggle::dispose(self)
    }
}
