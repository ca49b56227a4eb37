//! Toggle widget rendering.

use std::collections::HashMap;

use eldom::{EventKind, markup};

use crate::error::WidgetError;
use crate::template;

use super::Toggle;

/// Markup rendered into the container when a config opts into
/// self-rendering. Tokens: `iconClass`, `contentClass`, `content`.
pub const DEFAULT_TEMPLATE: &str =
    r##"<i class="#{iconClass}"></i><span class="#{contentClass}">#{content}</span>"##;

impl Toggle {
    /// Render the widget into its container.
    ///
    /// Idempotent: a second call is a no-op. With a template configured,
    /// expands the placeholder tokens and parses the result into the
    /// container's children; without one, the container markup is
    /// assumed to be pre-built externally. Applies the checked class,
    /// binds the click event, and marks the widget rendered.
    pub fn render(&mut self) -> Result<(), WidgetError> {
        if self.rendered {
            return Ok(());
        }
        if self.container.is_none() {
            return Err(WidgetError::MissingContainer);
        }

        let checked_class = self.class_name("checked");
        let children = match &self.template {
            Some(tpl) => {
                let vars = HashMap::from([
                    ("iconClass", self.class_name("icon")),
                    ("contentClass", self.class_name("text")),
                    ("content", self.label.clone()),
                ]);
                Some(markup::parse(&template::expand(tpl, &vars))?)
            }
            None => None,
        };

        let checked = self.checked;
        let Some(container) = self.container.as_mut() else {
            return Err(WidgetError::MissingContainer);
        };
        if let Some(children) = children {
            container.set_children(children);
        }
        if checked {
            container.add_class(checked_class.as_str());
        } else {
            container.remove_class(&checked_class);
        }
        container.bind_event(EventKind::Click);

        self.rendered = true;
        log::debug!("{}: rendered (checked = {})", self.core.id(), checked);
        Ok(())
    }
}
