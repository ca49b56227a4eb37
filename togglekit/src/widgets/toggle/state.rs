//! Toggle widget state.

use eldom::{Element, EventKind, find_by_class_mut};

use crate::error::WidgetError;
use crate::events::{Decision, WidgetEvent, WidgetEventKind};
use crate::widget::WidgetCore;

/// Callback invoked with the prospective change before it is applied.
pub type ChangeCallback = Box<dyn FnMut(&WidgetEvent) -> Decision>;

/// Configuration for a [`Toggle`].
///
/// # Example
///
/// ```
/// use eldom::Element;
/// use togglekit::widgets::{Toggle, ToggleConfig, DEFAULT_TEMPLATE};
///
/// let mut toggle = Toggle::new(
///     ToggleConfig::new()
///         .container(Element::box_())
///         .name("accept")
///         .label("Accept terms")
///         .template(DEFAULT_TEMPLATE),
/// );
/// toggle.render().unwrap();
/// assert!(!toggle.is_checked());
/// ```
pub struct ToggleConfig {
    pub(super) container: Option<Element>,
    pub(super) css_prefix: String,
    pub(super) name: String,
    pub(super) value: Option<String>,
    pub(super) label: String,
    pub(super) checked: bool,
    pub(super) template: Option<String>,
    pub(super) on_change: Option<ChangeCallback>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            container: None,
            css_prefix: "tk-toggle".to_string(),
            name: String::new(),
            value: None,
            label: String::new(),
            checked: false,
            template: None,
            on_change: None,
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container element the widget renders into.
    pub fn container(mut self, container: Element) -> Self {
        self.container = Some(container);
        self
    }

    /// Set the class prefix used for the checked/icon/text classes.
    pub fn css_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.css_prefix = prefix.into();
        self
    }

    /// Set the widget name identifier.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the opaque widget value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the initial checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the markup template rendered into the container. Without one,
    /// the container markup is assumed to be pre-built externally.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the callback consulted with the prospective change.
    pub fn on_change(mut self, callback: impl FnMut(&WidgetEvent) -> Decision + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("container", &self.container.as_ref().map(|c| &c.id))
            .field("css_prefix", &self.css_prefix)
            .field("name", &self.name)
            .field("value", &self.value)
            .field("label", &self.label)
            .field("checked", &self.checked)
            .field("template", &self.template)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// A checkbox-style toggle widget.
///
/// `Toggle` owns its container element, reflects its checked state as a
/// `{prefix}-checked` class on it, toggles on click, and notifies
/// `change` listeners with the prospective state before applying it.
///
/// # Example
///
/// ```
/// use eldom::{ClickEvent, Element};
/// use togglekit::events::EventResult;
/// use togglekit::widgets::{Toggle, ToggleConfig, DEFAULT_TEMPLATE};
///
/// let mut toggle = Toggle::new(
///     ToggleConfig::new()
///         .container(Element::box_())
///         .label("Notifications")
///         .template(DEFAULT_TEMPLATE),
/// );
/// toggle.render().unwrap();
///
/// let result = toggle.handle_click(&ClickEvent::left(1, 1));
/// assert_eq!(result, EventResult::Consumed);
/// assert!(toggle.is_checked());
/// ```
pub struct Toggle {
    /// Lifecycle core (identity, listeners, disposal)
    pub(super) core: WidgetCore,
    /// Container element, owned for the widget's whole lifecycle
    pub(super) container: Option<Element>,
    pub(super) css_prefix: String,
    pub(super) name: String,
    pub(super) value: Option<String>,
    pub(super) label: String,
    /// Mirrors the `{prefix}-checked` class on the container
    pub(super) checked: bool,
    pub(super) template: Option<String>,
    pub(super) on_change: Option<ChangeCallback>,
    /// Guard for render idempotence
    pub(super) rendered: bool,
}

impl Toggle {
    /// Create a toggle from its configuration. No DOM mutation happens
    /// until [`render`](Self::render).
    pub fn new(config: ToggleConfig) -> Self {
        Self {
            core: WidgetCore::new("toggle"),
            container: config.container,
            css_prefix: config.css_prefix,
            name: config.name,
            value: config.value,
            label: config.label,
            checked: config.checked,
            template: config.template,
            on_change: config.on_change,
            rendered: false,
        }
    }

    /// Build a css class name under the widget prefix.
    pub(super) fn class_name(&self, part: &str) -> String {
        if part.is_empty() {
            self.css_prefix.clone()
        } else {
            format!("{}-{}", self.css_prefix, part)
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the widget ID.
    pub fn id(&self) -> &str {
        self.core.id()
    }

    /// Get the widget name identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the opaque widget value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Get the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if the toggle is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether `render()` has completed.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Whether `dispose()` has run.
    pub fn is_disposed(&self) -> bool {
        self.core.is_disposed()
    }

    /// Borrow the container element, if one is configured.
    pub fn container(&self) -> Option<&Element> {
        self.container.as_ref()
    }

    /// Take the container element out of the widget.
    pub fn take_container(&mut self) -> Option<Element> {
        self.container.take()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Check the toggle: add the checked class and set state to `true`.
    /// No notification fires; direct state methods bypass listeners.
    pub fn check(&mut self) -> Result<(), WidgetError> {
        self.set_checked(true)
    }

    /// Uncheck the toggle: remove the checked class and set state to
    /// `false`. No notification fires.
    pub fn uncheck(&mut self) -> Result<(), WidgetError> {
        self.set_checked(false)
    }

    pub(super) fn set_checked(&mut self, checked: bool) -> Result<(), WidgetError> {
        let class = self.class_name("checked");
        let Some(container) = self.container.as_mut() else {
            return Err(WidgetError::MissingContainer);
        };
        if self.checked == checked {
            return Ok(());
        }
        if checked {
            container.add_class(class);
        } else {
            container.remove_class(&class);
        }
        self.checked = checked;
        log::debug!("{}: checked = {}", self.core.id(), checked);
        Ok(())
    }

    /// Replace the inner content of the label sub-element.
    pub fn set_label(&mut self, text: impl Into<String>) -> Result<(), WidgetError> {
        if !self.rendered {
            return Err(WidgetError::NotRendered);
        }
        let class = self.class_name("text");
        let Some(container) = self.container.as_mut() else {
            return Err(WidgetError::MissingContainer);
        };
        let Some(target) = find_by_class_mut(container, &class) else {
            return Err(WidgetError::missing_sub_element(class));
        };
        let text = text.into();
        target.set_text(text.clone());
        self.label = text;
        Ok(())
    }

    /// Register a `change` listener on the lifecycle core.
    pub fn on_change(&mut self, listener: impl FnMut(&WidgetEvent) -> Decision + 'static) {
        self.core.on(WidgetEventKind::Change, listener);
    }

    /// Unbind the click binding, then release the lifecycle through the
    /// core. Idempotent.
    pub fn dispose(&mut self) {
        if self.core.is_disposed() {
            return;
        }
        if let Some(container) = self.container.as_mut() {
            container.unbind_event(EventKind::Click);
        }
        self.core.dispose();
    }
}

impl std::fmt::Debug for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggle")
            .field("id", &self.core.id())
            .field("name", &self.name)
            .field("checked", &self.checked)
            .field("rendered", &self.rendered)
            .field("disposed", &self.core.is_disposed())
            .finish()
    }
}
