//! Widget error types.

use eldom::MarkupError;

/// Errors surfaced by widget operations.
///
/// Operations on a widget whose DOM is absent or incomplete report the
/// failure to the caller instead of silently skipping the work.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The operation needs a container element and none was configured.
    #[error("no container element")]
    MissingContainer,

    /// The operation needs rendered markup and `render()` has not run.
    #[error("widget is not rendered")]
    NotRendered,

    /// A sub-element lookup inside the rendered markup failed.
    #[error("missing sub-element with class {class:?}")]
    MissingSubElement {
        /// The class the lookup searched for.
        class: String,
    },

    /// The expanded template did not parse as markup.
    #[error("template markup: {0}")]
    Template(#[from] MarkupError),
}

impl WidgetError {
    /// Creates a sub-element lookup failure for the given class.
    pub fn missing_sub_element(class: impl Into<String>) -> Self {
        Self::MissingSubElement {
            class: class.into(),
        }
    }
}
