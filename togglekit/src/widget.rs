//! Widget lifecycle core and the render/dispose contract.
//!
//! Widgets in this kit compose a [`WidgetCore`] instead of extending a
//! base type: the core owns the widget identity and the listener
//! registry, and disposal chain-calls through [`WidgetCore::dispose`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::WidgetError;
use crate::events::{Decision, WidgetEvent, WidgetEventKind};

/// Listener invoked when a widget fires a notification.
pub type Listener = Box<dyn FnMut(&WidgetEvent) -> Decision>;

/// Generate a unique auto-incremented widget ID
fn generate_auto_id(kind: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("__{kind}_{id}")
}

/// Lifecycle collaborator embedded by concrete widgets.
pub struct WidgetCore {
    /// Unique identifier for the owning widget instance
    id: String,
    /// Whether `dispose` has run
    disposed: bool,
    /// Registered listeners, per event kind
    listeners: HashMap<WidgetEventKind, Vec<Listener>>,
}

impl WidgetCore {
    /// Create a core for a widget of the given kind (`"toggle"`, ...).
    pub fn new(kind: &str) -> Self {
        Self {
            id: generate_auto_id(kind),
            disposed: false,
            listeners: HashMap::new(),
        }
    }

    /// Get the widget ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a listener for an event kind.
    pub fn on(
        &mut self,
        kind: WidgetEventKind,
        listener: impl FnMut(&WidgetEvent) -> Decision + 'static,
    ) {
        self.listeners.entry(kind).or_default().push(Box::new(listener));
    }

    /// Fire a notification to every listener registered for its kind.
    ///
    /// Listeners run synchronously in registration order, and all of them
    /// run even after one vetoes; the combined decision is `Veto` if any
    /// listener vetoed.
    pub fn fire(&mut self, event: &WidgetEvent) -> Decision {
        let mut decision = Decision::Proceed;
        if let Some(listeners) = self.listeners.get_mut(&event.kind) {
            for listener in listeners.iter_mut() {
                decision = decision.and(listener(event));
            }
        }
        log::trace!("{}: fired {:?} -> {:?}", self.id, event.kind, decision);
        decision
    }

    /// Drop all listeners and mark the core disposed. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.listeners.clear();
        self.disposed = true;
        log::debug!("{}: disposed", self.id);
    }

    /// Check whether `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl std::fmt::Debug for WidgetCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetCore")
            .field("id", &self.id)
            .field("disposed", &self.disposed)
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

/// Render/dispose contract exposed by every widget in the kit.
pub trait Widget {
    /// Unique widget ID.
    fn id(&self) -> &str;

    /// Render into the container. Idempotent: a second call is a no-op.
    fn render(&mut self) -> Result<(), WidgetError>;

    /// Whether `render()` has completed.
    fn is_rendered(&self) -> bool;

    /// Unbind input and release the lifecycle. Idempotent.
    fn dispose(&mut self);
}
