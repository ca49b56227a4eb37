use std::cell::RefCell;
use std::rc::Rc;

use eldom::{ClickEvent, Content, Element, EventKind, find_by_class};
use togglekit::error::WidgetError;
use togglekit::events::{Decision, EventResult};
use togglekit::widgets::{DEFAULT_TEMPLATE, Toggle, ToggleConfig};

fn templated(checked: bool) -> Toggle {
    Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .name("accept")
            .value("yes")
            .label("Accept terms")
            .checked(checked)
            .template(DEFAULT_TEMPLATE),
    )
}

fn rendered(checked: bool) -> Toggle {
    let mut toggle = templated(checked);
    toggle.render().unwrap();
    toggle
}

// ============================================================================
// Check / uncheck state
// ============================================================================

#[test]
fn test_check_uncheck_sequences_track_last_applied_state() {
    let mut toggle = rendered(false);

    toggle.check().unwrap();
    toggle.check().unwrap();
    assert!(toggle.is_checked());
    assert!(toggle.container().unwrap().has_class("tk-toggle-checked"));

    toggle.uncheck().unwrap();
    assert!(!toggle.is_checked());
    assert!(!toggle.container().unwrap().has_class("tk-toggle-checked"));

    toggle.uncheck().unwrap();
    toggle.check().unwrap();
    assert!(toggle.is_checked());
    assert!(toggle.container().unwrap().has_class("tk-toggle-checked"));
}

#[test]
fn test_check_before_render_applies_class() {
    let mut toggle = templated(false);
    toggle.check().unwrap();
    assert!(toggle.is_checked());
    assert!(toggle.container().unwrap().has_class("tk-toggle-checked"));
}

#[test]
fn test_check_without_container() {
    let mut toggle = Toggle::new(ToggleConfig::new());
    assert!(matches!(toggle.check(), Err(WidgetError::MissingContainer)));
}

#[test]
fn test_direct_state_methods_fire_no_event() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&fired);

    let mut toggle = rendered(true);
    toggle.on_change(move |event| {
        seen.borrow_mut().push(event.checked);
        Decision::Proceed
    });

    toggle.uncheck().unwrap();
    assert!(!toggle.is_checked());
    assert!(!toggle.container().unwrap().has_class("tk-toggle-checked"));
    assert!(fired.borrow().is_empty());
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn test_render_builds_icon_and_label_from_template() {
    let toggle = rendered(false);
    let container = toggle.container().unwrap();

    let icon = find_by_class(container, "tk-toggle-icon").unwrap();
    assert_eq!(icon.content, Content::None);

    let label = find_by_class(container, "tk-toggle-text").unwrap();
    assert_eq!(label.content.as_text(), Some("Accept terms"));

    assert!(container.is_bound(EventKind::Click));
}

#[test]
fn test_render_applies_initial_checked_class() {
    let toggle = rendered(true);
    assert!(toggle.container().unwrap().has_class("tk-toggle-checked"));
}

#[test]
fn test_render_twice_is_idempotent() {
    let mut toggle = rendered(false);
    let after_first = toggle.container().unwrap().clone();

    toggle.render().unwrap();
    assert_eq!(toggle.container().unwrap(), &after_first);
}

#[test]
fn test_render_without_container() {
    let mut toggle = Toggle::new(ToggleConfig::new().label("x"));
    assert!(matches!(
        toggle.render(),
        Err(WidgetError::MissingContainer)
    ));
    assert!(!toggle.is_rendered());
}

#[test]
fn test_render_with_bad_template() {
    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .template("<span>unclosed"),
    );
    assert!(matches!(toggle.render(), Err(WidgetError::Template(_))));
    assert!(!toggle.is_rendered());
}

#[test]
fn test_render_without_template_keeps_prebuilt_markup() {
    let container = Element::box_()
        .child(Element::box_().class("tk-toggle-icon"))
        .child(Element::text("Prebuilt").class("tk-toggle-text"));
    let mut toggle = Toggle::new(ToggleConfig::new().container(container));
    toggle.render().unwrap();

    let label = find_by_class(toggle.container().unwrap(), "tk-toggle-text").unwrap();
    assert_eq!(label.content.as_text(), Some("Prebuilt"));
    assert!(toggle.container().unwrap().is_bound(EventKind::Click));
}

#[test]
fn test_render_with_custom_css_prefix() {
    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .css_prefix("app-check")
            .label("hi")
            .checked(true)
            .template(DEFAULT_TEMPLATE),
    );
    toggle.render().unwrap();

    let container = toggle.container().unwrap();
    assert!(container.has_class("app-check-checked"));
    assert!(find_by_class(container, "app-check-icon").is_some());
    assert!(find_by_class(container, "app-check-text").is_some());
}

// ============================================================================
// Click dispatch
// ============================================================================

#[test]
fn test_click_checks_an_unchecked_toggle() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&fired);

    let mut toggle = rendered(false);
    toggle.on_change(move |event| {
        seen.borrow_mut().push(event.checked);
        Decision::Proceed
    });

    let result = toggle.handle_click(&ClickEvent::left(2, 1));
    assert_eq!(result, EventResult::Consumed);
    assert!(toggle.is_checked());
    assert!(toggle.container().unwrap().has_class("tk-toggle-checked"));
    assert_eq!(*fired.borrow(), vec![true]);
}

#[test]
fn test_click_unchecks_a_checked_toggle() {
    let mut toggle = rendered(true);
    let result = toggle.handle_click(&ClickEvent::left(2, 1));
    assert_eq!(result, EventResult::Consumed);
    assert!(!toggle.is_checked());
    assert!(!toggle.container().unwrap().has_class("tk-toggle-checked"));
}

#[test]
fn test_click_alternates_state() {
    let mut toggle = rendered(false);
    for expected in [true, false, true, false] {
        toggle.handle_click(&ClickEvent::left(0, 0));
        assert_eq!(toggle.is_checked(), expected);
    }
}

#[test]
fn test_vetoing_listener_suppresses_toggle_but_still_runs() {
    let calls = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&calls);

    let mut toggle = rendered(false);
    toggle.on_change(move |_| {
        *counter.borrow_mut() += 1;
        Decision::Veto
    });

    let result = toggle.handle_click(&ClickEvent::left(0, 0));
    assert_eq!(result, EventResult::Vetoed);
    assert!(!toggle.is_checked());
    assert!(!toggle.container().unwrap().has_class("tk-toggle-checked"));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_vetoing_callback_suppresses_toggle() {
    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .template(DEFAULT_TEMPLATE)
            .on_change(|_| Decision::Veto),
    );
    toggle.render().unwrap();

    assert_eq!(
        toggle.handle_click(&ClickEvent::left(0, 0)),
        EventResult::Vetoed
    );
    assert!(!toggle.is_checked());
}

#[test]
fn test_callback_and_listeners_both_run_on_click() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let from_callback = Rc::clone(&order);
    let from_listener = Rc::clone(&order);

    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .template(DEFAULT_TEMPLATE)
            .on_change(move |_| {
                from_callback.borrow_mut().push("callback");
                Decision::Proceed
            }),
    );
    toggle.on_change(move |_| {
        from_listener.borrow_mut().push("listener");
        Decision::Proceed
    });
    toggle.render().unwrap();

    toggle.handle_click(&ClickEvent::left(0, 0));
    assert_eq!(*order.borrow(), vec!["callback", "listener"]);
}

#[test]
fn test_listeners_still_run_after_callback_veto() {
    let calls = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&calls);

    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_())
            .template(DEFAULT_TEMPLATE)
            .on_change(|_| Decision::Veto),
    );
    toggle.on_change(move |_| {
        *counter.borrow_mut() += 1;
        Decision::Proceed
    });
    toggle.render().unwrap();

    assert_eq!(
        toggle.handle_click(&ClickEvent::left(0, 0)),
        EventResult::Vetoed
    );
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_change_event_carries_prospective_state() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&fired);

    let mut toggle = rendered(true);
    toggle.on_change(move |event| {
        seen.borrow_mut().push((event.widget_id.clone(), event.checked));
        Decision::Proceed
    });

    toggle.handle_click(&ClickEvent::left(0, 0));
    let events = fired.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, toggle.id());
    // Prospective state: the toggle was checked, the click unchecks it.
    assert!(!events[0].1);
}

#[test]
fn test_click_before_render_is_ignored() {
    let mut toggle = templated(false);
    assert_eq!(
        toggle.handle_click(&ClickEvent::left(0, 0)),
        EventResult::Ignored
    );
    assert!(!toggle.is_checked());
}

// ============================================================================
// Label
// ============================================================================

#[test]
fn test_set_label_updates_only_the_label_element() {
    let mut toggle = rendered(true);
    let icon_before = find_by_class(toggle.container().unwrap(), "tk-toggle-icon")
        .unwrap()
        .clone();

    toggle.set_label("Updated").unwrap();

    let container = toggle.container().unwrap();
    let label = find_by_class(container, "tk-toggle-text").unwrap();
    assert_eq!(label.content.as_text(), Some("Updated"));
    assert_eq!(toggle.label(), "Updated");

    let icon = find_by_class(container, "tk-toggle-icon").unwrap();
    assert_eq!(icon, &icon_before);
    assert!(container.has_class("tk-toggle-checked"));
    assert!(toggle.is_checked());
}

#[test]
fn test_set_label_before_render() {
    let mut toggle = templated(false);
    assert!(matches!(
        toggle.set_label("x"),
        Err(WidgetError::NotRendered)
    ));
}

#[test]
fn test_set_label_without_label_element() {
    // Pre-built markup mode with no label sub-element in the container.
    let mut toggle = Toggle::new(ToggleConfig::new().container(Element::box_()));
    toggle.render().unwrap();

    match toggle.set_label("x") {
        Err(WidgetError::MissingSubElement { class }) => {
            assert_eq!(class, "tk-toggle-text");
        }
        other => panic!("expected MissingSubElement, got {other:?}"),
    }
}

// ============================================================================
// Dispose
// ============================================================================

#[test]
fn test_dispose_unbinds_click() {
    let mut toggle = rendered(false);
    toggle.dispose();

    assert!(toggle.is_disposed());
    assert!(!toggle.container().unwrap().is_bound(EventKind::Click));
    assert_eq!(
        toggle.handle_click(&ClickEvent::left(0, 0)),
        EventResult::Ignored
    );
    assert!(!toggle.is_checked());
}

#[test]
fn test_dispose_is_idempotent() {
    let mut toggle = rendered(false);
    toggle.dispose();
    toggle.dispose();
    assert!(toggle.is_disposed());
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_config_fields_are_exposed() {
    let toggle = rendered(false);
    assert_eq!(toggle.name(), "accept");
    assert_eq!(toggle.value(), Some("yes"));
    assert_eq!(toggle.label(), "Accept terms");
    assert!(toggle.id().starts_with("__toggle_"));
}

#[test]
fn test_take_container_reclaims_the_element() {
    let mut toggle = rendered(true);
    let container = toggle.take_container().unwrap();
    assert!(container.has_class("tk-toggle-checked"));
    assert!(toggle.container().is_none());
}
