//! Checkbox Walkthrough Example
//!
//! Demonstrates the Toggle widget lifecycle:
//! - Render the default icon+label markup into a container
//! - Observe change notifications on click
//! - Veto an interaction from a listener
//! - Dispose and confirm clicks stop reaching the widget

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use togglekit::prelude::*;

fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Trace,
        Config::default(),
        File::create("checkbox-demo.log").expect("create log file"),
    );

    let mut toggle = Toggle::new(
        ToggleConfig::new()
            .container(Element::box_().id("demo-toggle"))
            .name("accept")
            .label("Accept terms")
            .template(DEFAULT_TEMPLATE)
            .on_change(|event| {
                println!("  on_change: prospective checked = {}", event.checked);
                Decision::Proceed
            }),
    );
    toggle.render().expect("render toggle");
    println!("rendered: checked = {}", toggle.is_checked());

    let click = ClickEvent::left(2, 1);

    println!("click #1:");
    let result = toggle.handle_click(&click);
    println!("  -> {result:?}, checked = {}", toggle.is_checked());

    // A listener that refuses to let the box be unchecked.
    toggle.on_change(|event| {
        if event.checked {
            Decision::Proceed
        } else {
            println!("  listener: vetoing uncheck");
            Decision::Veto
        }
    });

    println!("click #2 (vetoed):");
    let result = toggle.handle_click(&click);
    println!("  -> {result:?}, checked = {}", toggle.is_checked());

    toggle.set_label("Terms accepted").expect("set label");
    println!("label is now {:?}", toggle.label());

    toggle.dispose();
    println!("click after dispose:");
    let result = toggle.handle_click(&click);
    println!("  -> {result:?}, checked = {}", toggle.is_checked());
}
