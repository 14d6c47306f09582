// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch basics.
//!
//! Declares a small control tree over a toy item type, resolves it, and routes clicks by
//! class through the dispatch table. The duplicate `"bump"` class shows last-write-wins.
//!
//! Run:
//! - `cargo run -p cardview_demos --example dispatch_basics`

use std::cell::Cell;

use cardview_components::diagnostics::TracingSink;
use cardview_components::dispatch::DispatchTable;
use cardview_components::field::FieldValue;
use cardview_components::resolve::resolve_controls;
use cardview_components::types::ControlDescriptor;

struct Counter {
    name: &'static str,
    count: Cell<u32>,
}

struct Board;

type Control = ControlDescriptor<Counter, Board>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let controls: Vec<Control> = vec![
        ControlDescriptor::group(
            "steps",
            vec![
                ControlDescriptor::new()
                    .label("+1")
                    .class("bump")
                    .on_click(|_, c: &Counter, _| c.count.set(c.count.get() + 1)),
                ControlDescriptor::new()
                    .label("+10")
                    .class("bump")
                    .on_click(|_, c: &Counter, _| c.count.set(c.count.get() + 10)),
            ],
        ),
        ControlDescriptor::new()
            .label("Reset")
            .class("reset")
            .disabled(FieldValue::computed(|c: &Counter, _: &Board| {
                c.count.get() == 0
            }))
            .on_click(|_, c: &Counter, _| c.count.set(0)),
        // No class: reported to the sink and left out of the table.
        ControlDescriptor::new().label("Orphan"),
    ];

    let counter = Counter {
        name: "clicks",
        count: Cell::new(0),
    };
    let table = DispatchTable::build(&controls, &mut TracingSink);
    println!("== Bound classes ==");
    for class in table.classes() {
        println!("  {class}");
    }

    println!("== Clicks on {} ==", counter.name);
    let clicks: [&[&str]; 3] = [&["bump"], &["reset", "bump"], &["unbound"]];
    for classes in clicks {
        let ran = table.dispatch(classes.iter().copied(), &(), &counter, &Board);
        println!("  {classes:?} ran {ran} handler(s), count = {}", counter.count.get());
    }

    println!("== Resolved ==");
    for control in resolve_controls(&counter, &Board, &controls, &mut TracingSink) {
        println!(
            "  {:<8} class={:?} disabled={} children={}",
            control.label,
            control.class,
            control.disabled,
            control.controls.len()
        );
    }
}
