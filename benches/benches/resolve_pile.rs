// Copyright 2026 the Cardview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;

use cardview_components::diagnostics::IgnoreDiagnostics;
use cardview_components::dispatch::DispatchTable;
use cardview_components::field::FieldValue;
use cardview_components::resolve::render_context;
use cardview_components::types::{
    BadgeDescriptor, ComponentSet, ControlDescriptor, MarkerDescriptor,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

struct Item {
    name: String,
    value: u32,
    face: Cell<u32>,
    marked: bool,
}

struct Pile {
    owner: bool,
}

type Control = ControlDescriptor<Item, Pile>;

fn gen_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            name: format!("Card {i}"),
            value: (i % 13) as u32,
            face: Cell::new(0),
            marked: i % 3 == 0,
        })
        .collect()
}

fn gen_controls(groups: usize) -> Vec<Control> {
    (0..groups)
        .map(|g| {
            ControlDescriptor::group(
                format!("group-{g}"),
                vec![
                    ControlDescriptor::new()
                        .tooltip("Next")
                        .class(format!("next-{g}"))
                        .disabled(FieldValue::computed(|_: &Item, p: &Pile| !p.owner))
                        .on_click(|_, i: &Item, _| i.face.set(i.face.get() + 1)),
                    ControlDescriptor::new()
                        .aria(FieldValue::computed(|i: &Item, _: &Pile| {
                            format!("Play {}", i.name)
                        }))
                        .class(format!("play-{g}"))
                        .hide(FieldValue::computed(|i: &Item, _: &Pile| i.value == 0))
                        .on_click(|_, i: &Item, _| i.face.set(0)),
                ],
            )
        })
        .collect()
}

fn gen_set(groups: usize) -> ComponentSet<Item, Pile> {
    ComponentSet {
        controls: gen_controls(groups),
        context_menu: gen_controls(1),
        badges: vec![
            BadgeDescriptor::new(
                "Name",
                FieldValue::computed(|i: &Item, _: &Pile| i.name.clone()),
            )
            .class("name"),
            BadgeDescriptor::new(
                "Value",
                FieldValue::computed(|i: &Item, _: &Pile| i.value.to_string()),
            )
            .class("value"),
        ],
        markers: vec![
            MarkerDescriptor::new("Marked")
                .class("marked")
                .show(FieldValue::computed(|i: &Item, _: &Pile| i.marked)),
        ],
        card_classes: vec![FieldValue::computed(|i: &Item, _: &Pile| {
            format!("face-{}", i.face.get())
        })],
    }
}

fn bench_render_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_context");
    let pile = Pile { owner: true };
    let set = gen_set(3);
    for &n in &[52usize, 520, 5200] {
        let items = gen_items(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pile_n{n}"), |b| {
            b.iter(|| {
                let ctx = render_context(&items, &pile, &set, &mut IgnoreDiagnostics);
                black_box(ctx.items.len());
            });
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let pile = Pile { owner: true };
    for &groups in &[4usize, 64, 512] {
        let controls = gen_controls(groups);
        group.throughput(Throughput::Elements((groups * 2) as u64));
        group.bench_function(format!("build_groups{groups}"), |b| {
            b.iter(|| {
                let table = DispatchTable::build(&controls, &mut IgnoreDiagnostics);
                black_box(table.len());
            });
        });

        let table = DispatchTable::build(&controls, &mut IgnoreDiagnostics);
        let last = format!("next-{}", groups - 1);
        group.bench_function(format!("click_groups{groups}"), |b| {
            b.iter_batched(
                || gen_items(1),
                |items| {
                    let ran = table.dispatch(
                        ["card", "unbound", last.as_str()],
                        &(),
                        &items[0],
                        &pile,
                    );
                    black_box(ran);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_context, bench_dispatch);
criterion_main!(benches);
