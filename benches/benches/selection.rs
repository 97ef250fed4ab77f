// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_collection::{CollectionItem, KeyboardDelegate, ListCollection, ListKeyboardDelegate};
use understory_selection::{
    MultipleSelectionProps, MultipleSelectionState, SelectionEvent, SelectionManager,
    SelectionMode,
};

fn list(len: usize) -> ListCollection<u32> {
    (0..(len as u32))
        .map(|k| CollectionItem::new(k, format!("item {k:06}")).with_disabled(k % 17 == 0))
        .collect()
}

fn multiple() -> MultipleSelectionState<u32> {
    MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple))
}

fn bench_extend_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/extend");

    // Shift-click from the first to the last item: walks the whole collection.
    for len in [128usize, 1_024, 8_192, 65_536] {
        let collection = list(len);
        let last = len as u32 - 1;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("first_to_last", len), &collection, |b, collection| {
            b.iter_batched(
                multiple,
                |mut state| {
                    let mut manager = SelectionManager::new(collection, &mut state);
                    manager.select(&1, SelectionEvent::default());
                    manager.select(&last, SelectionEvent::shift());
                    black_box(manager.raw_selection().is_empty());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_select_all_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/select_all");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    // The `All` sentinel keeps `select_all` O(1); `is_select_all` on a
    // materialized set has to visit every selectable key.
    for len in [1_024usize, 65_536] {
        let collection = list(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("sentinel", len), &collection, |b, collection| {
            b.iter_batched(
                multiple,
                |mut state| {
                    let mut manager = SelectionManager::new(collection, &mut state);
                    manager.select_all();
                    black_box(manager.is_select_all());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("materialized", len),
            &collection,
            |b, collection| {
                b.iter_batched(
                    multiple,
                    |mut state| {
                        let mut manager = SelectionManager::new(collection, &mut state);
                        manager.set_selected_keys((0..len as u32).filter(|k| k % 17 != 0));
                        black_box(manager.is_select_all());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_type_ahead_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/key_for_search");

    // Worst case: the match sits at the end of the list.
    for len in [128usize, 1_024, 8_192] {
        let collection = list(len);
        let needle = format!("item {:06}", len - 1);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("last_item", len), &collection, |b, collection| {
            let delegate = ListKeyboardDelegate::new(collection);
            b.iter(|| black_box(delegate.key_for_search(black_box(&needle), None)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extend_selection,
    bench_select_all_queries,
    bench_type_ahead_search
);
criterion_main!(benches);
