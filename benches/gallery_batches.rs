// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use folio::gallery::{GalleryStore, SelectedFile, Selection, SelectionOrigin};
use std::hint::black_box;

/// A batch of `count` small in-memory files.
fn batch(count: usize) -> Selection {
    Selection::new(
        SelectionOrigin::Picker,
        (0..count)
            .map(|i| SelectedFile::in_memory(format!("image-{i}.png"), None, vec![0; 4096]))
            .collect(),
    )
}

fn gallery_batches_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_batches");

    for size in [1, 16, 128] {
        group.bench_function(format!("add_batch_of_{size}"), |b| {
            b.iter_batched(
                || (GalleryStore::new(), batch(size)),
                |(mut store, selection)| black_box(store.add_images(selection)),
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("prepend_onto_512", |b| {
        b.iter_batched(
            || {
                let mut store = GalleryStore::new();
                for _ in 0..32 {
                    store.add_images(batch(16));
                }
                (store, batch(16))
            },
            |(mut store, selection)| black_box(store.add_images(selection)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, gallery_batches_benchmark);
criterion_main!(benches);
