use std::collections::LinkedList;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use cursor::{CharCursor, IterCursor, SliceCursor};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, SepSeq, SepStr};
use split::{split, splits, SplitSep};

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    let mut rng = ChaCha20Rng::from_seed([
        0x2D, 0x9B, 0x41, 0x07, 0xC3, 0x5E, 0xA8, 0x16, 0x7F, 0x20, 0xD4, 0x6A,
        0x93, 0x1C, 0xE5, 0x38, 0x0B, 0x87, 0x52, 0xF9, 0x64, 0xAE, 0x3D, 0xC0,
        0x15, 0x79, 0xB2, 0x4F, 0xE6, 0x08, 0x9D, 0x31,
    ]);

    for sep_per_mille in [10, 100, 500] {
        let bytes = SepSeq {
            alphabet: b'a'..b'z',
            sep: b',',
            len: 100_000..100_001,
            sep_per_mille,
        }
        .generate(&mut rng);
        let text = SepStr {
            chars: ('a'..='z').chain(['é', '字']).collect(),
            sep: ',',
            len: 100_000..100_001,
            sep_per_mille,
        }
        .generate(&mut rng);
        let list: LinkedList<_> = bytes.iter().copied().collect();

        group
            .bench_function(BenchmarkId::new("slice", sep_per_mille), |b| {
                b.iter(|| {
                    let (first, last) = SliceCursor::bounds(&bytes);
                    let mut out = vec![];
                    split(first, last, &mut out, &&b',', |s, e| {
                        e.position() - s.position()
                    });
                    black_box(out)
                })
            })
            .bench_function(BenchmarkId::new("str", sep_per_mille), |b| {
                b.iter(|| {
                    let (first, last) = CharCursor::bounds(&text);
                    let mut out = vec![];
                    split(first, last, &mut out, &',', |s, e| s.str_to(&e));
                    black_box(out)
                })
            })
            .bench_function(BenchmarkId::new("std-str", sep_per_mille), |b| {
                b.iter(|| black_box(text.split(',').collect::<Vec<_>>()))
            })
            .bench_function(
                BenchmarkId::new("split-sep", sep_per_mille),
                |b| b.iter(|| black_box(text.split_sep(&','))),
            )
            .bench_function(BenchmarkId::new("lazy", sep_per_mille), |b| {
                b.iter(|| {
                    let (first, last) = SliceCursor::bounds(&bytes);
                    black_box(splits(first, last, |&x| x == b',').count())
                })
            })
            .bench_function(
                BenchmarkId::new("linked-list", sep_per_mille),
                |b| {
                    b.iter(|| {
                        let (first, last) = IterCursor::bounds(&list);
                        let mut out = vec![];
                        split(first, last, &mut out, &&b',', |s, e| {
                            e.position() - s.position()
                        });
                        black_box(out)
                    })
                },
            );
    }

    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
