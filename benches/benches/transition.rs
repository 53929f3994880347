// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for building, mirroring, and applying transition trees.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

use passage_animator::AnyTransition;
use passage_animator::Handler;
use passage_transition::atomic::{self, AtomicTransition};
use passage_transition::builtin::{Axis, FadeStyle};
use passage_transition::{
    Container, Edge, NavigationTransition, Operation, SurfaceProperties, TransientSurface,
    navigation,
};

const EDGES: [Edge; 4] = [Edge::Leading, Edge::Trailing, Edge::Top, Edge::Bottom];

/// A push transition with `width` role-filtered leaves per level, `depth` levels deep.
fn build_tree(depth: usize, width: usize) -> AtomicTransition {
    let mut tree = atomic::identity();
    for level in 0..depth {
        let leaves = (0..width).map(|i| {
            let leaf = match (level + i) % 4 {
                0 => AtomicTransition::Move(EDGES[i % EDGES.len()]),
                1 => AtomicTransition::Opacity,
                2 => AtomicTransition::Scale(0.9),
                _ => AtomicTransition::CornerRadius(12.0),
            };
            if i % 2 == 0 {
                atomic::on_insertion(leaf)
            } else {
                atomic::on_removal(leaf)
            }
        });
        tree = atomic::sequence(tree, atomic::group(leaves));
    }
    tree
}

fn fresh_pair() -> (TransientSurface, TransientSurface) {
    (
        TransientSurface::new(SurfaceProperties::baseline()),
        TransientSurface::new(SurfaceProperties::baseline()),
    )
}

fn bench_apply(c: &mut Criterion) {
    let container = Container::new(Size::new(390.0, 844.0));
    let mut group = c.benchmark_group("transition/apply");

    for &(depth, width) in &[(1_usize, 2_usize), (4, 4), (16, 8)] {
        let transition = navigation::mirror_push(build_tree(depth, width))
            .expect("generated trees have no custom leaves");
        for operation in [Operation::Push, Operation::Pop] {
            group.bench_with_input(
                BenchmarkId::new(format!("{operation:?}"), format!("{depth}x{width}")),
                &transition,
                |b, transition| {
                    b.iter_batched(
                        fresh_pair,
                        |(mut from, mut to)| {
                            transition.apply(&mut from, &mut to, operation, &container);
                            black_box((from, to))
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_mirror(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition/mirror");
    for &(depth, width) in &[(4_usize, 4_usize), (16, 8)] {
        let tree = build_tree(depth, width);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{depth}x{width}")),
            &tree,
            |b, tree| b.iter(|| black_box(tree.mirrored())),
        );
    }
    group.finish();
}

fn bench_builtins(c: &mut Criterion) {
    let container = Container::new(Size::new(390.0, 844.0));
    let combined = AnyTransition::slide(Axis::Horizontal)
        .combined(&AnyTransition::fade(FadeStyle::Cross));
    let Handler::Declarative(combined) = combined.handler().clone() else {
        unreachable!("built-ins are declarative");
    };
    let builtins: [(&str, NavigationTransition); 3] = [
        ("slide", passage_transition::builtin::slide(Axis::Horizontal)),
        ("fade_in", passage_transition::builtin::fade(FadeStyle::In)),
        ("slide+cross_fade", combined),
    ];

    let mut group = c.benchmark_group("transition/builtin");
    for (name, transition) in &builtins {
        group.bench_function(*name, |b| {
            b.iter_batched(
                fresh_pair,
                |(mut from, mut to)| {
                    transition.apply(&mut from, &mut to, Operation::Push, &container);
                    black_box((from, to))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply, bench_mirror, bench_builtins);
criterion_main!(benches);
