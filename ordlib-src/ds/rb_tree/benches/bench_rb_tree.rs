use std::collections::BTreeSet;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rb_tree::RbTree;

fn rand_seq<T, I, R>(iter: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut res: Vec<_> = iter.into_iter().collect();
    res.shuffle(rng);
    res
}

fn bench_rb_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("rb_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x3B, 0x91, 0x0E, 0xC4, 0x7A, 0x25, 0xD8, 0x66, 0x1F, 0xB0, 0x49, 0xE3,
        0x82, 0x5D, 0x17, 0xAC, 0xF4, 0x6B, 0x30, 0x9E, 0xC7, 0x02, 0x8D, 0x54,
        0xE9, 0x13, 0xA6, 0x7F, 0x38, 0xCB, 0x60, 0x95,
    ]);
    let len = 10_usize.pow(5);
    let ins_query = rand_seq(0..len, &mut rng);
    let find_query = rand_seq(0..2 * len, &mut rng);
    let rem_query = rand_seq(0..len, &mut rng);

    let tree: RbTree<_> = ins_query.iter().copied().collect();
    let set: BTreeSet<_> = ins_query.iter().copied().collect();

    group
        .bench_function(BenchmarkId::new("rb_tree", "add-rand"), |b| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for &x in &ins_query {
                    black_box(tree.add(x));
                }
                tree
            })
        })
        .bench_function(BenchmarkId::new("btree_set", "add-rand"), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &x in &ins_query {
                    black_box(set.insert(x));
                }
                set
            })
        })
        .bench_function(BenchmarkId::new("rb_tree", "add-seq"), |b| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for x in 0..len {
                    black_box(tree.add(x));
                }
                tree
            })
        })
        .bench_function(BenchmarkId::new("btree_set", "add-seq"), |b| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for x in 0..len {
                    black_box(set.insert(x));
                }
                set
            })
        })
        .bench_function(BenchmarkId::new("rb_tree", "find-rand"), |b| {
            b.iter(|| {
                for x in &find_query {
                    black_box(tree.contains(x));
                }
            })
        })
        .bench_function(BenchmarkId::new("btree_set", "find-rand"), |b| {
            b.iter(|| {
                for x in &find_query {
                    black_box(set.contains(x));
                }
            })
        });

    group
        .bench_function(BenchmarkId::new("rb_tree", "remove-rand"), |b| {
            b.iter_batched(
                || ins_query.iter().copied().collect::<RbTree<_>>(),
                |mut tree| {
                    for x in &rem_query {
                        black_box(tree.remove(x));
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            )
        })
        .bench_function(BenchmarkId::new("btree_set", "remove-rand"), |b| {
            b.iter_batched(
                || set.clone(),
                |mut set| {
                    for x in &rem_query {
                        black_box(set.remove(x));
                    }
                    set
                },
                criterion::BatchSize::LargeInput,
            )
        });

    group.finish();
}

criterion_group!(benches, bench_rb_tree);
criterion_main!(benches);
