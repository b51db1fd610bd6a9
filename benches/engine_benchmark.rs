use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mukanren::prelude::*;
use mukanren::relation::{appendo, membero};

fn unify_deep_list(c: &mut Criterion) {
    let vars = LTerm::from_vec((0..100).map(LTerm::var).collect());
    let vals = LTerm::from_vec((0..100).map(|i| LTerm::from(i as isize)).collect());
    c.bench_function("unify_deep_list", |b| {
        b.iter(|| State::new().unify(black_box(&vars), black_box(&vals)).unwrap())
    });
}

fn appendo_splits(c: &mut Criterion) {
    c.bench_function("appendo_splits", |b| {
        b.iter(|| {
            run_star(|q| {
                fresh2(move |x, y| {
                    conj(
                        eq(q.clone(), lterm!([(x.clone()), (y.clone())])),
                        appendo(x, y, lterm!([1, 2, 3, 4, 5, 6, 7, 8])),
                    )
                })
            })
            .count()
        })
    });
}

fn membero_enumerate(c: &mut Criterion) {
    let l = LTerm::from_vec((0..64).map(|i| LTerm::from(i as isize)).collect());
    c.bench_function("membero_enumerate", |b| {
        b.iter(|| {
            let l = l.clone();
            run_star(move |q| membero(q, l.clone())).count()
        })
    });
}

criterion_group!(benches, unify_deep_list, appendo_splits, membero_enumerate);
criterion_main!(benches);
