use criterion::{Criterion, criterion_group, criterion_main};
use poly_sweep::{Interval, Method, Poly, Tolerance};
use std::hint::black_box;

pub fn single_interval(c: &mut Criterion) {
    let poly = Poly::new([6.0, -5.0, 1.0]);
    let interval = Interval {
        lower: 2.8,
        upper: 3.3,
    };

    let mut group = c.benchmark_group("one root");

    for accuracy in [1e-6, 1e-10, 1e-14] {
        let tol = Tolerance {
            value: accuracy,
            max_iter: 200,
        };
        for method in [Method::Bisection, Method::Secant, Method::Newton] {
            group.bench_with_input(format!("{method} {accuracy:?}"), &tol, |b, tol| {
                b.iter(|| method.find_root(black_box(&poly), black_box(interval), tol))
            });
        }
    }
    group.bench_function("eval", |b| b.iter(|| black_box(&poly).eval(black_box(2.9))));
    group.bench_function("eval_with_deriv", |b| {
        b.iter(|| black_box(&poly).eval_with_deriv(black_box(2.9)))
    });
}

criterion_group!(benches, single_interval);
criterion_main!(benches);
