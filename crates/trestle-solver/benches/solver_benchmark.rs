// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use trestle_model::{
    expedition::{Expedition, ExpeditionBuilder},
    hiker::Hiker,
};
use trestle_solver::solver::CrossingSolver;

/// Builds a synthetic expedition: `num_hikers` original hikers with spread-out
/// speeds and a chain of bridges, each introducing one straggler.
fn build_expedition(num_hikers: usize, num_bridges: usize) -> Expedition<f64> {
    let mut builder = ExpeditionBuilder::new();
    for i in 0..num_hikers {
        let speed = 100.0 / (1.0 + i as f64);
        builder.add_hiker(Hiker::new(format!("H{}", i), speed).expect("valid hiker"));
    }
    for b in 0..num_bridges {
        let straggler = Hiker::new(format!("J{}", b), 2.0 + b as f64).expect("valid hiker");
        builder
            .add_bridge(100.0 + b as f64, vec![straggler])
            .expect("valid bridge");
    }
    builder.build()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for num_hikers in [4, 16, 64, 256] {
        let expedition = build_expedition(num_hikers, 8);
        group.throughput(Throughput::Elements(num_hikers as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_hikers),
            &expedition,
            |b, expedition| {
                let solver = CrossingSolver::new();
                b.iter(|| black_box(solver.solve(black_box(expedition))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
