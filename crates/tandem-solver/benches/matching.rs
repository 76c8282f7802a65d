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

//! Wall-clock benchmarks over fully connected random rosters.
//!
//! Roster mix: 70% of participants capped at 1 meeting, 10% at 2, 20% at 3.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use std::time::Duration;
use tandem_model::{capacity::CapacityVector, index::ParticipantIndex, weights::WeightMatrix};
use tandem_solver::inclusive_matching;

const CAP_1_RATIO: f64 = 0.7;
const CAP_2_RATIO: f64 = 0.1;

fn build_instance(n: usize, rng: &mut ChaCha8Rng) -> (WeightMatrix, CapacityVector) {
    let num_cap_1 = (n as f64 * CAP_1_RATIO).round() as usize;
    let num_cap_2 = (n as f64 * CAP_2_RATIO).round() as usize;
    let num_cap_1 = num_cap_1.min(n);
    let num_cap_2 = num_cap_2.min(n - num_cap_1);

    let mut capacities = vec![1u32; num_cap_1];
    capacities.extend(std::iter::repeat(2).take(num_cap_2));
    capacities.extend(std::iter::repeat(3).take(n - num_cap_1 - num_cap_2));

    let mut weights = WeightMatrix::new(n);
    for i in 0..n {
        for j in i + 1..n {
            weights.set_pair_weight(
                ParticipantIndex::new(i),
                ParticipantIndex::new(j),
                rng.gen_range(0.01..1.0),
            );
        }
    }

    (weights, CapacityVector::from(capacities))
}

fn bench_inclusive_matching(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB1A5);
    let mut group = c.benchmark_group("inclusive_matching");
    group.sample_size(10);

    for n in [5usize, 10, 20, 40] {
        let (weights, capacities) = build_instance(n, &mut rng);
        group.throughput(Throughput::Elements(weights.num_pairs() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(weights, capacities),
            |b, (weights, capacities)| {
                b.iter(|| {
                    let matching = inclusive_matching(
                        black_box(weights),
                        black_box(capacities),
                        Some(Duration::from_secs(2)),
                    )
                    .expect("benchmark instances are solvable within budget");
                    black_box(matching.objective_value())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_inclusive_matching);
criterion_main!(benches);
