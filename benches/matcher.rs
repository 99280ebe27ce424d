// benches/matcher.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use amacombos::{
    combos::{Combination, CombinationSet},
    config::options::MatchKeys,
    glaze::format_label,
    matcher,
    pair::GlazePair,
    selection::Selection,
};

// A dataset shaped like the real one: every pair among `n` glazes.
fn synthetic(n: usize) -> (CombinationSet, Vec<String>) {
    let ids: Vec<String> = (0..n).map(|i| format!("pc-{i}-glaze-number-{i}")).collect();
    let mut set = CombinationSet::new();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            set.push(
                GlazePair::new(a.clone(), b.clone()),
                Combination::new(format!("https://x.test/{a}-over-{b}"), "https://x.test/i.jpg"),
            );
        }
    }
    (set, ids)
}

fn bench_matcher(c: &mut Criterion) {
    let (set, ids) = synthetic(120);
    let selection: Selection = ids.iter().step_by(7).map(|id| format_label(id)).collect();

    c.bench_function("filter_labels", |b| {
        b.iter(|| {
            let hits = matcher::filter(black_box(&set), black_box(&selection), MatchKeys::Labels);
            black_box(hits.len())
        })
    });

    let raw: Selection = ids.iter().step_by(7).collect();
    c.bench_function("filter_raw_ids", |b| {
        b.iter(|| {
            let hits = matcher::filter(black_box(&set), black_box(&raw), MatchKeys::RawIds);
            black_box(hits.len())
        })
    });

    c.bench_function("format_label", |b| {
        b.iter(|| {
            for id in &ids {
                black_box(format_label(black_box(id)));
            }
        })
    });

    c.bench_function("directed_candidates_12", |b| {
        let twelve: Selection = ids.iter().take(12).collect();
        b.iter(|| black_box(matcher::directed_candidates(black_box(&twelve)).len()))
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
