use atlas_core::charts::{indicator_heatmap, region_boxplot, top10_bars};
use atlas_core::theme::Theme;
use atlas_data::{Dataset, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn gen_dataset(n: usize) -> Dataset {
    let regions = [
        "Western Europe",
        "Latin America and Caribbean",
        "Sub-Saharan Africa",
        "East Asia",
        "North America and ANZ",
    ];
    let records = (0..n)
        .map(|i| {
            let score = 3.0 + ((i * 37) % 500) as f64 / 100.0;
            Record {
                country: format!("Country{i:03}"),
                region: regions[i % regions.len()].to_string(),
                ladder_score: score,
                upper_whisker: score + 0.1,
                lower_whisker: score - 0.1,
                log_gdp_per_capita: Some(7.0 + score * 0.4),
                social_support: Some(0.5 + score * 0.05),
                healthy_life_expectancy: Some(50.0 + score * 3.0),
                freedom: Some(0.4 + score * 0.06),
                generosity: Some(0.02 * score),
                corruption: Some(0.9 - score * 0.07),
                dystopia_residual: Some(1.6),
            }
        })
        .collect();
    Dataset::new(records)
}

fn bench_scenes(c: &mut Criterion) {
    let ds = gen_dataset(200);
    let theme = Theme::light();

    c.bench_function("scene_top10_bars", |b| {
        b.iter(|| {
            let _ = black_box(top10_bars(&ds, &theme));
        });
    });
    c.bench_function("scene_heatmap", |b| {
        b.iter(|| {
            let _ = black_box(indicator_heatmap(&ds, &theme));
        });
    });
    c.bench_function("scene_boxplot", |b| {
        b.iter(|| {
            let _ = black_box(region_boxplot(&ds, &theme));
        });
    });
}

criterion_group!(benches, bench_scenes);
criterion_main!(benches);
