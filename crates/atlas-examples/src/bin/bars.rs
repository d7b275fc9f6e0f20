// File: crates/atlas-examples/src/bin/bars.rs
// Summary: Minimal example that renders a top-10 bar chart to PNG.

use atlas_core::charts::top10_bars;
use atlas_core::render::render_to_png;
use atlas_core::theme::Theme;
use atlas_data::{Dataset, Record};

fn main() {
    // Build a small inline dataset
    let countries = [
        ("Finland", 7.74),
        ("Denmark", 7.58),
        ("Iceland", 7.52),
        ("Sweden", 7.34),
        ("Israel", 7.34),
        ("Netherlands", 7.32),
    ];

    let records = countries
        .iter()
        .map(|(name, score)| Record {
            country: name.to_string(),
            region: "Sample".to_string(),
            ladder_score: *score,
            upper_whisker: score + 0.05,
            lower_whisker: score - 0.05,
            log_gdp_per_capita: Some(10.5),
            social_support: Some(0.9),
            healthy_life_expectancy: Some(71.0),
            freedom: Some(0.9),
            generosity: Some(0.05),
            corruption: Some(0.25),
            dystopia_residual: Some(2.0),
        })
        .collect();

    let scene = top10_bars(&Dataset::new(records), &Theme::light());
    let out = std::path::PathBuf::from("target/out/example_bars.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    render_to_png(&scene, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
