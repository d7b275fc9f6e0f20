// File: crates/atlas-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small scene to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use atlas_core::charts::top10_bars;
use atlas_core::render::render_to_png_bytes;
use atlas_core::scene::Mark;
use atlas_core::theme::Theme;
use atlas_data::{Dataset, Record};

fn render_bytes() -> Vec<u8> {
    let mk = |country: &str, score: f64| Record {
        country: country.to_string(),
        region: "Region".to_string(),
        ladder_score: score,
        upper_whisker: 0.0,
        lower_whisker: 0.0,
        log_gdp_per_capita: Some(9.0),
        social_support: Some(0.8),
        healthy_life_expectancy: Some(65.0),
        freedom: Some(0.7),
        generosity: Some(0.1),
        corruption: Some(0.5),
        dystopia_residual: Some(1.8),
    };
    let ds = Dataset::new(vec![
        mk("Aland", 7.1),
        mk("Borduria", 6.4),
        mk("Cordovia", 5.9),
    ]);

    let mut scene = top10_bars(&ds, &Theme::light());
    // Drop text marks to avoid font nondeterminism across platforms.
    scene.marks.retain(|m| !matches!(m, Mark::Text { .. }));
    render_to_png_bytes(&scene).expect("render bytes")
}

#[test]
fn golden_basic_bars() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_bars.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
        // Skip without failing on first run
    }
}
