// File: crates/demo/src/main.rs
// Summary: Demo loads the well-being CSV and renders all ten charts to PNG + SVG.

use anyhow::{Context, Result};
use atlas_core::charts::{
    bubble_freedom, country_radar, factor_pie, indicator_heatmap, region_boxplot, region_means,
    regression_scatter, scatter_gdp, top10_bars, top10_bars_horizontal,
};
use atlas_core::render::render_to_png;
use atlas_core::scene::Scene;
use atlas_core::svg::write_scene_svg;
use atlas_core::theme::{self, Theme};
use atlas_data::{load_path, Dataset};
use std::path::{Path, PathBuf};

const DEFAULT_CSV: &str = "World-happiness-report-2024.csv";
const DEFAULT_COUNTRY: &str = "Colombia";

fn main() -> Result<()> {
    // Args: [csv path] [radar country] [theme name]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| DEFAULT_CSV.to_string());
    let country = args.next().unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
    let theme = args.next().map(|n| theme::find(&n)).unwrap_or_else(Theme::light);

    let path = Path::new(&raw);
    println!("Using input file: {}", path.display());

    let (dataset, report) = load_path(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} countries ({})", dataset.len(), report.summary());
    for col in &report.missing_columns {
        println!("  column absent, defaulted wholesale: {col}");
    }
    for cell in report.defaulted_cells.iter().take(10) {
        println!("  defaulted cell: row {} column '{}'", cell.row, cell.column);
    }
    if report.defaulted_cells.len() > 10 {
        println!("  ... and {} more", report.defaulted_cells.len() - 10);
    }

    warn_if_country_missing(&dataset, &country);

    let charts: [(&str, Scene); 10] = [
        ("chart01_top10_bars", top10_bars(&dataset, &theme)),
        ("chart02_top10_bars_h", top10_bars_horizontal(&dataset, &theme)),
        ("chart03_scatter_gdp", scatter_gdp(&dataset, &theme)),
        ("chart04_bubble_freedom", bubble_freedom(&dataset, &theme)),
        ("chart05_region_means", region_means(&dataset, &theme)),
        ("chart06_factor_pie", factor_pie(&dataset, &theme)),
        ("chart07_heatmap", indicator_heatmap(&dataset, &theme)),
        ("chart08_region_boxplot", region_boxplot(&dataset, &theme)),
        ("chart09_regression", regression_scatter(&dataset, &theme)),
        ("chart10_radar", country_radar(&dataset, &country, &theme)),
    ];

    for (name, scene) in &charts {
        let png = out_path(name, "png");
        render_to_png(scene, &png)?;
        let svg = out_path(name, "svg");
        write_scene_svg(scene, &svg)?;
        println!("Wrote {}", png.display());
    }

    Ok(())
}

fn warn_if_country_missing(dataset: &Dataset, country: &str) {
    if dataset.find_country(country).is_none() {
        eprintln!("Note: country '{country}' not in dataset; radar shows a placeholder.");
    }
}

/// Output path like target/out/<name>.<ext>.
fn out_path(name: &str, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{name}.{ext}"));
    out
}
