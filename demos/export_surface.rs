// Example: export_surface.rs
// Computes a price surface for a TOML-configured scenario and writes the
// matrix out as CSV, one row per rate sample with the volatility axis as the
// header.
//
// Usage:
//     cargo run --example export_surface -- [scenario.toml] [out.csv]
//
// Without arguments the built-in reference scenario is used and the matrix
// is written to surface.csv. A scenario file looks like:
//
//     kind = "put"
//     spot = 110.0
//     strike = 100.0
//     maturity = 1.0
//
//     [grid]
//     vol_min = 0.1
//     vol_max = 0.5
//     rate_min = 0.01
//     rate_max = 0.25

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use bs_surface::{sample_surface_with_config, GridConfig, OptionType};
use serde::Deserialize;

/// Pricing scenario as read from TOML. Grid bounds fall back to the
/// reference sweep when the [grid] table is partial or absent.
#[derive(Debug, Deserialize)]
struct Scenario {
    kind: String,
    spot: f64,
    strike: f64,
    maturity: f64,
    #[serde(default)]
    grid: GridConfig,
}

const DEFAULT_SCENARIO: &str = r#"
kind = "put"
spot = 110.0
strike = 100.0
maturity = 1.0
"#;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let scenario_toml = match args.get(1) {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading scenario {}", path))?
        }
        None => DEFAULT_SCENARIO.to_string(),
    };
    let out_path = args.get(2).map(String::as_str).unwrap_or("surface.csv");

    let scenario: Scenario =
        toml::from_str(&scenario_toml).context("parsing scenario TOML")?;

    let kind = match scenario.kind.to_lowercase().as_str() {
        "call" => OptionType::Call,
        "put" => OptionType::Put,
        other => bail!("unknown option kind '{}' (expected call or put)", other),
    };

    let surface = sample_surface_with_config(
        kind,
        scenario.spot,
        scenario.strike,
        scenario.maturity,
        &scenario.grid,
    )?;

    let (rows, cols) = surface.shape();
    println!(
        "Sampled {} {:?} prices ({} rate samples x {} volatility samples)",
        rows * cols,
        kind,
        rows,
        cols
    );

    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("creating {}", out_path))?;

    let mut header = vec!["rate".to_string()];
    header.extend(surface.vols.iter().map(|v| format!("vol_{:.4}", v)));
    writer.write_record(&header)?;

    for (i, rate) in surface.rates.iter().enumerate() {
        let mut record = vec![format!("{:.4}", rate)];
        record.extend(surface.prices[i].iter().map(|p| format!("{:.6}", p)));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Surface written to {}", out_path);
    Ok(())
}
