// Example: plot_surface.rs
// Sweeps the reference volatility/rate grid for a call and a put on the same
// underlying and renders each price matrix as a 3D SVG surface.
//
// Usage:
//     cargo run --example plot_surface
//
// The output images are written to surface_call.svg and surface_put.svg in
// the working directory.

use std::error::Error;

use bs_surface::{sample_surface_with_config, GridConfig, OptionType, PriceSurface};
use plotters::prelude::*;

fn draw_surface(surface: &PriceSurface, title: &str, path: &str) -> Result<(), Box<dyn Error>> {
    let vol_min = surface.vols.iter().copied().fold(f64::INFINITY, f64::min);
    let vol_max = surface.vols.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let rate_min = surface.rates.iter().copied().fold(f64::INFINITY, f64::min);
    let rate_max = surface.rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let price_max = surface
        .prices
        .iter()
        .flatten()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("{} | x: volatility, z: rate, y: price", title),
            ("sans-serif", 30),
        )
        .build_cartesian_3d(
            vol_min..vol_max,
            0.0..price_max * 1.05,
            rate_min..rate_max,
        )?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.7;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    // The closure receives axis values we supplied ourselves, so an exact
    // position lookup recovers the matrix indices.
    chart.draw_series(
        SurfaceSeries::xoz(
            surface.vols.iter().copied(),
            surface.rates.iter().copied(),
            |vol, rate| {
                let j = surface.vols.iter().position(|&v| v == vol).unwrap_or(0);
                let i = surface.rates.iter().position(|&r| r == rate).unwrap_or(0);
                surface.prices[i][j]
            },
        )
        .style(BLUE.mix(0.4).filled()),
    )?;

    root.present()?;
    println!("Chart saved to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let (spot, strike, maturity) = (110.0, 100.0, 1.0);
    let config = GridConfig::reference();

    let call_surface =
        sample_surface_with_config(OptionType::Call, spot, strike, maturity, &config)?;
    let put_surface = sample_surface_with_config(OptionType::Put, spot, strike, maturity, &config)?;

    let (rows, cols) = call_surface.shape();
    println!(
        "Sampled {}x{} grid ({} rate samples x {} volatility samples)",
        rows,
        cols,
        call_surface.rates.len(),
        call_surface.vols.len()
    );

    draw_surface(&call_surface, "Call price surface", "surface_call.svg")?;
    draw_surface(&put_surface, "Put price surface", "surface_put.svg")?;

    Ok(())
}
