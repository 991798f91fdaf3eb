//! Surface sampler: evaluates the pricing engine over a 2D grid of
//! (volatility, risk-free rate) pairs at fixed spot, strike and maturity.
//!
//! The sweep is the full Cartesian product of the two axes, evaluated as an
//! explicit row/column loop with row = rate index and column = volatility
//! index. Every cell is an independent pure computation; the first failing
//! cell aborts the whole grid, so callers never see a partial or NaN-filled
//! matrix.

mod config;
mod types;

pub use config::GridConfig;
pub use types::PriceSurface;

use crate::error::{SurfaceError, SurfaceResult};
use crate::pricing::{price, OptionType};

/// Evenly spaced samples over the half-open interval `[start, stop)`.
///
/// The sample count is fixed up front as `ceil((stop - start) / step)` with a
/// small backoff so a span that is an exact multiple of the step does not
/// round up to an extra point, and each sample is generated as
/// `start + i * step` rather than by accumulation, so the spacing carries no
/// drift. An empty axis is returned when `start >= stop`.
///
/// # Errors
///
/// [`SurfaceError::InvalidParameter`] when either bound is non-finite or
/// `step` is not strictly positive and finite.
pub fn arange(start: f64, stop: f64, step: f64) -> SurfaceResult<Vec<f64>> {
    if !start.is_finite() {
        return Err(SurfaceError::invalid("start", start, "must be finite"));
    }
    if !stop.is_finite() {
        return Err(SurfaceError::invalid("stop", stop, "must be finite"));
    }
    if step <= 0.0 || !step.is_finite() {
        return Err(SurfaceError::invalid(
            "step",
            step,
            "must be > 0 and finite",
        ));
    }

    let count = (((stop - start) / step) - 1e-9).ceil().max(0.0) as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// `count` evenly spaced samples from `start` to `stop`, endpoints included.
///
/// A count of zero yields an empty axis (the sampler then reports
/// [`SurfaceError::EmptyAxis`]); a count of one yields just `start`.
///
/// # Errors
///
/// [`SurfaceError::InvalidParameter`] when either bound is non-finite.
pub fn linspace(start: f64, stop: f64, count: usize) -> SurfaceResult<Vec<f64>> {
    if !start.is_finite() {
        return Err(SurfaceError::invalid("start", start, "must be finite"));
    }
    if !stop.is_finite() {
        return Err(SurfaceError::invalid("stop", stop, "must be finite"));
    }

    Ok(match count {
        0 => Vec::new(),
        1 => vec![start],
        n => (0..n)
            .map(|i| start + (stop - start) * i as f64 / (n - 1) as f64)
            .collect(),
    })
}

/// Price the full (volatility, rate) grid at fixed spot, strike and maturity.
///
/// Produces `prices[i][j] = price(kind, spot, strike, maturity, vols[j],
/// rates[i])` for every axis pair. The volatility axis is expected to be
/// strictly positive and ascending; ordering does not affect per-cell
/// correctness, and domain checks are left to [`price`] itself.
///
/// # Errors
///
/// [`SurfaceError::EmptyAxis`] if either axis has zero length, checked before
/// any pricing. [`SurfaceError::InvalidParameter`] propagated from the first
/// failing grid point (possible when axis bounds are misconfigured to include
/// a volatility <= 0); the whole grid computation is abandoned and no partial
/// matrix is returned.
///
/// # Example
///
/// ```rust
/// use bs_surface::{sample_surface, OptionType};
///
/// let vols = [0.1, 0.2, 0.3];
/// let rates = [0.01, 0.05];
/// let surface = sample_surface(OptionType::Call, 110.0, 100.0, 1.0, &vols, &rates)?;
/// assert_eq!(surface.shape(), (2, 3));
/// # Ok::<(), bs_surface::SurfaceError>(())
/// ```
pub fn sample_surface(
    kind: OptionType,
    spot: f64,
    strike: f64,
    maturity: f64,
    vols: &[f64],
    rates: &[f64],
) -> SurfaceResult<PriceSurface> {
    if vols.is_empty() {
        return Err(SurfaceError::EmptyAxis { axis: "volatility" });
    }
    if rates.is_empty() {
        return Err(SurfaceError::EmptyAxis { axis: "rate" });
    }

    let mut prices = Vec::with_capacity(rates.len());
    for &rate in rates {
        let mut row = Vec::with_capacity(vols.len());
        for &vol in vols {
            row.push(price(kind, spot, strike, maturity, vol, rate)?);
        }
        prices.push(row);
    }

    Ok(PriceSurface {
        vols: vols.to_vec(),
        rates: rates.to_vec(),
        prices,
    })
}

/// Convenience wrapper building both axes from a [`GridConfig`] before
/// sampling.
pub fn sample_surface_with_config(
    kind: OptionType,
    spot: f64,
    strike: f64,
    maturity: f64,
    config: &GridConfig,
) -> SurfaceResult<PriceSurface> {
    let vols = config.vol_axis()?;
    let rates = config.rate_axis()?;
    sample_surface(kind, spot, strike, maturity, &vols, &rates)
}
