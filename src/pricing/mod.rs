//! Pricing engine: closed-form European option quotes under the
//! Black-Scholes model.
//!
//! The engine is a pure function of its explicit inputs. All validation
//! happens once at entry through [`QuoteRequest::new`]; past that point the
//! formula is total and deterministic.

mod bs;
mod types;

pub use types::{OptionType, QuoteRequest};

use crate::error::SurfaceResult;

/// Price a single European option.
///
/// Evaluates the closed-form Black-Scholes formula with shared intermediates
///
/// ```text
/// d1 = (ln(S/K) + (r + Vol^2/2) * T) / (Vol * sqrt(T))
/// d2 = d1 - Vol * sqrt(T)
/// ```
///
/// giving `S*Phi(d1) - K*e^(-rT)*Phi(d2)` for calls and
/// `K*e^(-rT)*Phi(-d2) - S*Phi(-d1)` for puts, where `Phi` is the standard
/// normal CDF.
///
/// # Errors
///
/// [`SurfaceError::InvalidParameter`](crate::SurfaceError::InvalidParameter)
/// when `spot <= 0`, `strike <= 0`, `maturity <= 0`, `volatility <= 0`, or
/// any input is non-finite. The error names the offending parameter and its
/// value; a NaN/Inf price is never returned.
///
/// # Example
///
/// ```rust
/// use bs_surface::{price, OptionType};
///
/// let call = price(OptionType::Call, 110.0, 100.0, 1.0, 0.2, 0.05)?;
/// assert!((call - 17.66).abs() < 0.01);
/// # Ok::<(), bs_surface::SurfaceError>(())
/// ```
pub fn price(
    kind: OptionType,
    spot: f64,
    strike: f64,
    maturity: f64,
    volatility: f64,
    rate: f64,
) -> SurfaceResult<f64> {
    let quote = QuoteRequest::new(spot, strike, maturity, volatility, rate)?;

    Ok(match kind {
        OptionType::Call => bs::call_price(&quote),
        OptionType::Put => bs::put_price(&quote),
    })
}
