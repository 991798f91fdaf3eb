// Closed-form Black-Scholes pricing over a validated quote.  Implied
// volatility and Greeks are intentionally omitted to keep the lightweight
// focus of bs-surface.

use crate::pricing::types::QuoteRequest;

/// Standard normal CDF
pub(crate) fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// The d1/d2 intermediates shared by the call and put formulas.
///
/// Requires a quote satisfying [`QuoteRequest::validate`], which keeps the
/// denominator Vol * sqrt(T) strictly positive.
fn d1_d2(q: &QuoteRequest) -> (f64, f64) {
    let vol_sqrt_t = q.volatility * q.maturity.sqrt();
    let d1 = ((q.spot / q.strike).ln() + (q.rate + 0.5 * q.volatility.powi(2)) * q.maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    (d1, d2)
}

/// Price of a European call option under Black-Scholes assumptions.
pub(crate) fn call_price(q: &QuoteRequest) -> f64 {
    let (d1, d2) = d1_d2(q);
    q.spot * norm_cdf(d1) - q.discounted_strike() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
pub(crate) fn put_price(q: &QuoteRequest) -> f64 {
    let (d1, d2) = d1_d2(q);
    q.discounted_strike() * norm_cdf(-d2) - q.spot * norm_cdf(-d1)
}
