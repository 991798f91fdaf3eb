use crate::error::{SurfaceError, SurfaceResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exercise value against the given strike at the given underlying level.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Immutable request for a single option quote.
///
/// Carries the five scalars the Black-Scholes formula consumes. A value built
/// through [`QuoteRequest::new`] satisfies the pricing domain, so every
/// downstream evaluation is total. Two requests with the same fields compare
/// equal; there is no identity beyond the field values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuoteRequest {
    /// Current price of the underlying (must be > 0)
    pub spot: f64,
    /// Contractual exercise price (must be > 0)
    pub strike: f64,
    /// Time to maturity in years (must be > 0)
    pub maturity: f64,
    /// Annualized volatility of log-returns (must be > 0)
    pub volatility: f64,
    /// Continuously-compounded risk-free rate (any finite real)
    pub rate: f64,
}

/// Helper function to validate the five quote scalars against the domain of
/// the closed-form formula.
fn validate_quote(
    spot: f64,
    strike: f64,
    maturity: f64,
    volatility: f64,
    rate: f64,
) -> SurfaceResult<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(SurfaceError::invalid(
            "spot",
            spot,
            "must be > 0 and finite",
        ));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(SurfaceError::invalid(
            "strike",
            strike,
            "must be > 0 and finite",
        ));
    }
    // T and Vol sit in the denominator Vol * sqrt(T); zero or below is a
    // domain violation, not a quotable edge case.
    if maturity <= 0.0 || !maturity.is_finite() {
        return Err(SurfaceError::invalid(
            "maturity",
            maturity,
            "must be > 0 and finite",
        ));
    }
    if volatility <= 0.0 || !volatility.is_finite() {
        return Err(SurfaceError::invalid(
            "volatility",
            volatility,
            "must be > 0 and finite",
        ));
    }
    if !rate.is_finite() {
        return Err(SurfaceError::invalid("rate", rate, "must be finite"));
    }
    Ok(())
}

impl QuoteRequest {
    /// Creates a new quote request with validation.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        volatility: f64,
        rate: f64,
    ) -> SurfaceResult<Self> {
        validate_quote(spot, strike, maturity, volatility, rate)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            volatility,
            rate,
        })
    }

    /// Validates the current field values.
    pub fn validate(&self) -> SurfaceResult<()> {
        validate_quote(
            self.spot,
            self.strike,
            self.maturity,
            self.volatility,
            self.rate,
        )
    }

    /// Strike discounted to present value: K * e^(-rT).
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rate * self.maturity).exp()
    }
}
