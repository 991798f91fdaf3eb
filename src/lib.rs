//! # BS-Surface: Black-Scholes Pricing and Price-Surface Sampling
//!
//! `bs-surface` is a small Rust library for quantitative finance
//! applications that need European option prices and their sensitivity to
//! volatility and interest rates as a dense 2D surface.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: closed-form Black-Scholes call/put pricing with an
//!   erf-based standard normal CDF and strict domain validation
//! - **Surface Sampler**: evaluates the engine over the full Cartesian
//!   product of a volatility axis and a rate axis at fixed spot, strike and
//!   maturity
//! - **Configurable Grids**: half-open `arange`-style axes and inclusive
//!   `linspace` axes, with caller-configurable bounds and spacing
//! - **Plain Data Out**: axes and the price matrix are handed to rendering
//!   or export collaborators as ordinary vectors
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface::{price, sample_surface_with_config, GridConfig, OptionType};
//!
//! // Price a single quote
//! let call = price(OptionType::Call, 110.0, 100.0, 1.0, 0.2, 0.05)?;
//! assert!((call - 17.66).abs() < 0.01);
//!
//! // Sweep volatility and rate over the reference grid
//! let config = GridConfig::reference();
//! let surface = sample_surface_with_config(OptionType::Put, 110.0, 100.0, 1.0, &config)?;
//!
//! let (rows, cols) = surface.shape();
//! assert_eq!(rows, surface.rates.len());
//! assert_eq!(cols, surface.vols.len());
//! # Ok::<(), bs_surface::SurfaceError>(())
//! ```
//!
//! ## Scope
//!
//! The model is the closed-form analytic formula only. Calibration, implied
//! volatility solving, Greeks, American-style exercise and numerical methods
//! (PDE, Monte-Carlo) are out of scope.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod pricing;
pub mod surface;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Error taxonomy
pub use error::{SurfaceError, SurfaceResult};

// Pricing engine
pub use pricing::{price, OptionType, QuoteRequest};

// Surface sampler and grid configuration
pub use surface::{
    arange, linspace, sample_surface, sample_surface_with_config, GridConfig, PriceSurface,
};
