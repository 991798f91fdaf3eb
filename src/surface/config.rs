use crate::error::SurfaceResult;
use crate::surface::arange;

/// Sweep bounds and spacing for the two surface axes.
///
/// Both axes are half-open `[min, max)` ranges walked with a fixed step,
/// so different instruments can be swept by overriding the bounds rather
/// than editing the sampler. Each field has a default matching the
/// reference sweep, which lets partial configurations deserialize cleanly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GridConfig {
    /// Lower volatility bound (inclusive)
    #[cfg_attr(feature = "serde", serde(default = "default_vol_min"))]
    pub vol_min: f64,

    /// Upper volatility bound (exclusive)
    #[cfg_attr(feature = "serde", serde(default = "default_vol_max"))]
    pub vol_max: f64,

    /// Volatility spacing
    #[cfg_attr(feature = "serde", serde(default = "default_vol_step"))]
    pub vol_step: f64,

    /// Lower rate bound (inclusive)
    #[cfg_attr(feature = "serde", serde(default = "default_rate_min"))]
    pub rate_min: f64,

    /// Upper rate bound (exclusive)
    #[cfg_attr(feature = "serde", serde(default = "default_rate_max"))]
    pub rate_max: f64,

    /// Rate spacing
    #[cfg_attr(feature = "serde", serde(default = "default_rate_step"))]
    pub rate_step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            vol_step: default_vol_step(),
            rate_min: default_rate_min(),
            rate_max: default_rate_max(),
            rate_step: default_rate_step(),
        }
    }
}

impl GridConfig {
    /// The reference sweep: volatility in [0.10, 0.50) and rate in
    /// [0.01, 0.25), both stepped by 0.02.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_surface::GridConfig;
    ///
    /// let config = GridConfig::reference();
    /// assert_eq!(config.vol_axis().unwrap().len(), 20);
    /// assert_eq!(config.rate_axis().unwrap().len(), 12);
    /// ```
    pub fn reference() -> Self {
        Self::default()
    }

    /// Builds the volatility axis for this configuration.
    pub fn vol_axis(&self) -> SurfaceResult<Vec<f64>> {
        arange(self.vol_min, self.vol_max, self.vol_step)
    }

    /// Builds the rate axis for this configuration.
    pub fn rate_axis(&self) -> SurfaceResult<Vec<f64>> {
        arange(self.rate_min, self.rate_max, self.rate_step)
    }
}

fn default_vol_min() -> f64 {
    0.10
}

fn default_vol_max() -> f64 {
    0.50
}

fn default_vol_step() -> f64 {
    0.02
}

fn default_rate_min() -> f64 {
    0.01
}

fn default_rate_max() -> f64 {
    0.25
}

fn default_rate_step() -> f64 {
    0.02
}
