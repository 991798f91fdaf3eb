/// Grid of option prices over a volatility/rate sweep.
///
/// Rows follow the rate axis and columns the volatility axis: `prices[i][j]`
/// holds the price computed at `(rates[i], vols[j])` with spot, strike and
/// maturity held constant. The matrix always carries `rates.len()` rows of
/// `vols.len()` columns each; the sampler never emits a partially filled
/// surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSurface {
    /// Volatility samples (column axis, ascending)
    pub vols: Vec<f64>,
    /// Risk-free-rate samples (row axis, ascending)
    pub rates: Vec<f64>,
    /// Price matrix, one row per rate sample
    pub prices: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// Matrix shape as `(rows, cols)` = `(rate samples, volatility samples)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rates.len(), self.vols.len())
    }

    /// Price at `(rate index, volatility index)`, if both are in range.
    pub fn get(&self, rate_idx: usize, vol_idx: usize) -> Option<f64> {
        self.prices.get(rate_idx)?.get(vol_idx).copied()
    }
}
