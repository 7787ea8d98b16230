//! Unit types: Dp and the per-frame metric conversion

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Conversion factors between device-independent units and pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Pixels per [`Dp`].
    pub px_per_dp: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self { px_per_dp: 1.0 }
    }
}

impl Metrics {
    pub fn new(px_per_dp: f32) -> Self {
        Self { px_per_dp }
    }

    /// Converts `dp` to pixels, rounded to the nearest whole pixel.
    pub fn dp(&self, dp: Dp) -> i32 {
        dp.to_px(self.px_per_dp).round() as i32
    }

    /// Converts `dp` to fractional pixels.
    pub fn dp_f32(&self, dp: Dp) -> f32 {
        dp.to_px(self.px_per_dp)
    }
}
