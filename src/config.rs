use crate::optics::domain::{MAX_WAVELENGTH, MIN_WAVELENGTH};

// ---------------------------------------------------------------------------
// Explorer defaults
// ---------------------------------------------------------------------------

/// Compile-time defaults for the explorer window and the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    /// Points per dispersion curve.
    pub samples: usize,
    /// Slider bounds (µm).
    pub slider_bounds: (f64, f64),
    /// Range selected at startup (µm).
    pub default_range: (f64, f64),
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            slider_bounds: (MIN_WAVELENGTH, MAX_WAVELENGTH),
            default_range: (0.2, 4.0),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}
