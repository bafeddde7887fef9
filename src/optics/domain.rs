use thiserror::Error;

/// Lowest wavelength the UI offers (µm).
pub const MIN_WAVELENGTH: f64 = 0.1;
/// Highest wavelength the UI offers (µm).
pub const MAX_WAVELENGTH: f64 = 5.0;
/// Smallest span kept between the two range handles (µm).
pub const MIN_SPAN: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Wavelength bounds must be finite, got [{min}, {max}]")]
    NonFinite { min: f64, max: f64 },

    #[error("Wavelength range is empty: min {min} must be below max {max}")]
    Empty { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// WavelengthDomain – closed interval in µm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthDomain {
    min: f64,
    max: f64,
}

impl WavelengthDomain {
    pub fn new(min: f64, max: f64) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::NonFinite { min, max });
        }
        if min >= max {
            return Err(DomainError::Empty { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build a domain from raw slider values: clamp into the UI bounds and
    /// keep at least [`MIN_SPAN`] between the ends. Non-finite input falls
    /// back to the nearest bound.
    pub fn clamped(min: f64, max: f64) -> Self {
        let sanitize = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(MIN_WAVELENGTH, MAX_WAVELENGTH)
            } else {
                fallback
            }
        };
        let mut lo = sanitize(min, MIN_WAVELENGTH);
        let mut hi = sanitize(max, MAX_WAVELENGTH);
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        if hi - lo < MIN_SPAN {
            if lo + MIN_SPAN <= MAX_WAVELENGTH {
                hi = lo + MIN_SPAN;
            } else {
                lo = MAX_WAVELENGTH - MIN_SPAN;
                hi = MAX_WAVELENGTH;
            }
        }
        Self { min: lo, max: hi }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `n` evenly spaced points from `min` to `max`, both ends included.
    /// The last point is pinned to `max` so rounding never shortens the
    /// range.
    pub fn sample(&self, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = (self.max - self.min) / (n - 1) as f64;
                let mut points: Vec<f64> =
                    (0..n).map(|i| self.min + i as f64 * step).collect();
                points[n - 1] = self.max;
                points
            }
        }
    }
}
