use serde::Serialize;

// ---------------------------------------------------------------------------
// Fraunhofer reference lines (µm)
// ---------------------------------------------------------------------------

/// Helium d-line.
pub const LINE_D: f64 = 0.5875618;
/// Hydrogen F-line.
pub const LINE_F: f64 = 0.4861327;
/// Hydrogen C-line.
pub const LINE_C: f64 = 0.6562725;

// ---------------------------------------------------------------------------
// Sellmeier coefficients
// ---------------------------------------------------------------------------

/// Three-term Sellmeier model, wavelengths in micrometres:
///
/// n(λ)² = 1 + Σ Bᵢ·λ² / (λ² − Cᵢ)
///
/// Resonances (λ² = Cᵢ) are not guarded and evaluate to inf/NaN, as does a
/// negative right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SellmeierCoefficients {
    pub b: [f64; 3],
    /// Resonance terms in µm².
    pub c: [f64; 3],
}

impl SellmeierCoefficients {
    pub const fn new(b: [f64; 3], c: [f64; 3]) -> Self {
        Self { b, c }
    }

    /// Refractive index at a single wavelength (µm).
    pub fn refractive_index(&self, wavelength: f64) -> f64 {
        let w2 = wavelength * wavelength;
        let n2 = 1.0
            + self.b[0] * w2 / (w2 - self.c[0])
            + self.b[1] * w2 / (w2 - self.c[1])
            + self.b[2] * w2 / (w2 - self.c[2]);
        n2.sqrt()
    }

    /// Evaluate the model at every wavelength, preserving order and length.
    pub fn evaluate(&self, wavelengths: &[f64]) -> Vec<f64> {
        wavelengths
            .iter()
            .map(|&w| self.refractive_index(w))
            .collect()
    }

    /// Abbe number V_d = (n_d − 1) / (n_F − n_C).
    pub fn abbe_number(&self) -> f64 {
        let n_d = self.refractive_index(LINE_D);
        let n_f = self.refractive_index(LINE_F);
        let n_c = self.refractive_index(LINE_C);
        (n_d - 1.0) / (n_f - n_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BK7: SellmeierCoefficients = SellmeierCoefficients::new(
        [1.03961212, 0.231792344, 1.01046945],
        [6.00069867e-3, 2.00179144e-2, 103.560653],
    );

    #[test]
    fn bk7_d_line() {
        let n = BK7.refractive_index(0.5876);
        assert!((n - 1.5168).abs() < 1e-3, "n_d = {n}");
    }

    #[test]
    fn bk7_abbe_number() {
        let v = BK7.abbe_number();
        assert!((v - 64.17).abs() < 0.5, "V_d = {v}");
    }

    #[test]
    fn zero_b_is_vacuum() {
        let vacuum = SellmeierCoefficients::new([0.0; 3], [0.01, 0.02, 100.0]);
        for n in vacuum.evaluate(&[0.2, 0.5, 1.0, 3.0, 4.9]) {
            assert_eq!(n, 1.0);
        }
    }

    #[test]
    fn evaluate_keeps_length_and_order() {
        let ws = [0.4, 0.6, 0.8, 1.2];
        let ns = BK7.evaluate(&ws);
        assert_eq!(ns.len(), ws.len());
        for (w, n) in ws.iter().zip(&ns) {
            assert_eq!(*n, BK7.refractive_index(*w));
        }
        // Normal dispersion: index falls with wavelength in the visible.
        assert!(ns.windows(2).all(|p| p[0] > p[1]));
    }

    #[test]
    fn evaluate_is_bitwise_repeatable() {
        let ws: Vec<f64> = (1..200).map(|i| 0.1 + i as f64 * 0.02).collect();
        let a = BK7.evaluate(&ws);
        let b = BK7.evaluate(&ws);
        let a_bits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn resonance_is_not_finite() {
        let m = SellmeierCoefficients::new([1.0, 0.0, 0.0], [0.25, 0.0, 0.0]);
        assert!(!m.refractive_index(0.5).is_finite());
    }

    #[test]
    fn negative_radicand_is_nan() {
        let m = SellmeierCoefficients::new([-5.0, 0.0, 0.0], [0.01, 0.0, 0.0]);
        assert!(m.refractive_index(1.0).is_nan());
    }
}
