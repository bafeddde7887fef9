use serde::Serialize;

use super::catalog::{CatalogError, MaterialCatalog, MaterialSpec};
use super::domain::WavelengthDomain;

// ---------------------------------------------------------------------------
// DispersionCurve – n(λ) for one material over one domain
// ---------------------------------------------------------------------------

/// Refractive index sampled over a wavelength domain. Indices may contain
/// NaN/inf where the domain crosses a resonance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispersionCurve {
    /// Material name, used as the series label.
    pub material: String,
    /// Wavelengths in µm, strictly increasing.
    pub wavelength_um: Vec<f64>,
    /// Refractive index per wavelength – same length as `wavelength_um`.
    pub n: Vec<f64>,
}

impl DispersionCurve {
    pub fn compute(spec: &MaterialSpec, domain: &WavelengthDomain, samples: usize) -> Self {
        let wavelength_um = domain.sample(samples);
        let n = spec.coefficients.evaluate(&wavelength_um);
        Self {
            material: spec.name.clone(),
            wavelength_um,
            n,
        }
    }

    pub fn len(&self) -> usize {
        self.wavelength_um.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelength_um.is_empty()
    }

    /// `(λ, n)` pairs in wavelength order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.wavelength_um
            .iter()
            .zip(&self.n)
            .map(|(&w, &n)| [w, n])
    }

    /// Split the curve into runs of finite points. A non-finite index ends
    /// the current run, so a plotted line breaks there instead of jumping.
    pub fn finite_segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for p in self.points() {
            if p[1].is_finite() {
                current.push(p);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Build one curve per selected material, in selection order.
///
/// An empty selection yields no curves. Any name missing from the catalog
/// fails the whole batch.
pub fn compute_curves<S: AsRef<str>>(
    catalog: &MaterialCatalog,
    selected: &[S],
    domain: &WavelengthDomain,
    samples: usize,
) -> Result<Vec<DispersionCurve>, CatalogError> {
    selected
        .iter()
        .map(|name| {
            let spec = catalog.get(name.as_ref())?;
            Ok(DispersionCurve::compute(spec, domain, samples))
        })
        .collect()
}
