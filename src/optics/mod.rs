/// Optics layer: material table, wavelength sampling, and dispersion curves.
///
/// Architecture:
/// ```text
///   MaterialCatalog        WavelengthDomain
///   (name → B, C)          [min, max] µm
///        │                      │
///        ▼                      ▼
///   ┌───────────┐  lookup  ┌──────────┐
///   │  catalog  │ ───────► │  sample  │  N evenly spaced points
///   └───────────┘          └──────────┘
///        │                      │
///        ▼                      ▼
///   ┌──────────────────────────────┐
///   │  sellmeier: n(λ) per point   │
///   └──────────────────────────────┘
///        │
///        ▼
///   DispersionCurve (label, [λ, n] pairs) → plot / export
/// ```

pub mod catalog;
pub mod curve;
pub mod domain;
pub mod sellmeier;
