use refractive_explorer::config::ExplorerConfig;
use refractive_explorer::optics::catalog::{MaterialCatalog, MaterialSpec};
use refractive_explorer::optics::curve::{compute_curves, DispersionCurve};
use refractive_explorer::optics::domain::WavelengthDomain;

#[test]
fn bk7_d_line_from_catalog() {
    let catalog = MaterialCatalog::builtin();
    let bk7 = catalog.get("BK7 Glass").unwrap();
    let n = bk7.coefficients.evaluate(&[0.5876]);
    assert!((n[0] - 1.5168).abs() < 1e-3, "n_d = {}", n[0]);
}

#[test]
fn default_view_plots_every_material_without_nan() {
    let cfg = ExplorerConfig::default();
    let catalog = MaterialCatalog::builtin();
    let (lo, hi) = cfg.default_range;
    let domain = WavelengthDomain::new(lo, hi).unwrap();

    let curves = compute_curves(&catalog, &catalog.names(), &domain, cfg.samples).unwrap();

    assert_eq!(curves.len(), catalog.len());
    for c in &curves {
        assert_eq!(c.len(), 500);
        assert!(c.n.iter().all(|n| !n.is_nan()), "{}", c.material);
        assert!(c.wavelength_um.windows(2).all(|p| p[0] < p[1]));
    }
}

#[test]
fn vacuum_like_material_is_flat() {
    let spec = MaterialSpec::new("Vacuum", [0.0, 0.0, 0.0], [0.01, 0.02, 100.0]);
    let domain = WavelengthDomain::new(0.2, 5.0).unwrap();
    let curve = DispersionCurve::compute(&spec, &domain, 64);
    assert!(curve.n.iter().all(|&n| n == 1.0));
}

#[test]
fn resonance_inside_range_breaks_the_line() {
    // C1 = 1.0 µm² puts a pole at λ = 1.0 µm, which an 11-point sampling of
    // [0.5, 1.5] hits exactly.
    let spec = MaterialSpec::new("Resonant", [0.5, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let domain = WavelengthDomain::new(0.5, 1.5).unwrap();
    let curve = DispersionCurve::compute(&spec, &domain, 11);

    assert_eq!(curve.wavelength_um[5], 1.0);
    assert!(!curve.n[5].is_finite());
    assert_eq!(curve.len(), 11);
    assert!(curve.finite_segments().len() >= 2);
}
