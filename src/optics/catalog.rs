use serde::Serialize;
use thiserror::Error;

use super::sellmeier::SellmeierCoefficients;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Material not found: {0}")]
    UnknownMaterial(String),
}

// ---------------------------------------------------------------------------
// MaterialSpec – one catalog row
// ---------------------------------------------------------------------------

/// A named material with its Sellmeier coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSpec {
    pub name: String,
    pub coefficients: SellmeierCoefficients,
}

impl MaterialSpec {
    pub fn new(name: &str, b: [f64; 3], c: [f64; 3]) -> Self {
        Self {
            name: name.to_string(),
            coefficients: SellmeierCoefficients::new(b, c),
        }
    }
}

// ---------------------------------------------------------------------------
// MaterialCatalog – fixed lookup table
// ---------------------------------------------------------------------------

/// Read-only material table. Entries keep their insertion order, which is
/// also the order shown in the UI.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<MaterialSpec>,
}

impl MaterialCatalog {
    /// The built-in table.
    ///
    /// The Water row uses round illustrative values rather than a fitted
    /// dataset.
    pub fn builtin() -> Self {
        Self {
            materials: vec![
                MaterialSpec::new(
                    "BK7 Glass",
                    [1.03961212, 0.231792344, 1.01046945],
                    [6.00069867e-3, 2.00179144e-2, 103.560653],
                ),
                MaterialSpec::new(
                    "Silica",
                    [0.6961663, 0.4079426, 0.8974794],
                    [4.67914826e-3, 1.35120631e-2, 97.9340025],
                ),
                MaterialSpec::new("Water", [0.758, 0.097, 0.278], [0.005, 0.01, 120.0]),
            ],
        }
    }

    /// Look up a material by exact name.
    pub fn get(&self, name: &str) -> Result<&MaterialSpec, CatalogError> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CatalogError::UnknownMaterial(name.to_string()))
    }

    /// Material names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.materials.iter().map(|m| m.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
