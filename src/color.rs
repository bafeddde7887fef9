use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Material → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per catalog material, so a material keeps its colour when
/// other materials are toggled on or off.
#[derive(Debug, Clone)]
pub struct MaterialColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl MaterialColors {
    pub fn new(names: &[String]) -> Self {
        let mapping = names
            .iter()
            .cloned()
            .zip(generate_palette(names.len()))
            .collect();

        MaterialColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, material: &str) -> Color32 {
        self.mapping
            .get(material)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn palette_colours_are_distinct() {
        let p = generate_palette(3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
        assert_ne!(p[0], p[2]);
    }

    #[test]
    fn unknown_material_gets_default() {
        let colors = MaterialColors::new(&["Silica".to_string()]);
        assert_eq!(colors.color_for("Glass?"), Color32::GRAY);
        assert_ne!(colors.color_for("Silica"), Color32::GRAY);
    }
}
