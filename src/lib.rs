//! Interactive explorer for Sellmeier refractive index curves.
//!
//! The [`optics`] layer is UI-free: a fixed [`optics::catalog::MaterialCatalog`],
//! wavelength sampling, and the Sellmeier evaluator. Everything else renders
//! it with `eframe`/`egui_plot`.

pub mod app;
pub mod color;
pub mod config;
pub mod export;
pub mod optics;
pub mod state;
pub mod ui;
