use crate::color::MaterialColors;
use crate::config::ExplorerConfig;
use crate::optics::catalog::{CatalogError, MaterialCatalog};
use crate::optics::curve::{compute_curves, DispersionCurve};
use crate::optics::domain::WavelengthDomain;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    DataVisualization,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::DataVisualization, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DataVisualization => "Data Visualization",
            Page::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ExplorerConfig,

    /// Fixed material table.
    pub catalog: MaterialCatalog,

    /// One colour per catalog material.
    pub colors: MaterialColors,

    pub page: Page,

    /// Selected material names, kept in catalog order.
    pub selected: Vec<String>,

    /// Current wavelength range.
    pub domain: WavelengthDomain,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        let catalog = MaterialCatalog::builtin();
        let names = catalog.names();
        let (lo, hi) = config.default_range;
        Self {
            config,
            colors: MaterialColors::new(&names),
            catalog,
            page: Page::Home,
            // Everything selected at startup.
            selected: names,
            domain: WavelengthDomain::clamped(lo, hi),
            status_message: None,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            log::info!("Switching to page '{}'", page.label());
            self.page = page;
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Select or deselect a material, keeping catalog order.
    pub fn set_selected(&mut self, name: &str, on: bool) {
        if on == self.is_selected(name) {
            return;
        }
        if on {
            self.selected.push(name.to_string());
        } else {
            self.selected.retain(|s| s != name);
        }
        let order = self.catalog.names();
        self.selected
            .sort_by_key(|s| order.iter().position(|o| o == s).unwrap_or(usize::MAX));
    }

    /// Update the wavelength range from raw slider values.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.domain = WavelengthDomain::clamped(min, max);
    }

    /// Evaluate every selected material over the current range.
    pub fn curves(&self) -> Result<Vec<DispersionCurve>, CatalogError> {
        log::debug!(
            "Computing {} curve(s) over [{:.3}, {:.3}] µm",
            self.selected.len(),
            self.domain.min(),
            self.domain.max()
        );
        compute_curves(&self.catalog, &self.selected, &self.domain, self.config.samples)
    }
}
