use crate::data::model::SheetTable;
use crate::forecast::{self, Assumptions, ProjectionTable, SheetLayout};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Original,
    Projections,
}

/// The projection controls, mirroring the three UI inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionControls {
    /// Number of months to project.
    pub periods: i64,
    /// Product Sales growth override, in percent.
    pub product_rate_pct: u32,
    /// Service Sales growth override, in percent.
    pub service_rate_pct: u32,
}

impl Default for ProjectionControls {
    fn default() -> Self {
        Self {
            periods: 3,
            product_rate_pct: 4,
            service_rate_pct: 5,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded workbook grid (None until a file loads).
    pub sheet: Option<SheetTable>,

    /// Where each line item lives in the sheet.
    pub layout: SheetLayout,

    /// Assumptions extracted from the current sheet.  Never mutated by the
    /// projection; every reprojection reads from this snapshot.
    pub assumptions: Option<Assumptions>,

    /// Current control values.
    pub controls: ProjectionControls,

    /// Projection built from `assumptions` and `controls` (cached).
    pub projection: Option<ProjectionTable>,

    /// Active tab.
    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            sheet: None,
            layout: SheetLayout::default(),
            assumptions: None,
            controls: ProjectionControls::default(),
            projection: None,
            tab: Tab::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded sheet: re-extract assumptions and reproject.
    ///
    /// An extraction failure keeps the sheet visible and surfaces as a
    /// status message; the UI stays usable.
    pub fn set_sheet(&mut self, sheet: SheetTable) {
        match forecast::extract(&sheet, &self.layout) {
            Ok(assumptions) => {
                log::info!("extracted assumptions: {assumptions:?}");
                self.assumptions = Some(assumptions);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("assumption extraction failed: {e}");
                self.assumptions = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
        self.sheet = Some(sheet);
        self.reproject();
    }

    /// Rebuild the cached projection after a control change.
    pub fn reproject(&mut self) {
        self.projection = None;
        let Some(assumptions) = &self.assumptions else {
            return;
        };
        match forecast::project(
            assumptions,
            self.controls.periods,
            f64::from(self.controls.product_rate_pct),
            f64::from(self.controls.service_rate_pct),
        ) {
            Ok(table) => {
                self.projection = Some(table);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("projection failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Pretty-printed assumptions for the original-table tab.
    pub fn assumptions_json(&self) -> Option<String> {
        self.assumptions
            .as_ref()
            .and_then(|a| serde_json::to_string_pretty(a).ok())
    }
}
