use crate::color::SiteColorMap;
use crate::data::model::LaunchDataset;
use crate::data::query::{AggregationResult, FilterCriteria, SiteSelection, evaluate};

// Payload slider scale (kg). Matches the source data's export range.
pub const PAYLOAD_SCALE_MIN: f64 = 0.0;
pub const PAYLOAD_SCALE_MAX: f64 = 10000.0;
pub const PAYLOAD_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is loaded before
/// the window opens and never replaced.
pub struct AppState {
    pub dataset: LaunchDataset,

    /// Current site dropdown selection.
    pub selected_site: SiteSelection,

    /// Payload range slider values (kg). Not forced into min <= max; the
    /// query engine returns an empty result for inverted ranges.
    pub payload_min: f64,
    pub payload_max: f64,

    /// Aggregation for the current controls (cached between frames).
    pub result: AggregationResult,

    /// Site → colour, shared by both charts.
    pub color_map: SiteColorMap,
}

impl AppState {
    /// Initialise controls from the dataset bounds and run the first query.
    pub fn new(dataset: LaunchDataset) -> Self {
        let color_map = SiteColorMap::new(&dataset.sites);
        let payload_min = snap_to_scale(dataset.payload_min, f64::floor);
        let payload_max = snap_to_scale(dataset.payload_max, f64::ceil);

        let selected_site = SiteSelection::All;
        let result = evaluate(
            &dataset,
            &FilterCriteria {
                site: selected_site.clone(),
                payload_min,
                payload_max,
            },
        );

        Self {
            dataset,
            selected_site,
            payload_min,
            payload_max,
            result,
            color_map,
        }
    }

    /// The criteria the controls currently describe.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            site: self.selected_site.clone(),
            payload_min: self.payload_min,
            payload_max: self.payload_max,
        }
    }

    /// Recompute the cached aggregation after a control change.
    pub fn refresh(&mut self) {
        self.result = evaluate(&self.dataset, &self.criteria());
    }
}

/// Snap a payload bound onto the slider's 1000-kg grid, clamped to the scale.
fn snap_to_scale(value: f64, round: impl Fn(f64) -> f64) -> f64 {
    (round(value / PAYLOAD_STEP) * PAYLOAD_STEP).clamp(PAYLOAD_SCALE_MIN, PAYLOAD_SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "CCAFS".to_string(),
                payload_mass_kg: 2300.0,
                outcome: Outcome::Success,
            },
            LaunchRecord {
                site: "KSC".to_string(),
                payload_mass_kg: 6100.0,
                outcome: Outcome::Failure,
            },
        ])
    }

    #[test]
    fn sliders_initialise_to_snapped_dataset_bounds() {
        let state = AppState::new(dataset());
        assert_eq!(state.payload_min, 2000.0);
        assert_eq!(state.payload_max, 7000.0);
    }

    #[test]
    fn refresh_tracks_control_changes() {
        let mut state = AppState::new(dataset());
        assert_eq!(state.result.scatter.points.len(), 2);

        state.selected_site = SiteSelection::Site("KSC".to_string());
        state.refresh();
        assert_eq!(state.result.scatter.points, vec![(6100.0, Outcome::Failure)]);
    }
}
