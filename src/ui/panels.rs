use eframe::egui::{self, RichText, Slider, Ui};

use crate::data::query::SiteSelection;
use crate::state::{AppState, PAYLOAD_SCALE_MAX, PAYLOAD_SCALE_MIN, PAYLOAD_STEP};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Returns after scheduling a re-query if any
/// control changed this frame.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    // ---- Site selector ----
    ui.strong("Launch Site");
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selected_site.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            let is_all = state.selected_site == SiteSelection::All;
            if ui.selectable_label(is_all, "All Sites").clicked() && !is_all {
                state.selected_site = SiteSelection::All;
                changed = true;
            }
            for site in state.dataset.sites.clone() {
                let is_selected = state.selected_site == SiteSelection::Site(site.clone());
                if ui.selectable_label(is_selected, &site).clicked() && !is_selected {
                    state.selected_site = SiteSelection::Site(site);
                    changed = true;
                }
            }
        });

    ui.add_space(8.0);

    // ---- Payload range ----
    ui.strong("Payload Mass (kg)");
    changed |= ui
        .add(
            Slider::new(&mut state.payload_min, PAYLOAD_SCALE_MIN..=PAYLOAD_SCALE_MAX)
                .step_by(PAYLOAD_STEP)
                .text("min"),
        )
        .changed();
    changed |= ui
        .add(
            Slider::new(&mut state.payload_max, PAYLOAD_SCALE_MIN..=PAYLOAD_SCALE_MAX)
                .step_by(PAYLOAD_STEP)
                .text("max"),
        )
        .changed();

    if state.payload_min > state.payload_max {
        ui.label(
            RichText::new("Inverted range: no launches match")
                .small()
                .weak(),
        );
    }

    if changed {
        state.refresh();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches loaded, {} in current filter",
            state.dataset.len(),
            state.result.scatter.points.len()
        ));
        ui.separator();
        ui.label(format!("{} sites", state.dataset.sites.len()));
    });
}
