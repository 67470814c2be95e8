use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::data::model::Outcome;
use crate::state::AppState;

// Outcome colours shared by the single-site pie and the scatter series.
const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
const FAILURE_COLOR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);

// ---------------------------------------------------------------------------
// Pie chart (success ratio)
// ---------------------------------------------------------------------------

/// Render the success-ratio pie from the cached aggregation.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let pie = &state.result.pie;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&pie.title);
    });

    let total: u64 = pie.slices.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current filter");
        });
        return;
    }

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let mut start_angle = 0.0_f64;
            for (label, count) in &pie.slices {
                if *count == 0 {
                    continue;
                }
                let sweep = (*count as f64 / total as f64) * std::f64::consts::TAU;
                let color = slice_color(state, label);
                let name = format!("{label} ({count})");

                let wedge = Polygon::new(wedge_points(start_angle, start_angle + sweep))
                    .fill_color(color)
                    .stroke((1.0, Color32::from_gray(30)))
                    .name(name);
                plot_ui.polygon(wedge);

                start_angle += sweep;
            }
        });
}

/// All-sites slices are labelled by site and use the site palette; the
/// per-site view labels slices by outcome.
fn slice_color(state: &AppState, label: &str) -> Color32 {
    match label {
        "Successful" => SUCCESS_COLOR,
        "Failed" => FAILURE_COLOR,
        site => state.color_map.color_for(site),
    }
}

/// Unit-circle wedge from `start` to `end` radians, sampled along the arc.
fn wedge_points(start: f64, end: f64) -> PlotPoints<'static> {
    // Enough segments that even a thin slice renders as a smooth arc.
    let segments = (((end - start) / std::f64::consts::TAU) * 128.0).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let angle = start + (end - start) * (i as f64 / segments as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Scatter chart (payload vs outcome)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter from the cached aggregation.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    let scatter = &state.result.scatter;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&scatter.title);
    });

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Success")
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (outcome, color) in [
                (Outcome::Success, SUCCESS_COLOR),
                (Outcome::Failure, FAILURE_COLOR),
            ] {
                let points: PlotPoints = scatter
                    .points
                    .iter()
                    .filter(|(_, o)| *o == outcome)
                    .map(|(mass, o)| [*mass, o.as_f64()])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(outcome.to_string())
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
