use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Filter criteria – current state of the two UI controls
// ---------------------------------------------------------------------------

/// Which launch site the dashboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// Aggregate across every site.
    All,
    Site(String),
}

impl SiteSelection {
    /// Label shown in the site dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

/// Transient filter state, rebuilt from the controls on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub site: SiteSelection,
    pub payload_min: f64,
    pub payload_max: f64,
}

// ---------------------------------------------------------------------------
// Aggregation output – chart-ready data
// ---------------------------------------------------------------------------

/// Pie slices in display order, plus the title describing the filter context.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartData {
    pub title: String,
    /// (label, count). For the all-sites view labels are site names and
    /// zero-success sites are omitted; for a single site the labels are
    /// always "Successful" then "Failed", zeros included.
    pub slices: Vec<(String, u64)>,
}

/// Range-filtered rows as (payload mass, outcome) points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartData {
    pub title: String,
    pub points: Vec<(f64, Outcome)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub pie: PieChartData,
    pub scatter: ScatterChartData,
}

// ---------------------------------------------------------------------------
// evaluate – the one query over the dataset
// ---------------------------------------------------------------------------

/// Evaluate the current filter against the dataset and produce both chart
/// views. Pure: depends only on the (fixed) dataset and the criteria, and an
/// empty match is a valid result, never an error. An inverted payload range
/// simply matches nothing.
pub fn evaluate(dataset: &LaunchDataset, criteria: &FilterCriteria) -> AggregationResult {
    let in_range = |mass: f64| mass >= criteria.payload_min && mass <= criteria.payload_max;

    match &criteria.site {
        SiteSelection::All => {
            let filtered: Vec<_> = dataset
                .records
                .iter()
                .filter(|r| in_range(r.payload_mass_kg))
                .collect();

            // Successes per site; only sites observed with >= 1 success in
            // range appear, matching value-counts semantics.
            let mut success_counts: BTreeMap<&str, u64> = BTreeMap::new();
            for rec in filtered.iter().filter(|r| r.outcome.is_success()) {
                *success_counts.entry(rec.site.as_str()).or_default() += 1;
            }

            AggregationResult {
                pie: PieChartData {
                    title: "Total Successful Launches for All Sites".to_string(),
                    slices: success_counts
                        .into_iter()
                        .map(|(site, n)| (site.to_string(), n))
                        .collect(),
                },
                scatter: ScatterChartData {
                    title: "Correlation between Payload Mass and Launch Success".to_string(),
                    points: filtered
                        .iter()
                        .map(|r| (r.payload_mass_kg, r.outcome))
                        .collect(),
                },
            }
        }
        SiteSelection::Site(site) => {
            let filtered: Vec<_> = dataset
                .records
                .iter()
                .filter(|r| r.site == *site && in_range(r.payload_mass_kg))
                .collect();

            let successes = filtered.iter().filter(|r| r.outcome.is_success()).count() as u64;
            let failures = filtered.len() as u64 - successes;

            AggregationResult {
                pie: PieChartData {
                    title: format!("Success vs. Failed Launches at {site}"),
                    slices: vec![
                        ("Successful".to_string(), successes),
                        ("Failed".to_string(), failures),
                    ],
                },
                scatter: ScatterChartData {
                    title: format!(
                        "Correlation between Payload Mass and Launch Success at {site}"
                    ),
                    points: filtered
                        .iter()
                        .map(|r| (r.payload_mass_kg, r.outcome))
                        .collect(),
                },
            }
        }
    }
}
