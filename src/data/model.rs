use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary success class of a launch attempt
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the source `class` column (1 = success,
/// 0 = failure). Any other value is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map the raw class value to an outcome. `None` for anything outside
    /// {0, 1}; the loader turns that into a hard error rather than dropping
    /// the row.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric value used on the scatter chart's y axis.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failed"),
            Outcome::Success => write!(f, "Successful"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Categorical launch-site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site list and payload bounds.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records, in source order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites, sorted, each appearing once.
    pub sites: Vec<String>,
    /// Smallest payload mass across all records.
    pub payload_min: f64,
    /// Largest payload mass across all records.
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site index and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            payload_min = payload_min.min(rec.payload_mass_kg);
            payload_max = payload_max.max(rec.payload_mass_kg);
        }
        sites.sort();

        LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of successful launches, regardless of filters.
    pub fn total_successes(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, class: i64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
        }
    }

    #[test]
    fn outcome_rejects_values_outside_binary_domain() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn dataset_derives_sorted_unique_sites_and_bounds() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 7000.0, 1),
            record("CCAFS LC-40", 500.0, 1),
            record("CCAFS LC-40", 3000.0, 0),
        ]);

        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 7000.0);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.total_successes(), 2);
    }
}
