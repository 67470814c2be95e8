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
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: launch site → Color32
// ---------------------------------------------------------------------------

/// Maps launch sites to distinct colours, shared by the pie slices and the
/// scatter points so a site reads the same across both charts.
#[derive(Debug, Clone)]
pub struct SiteColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SiteColorMap {
    /// Build a colour map over the dataset's site list.
    pub fn new(sites: &[String]) -> Self {
        let palette = generate_palette(sites.len());
        let mapping: BTreeMap<String, Color32> = sites
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        SiteColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given site.
    pub fn color_for(&self, site: &str) -> Color32 {
        self.mapping
            .get(site)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_sizes_match_and_colors_differ() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn unknown_site_falls_back_to_default() {
        let map = SiteColorMap::new(&["CCAFS LC-40".to_string()]);
        assert_eq!(map.color_for("KSC LC-39A"), Color32::GRAY);
        assert_ne!(map.color_for("CCAFS LC-40"), Color32::GRAY);
    }
}
