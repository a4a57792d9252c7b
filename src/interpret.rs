//! Derive renderable quantities from prediction results.
//!
//! Nothing here touches egui: tones and hues are mapped to colors by the UI
//! style module, which keeps these rules unit-testable.

use crate::api::{ClassificationResult, FeatureImportance, Verdict};

/// Pixel size of an Earth-radius planet in the size comparison.
pub const EARTH_PX: f32 = 22.0;
/// Largest pixel size the predicted planet may reach.
pub const MAX_PX: f32 = 100.0;
/// Radius (Earth radii) at which the logarithmic scale saturates.
const SCALE_SATURATION_RADIUS: f64 = 15.0;
/// Radii above this get a ring drawn around the planet.
pub const RING_RADIUS_THRESHOLD: f64 = 8.0;
/// Number of features kept in the importance chart.
pub const IMPORTANCE_TOP_N: usize = 8;

/// Color scheme of a classification panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictTone {
    Confirmed,
    FalsePositive,
}

impl From<Verdict> for VerdictTone {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Confirmed => Self::Confirmed,
            Verdict::FalsePositive => Self::FalsePositive,
        }
    }
}

/// One horizontal probability bar.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityBar {
    pub label: &'static str,
    /// Bar width as a fraction of the track, clamped to `[0, 1]` for drawing.
    pub fraction: f32,
    /// Text shown next to the bar, from the unclamped value.
    pub percent_text: String,
    pub tone: VerdictTone,
}

/// Bars for the two class probabilities, in display order.
///
/// The probabilities are shown as received; they are not normalized against
/// each other. Missing probabilities produce no bar.
pub fn probability_bars(result: &ClassificationResult) -> Vec<ProbabilityBar> {
    let mut bars = Vec::with_capacity(2);
    if let Some(value) = result.prob_confirmed {
        bars.push(probability_bar("P(CONFIRMED)", value, VerdictTone::Confirmed));
    }
    if let Some(value) = result.prob_false_positive {
        bars.push(probability_bar(
            "P(FALSE POSITIVE)",
            value,
            VerdictTone::FalsePositive,
        ));
    }
    bars
}

fn probability_bar(label: &'static str, value: f64, tone: VerdictTone) -> ProbabilityBar {
    ProbabilityBar {
        label,
        fraction: clamp_unit(value),
        percent_text: format_percent(value),
        tone,
    }
}

/// Format a unit fraction as a percentage with one decimal, e.g. `92.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn clamp_unit(value: f64) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Presentation band of a predicted radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeBand {
    EarthSized,
    SuperEarth,
    NeptuneLike,
    JupiterLike,
}

impl SizeBand {
    /// Band of `radius` (Earth radii): `<1.25`, `<4`, `<10`, `>=10`.
    pub fn from_radius(radius: f64) -> Self {
        if radius < 1.25 {
            Self::EarthSized
        } else if radius < 4.0 {
            Self::SuperEarth
        } else if radius < 10.0 {
            Self::NeptuneLike
        } else {
            Self::JupiterLike
        }
    }

    /// HSL hue in degrees.
    pub fn hue(self) -> f32 {
        match self {
            Self::EarthSized => 210.0,
            Self::SuperEarth => 260.0,
            Self::NeptuneLike => 280.0,
            Self::JupiterLike => 35.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EarthSized => "Earth-sized",
            Self::SuperEarth => "Super-Earth",
            Self::NeptuneLike => "Neptune-like",
            Self::JupiterLike => "Jupiter-like",
        }
    }
}

/// Pixel diameter of the predicted planet.
///
/// Logarithmic in the radius and never above [`MAX_PX`]; the numeric radius
/// shown to the user is not affected.
pub fn planet_visual_size(radius: f64) -> f32 {
    let radius = match radius {
        r if r == f64::INFINITY => return MAX_PX,
        r if r.is_finite() => r.max(0.0),
        _ => 0.0,
    };
    let scale = (radius.ln_1p() / SCALE_SATURATION_RADIUS.ln_1p()).min(1.0) as f32;
    EARTH_PX + scale * (MAX_PX - EARTH_PX)
}

/// Everything needed to draw the predicted planet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetVisual {
    pub radius: f64,
    pub size_px: f32,
    pub band: SizeBand,
    pub has_ring: bool,
}

impl PlanetVisual {
    pub fn from_radius(radius: f64) -> Self {
        Self {
            radius,
            size_px: planet_visual_size(radius),
            band: SizeBand::from_radius(radius),
            has_ring: radius > RING_RADIUS_THRESHOLD,
        }
    }

    /// Radius text, e.g. `2.31 R⊕`.
    pub fn radius_text(&self) -> String {
        format!("{:.2} R⊕", self.radius)
    }
}

/// A solar-system planet drawn for scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferencePlanet {
    pub name: &'static str,
    pub radius: f64,
    pub rgb: [u8; 3],
}

impl ReferencePlanet {
    /// Diameter in the comparison strip.
    pub fn size_px(&self) -> f32 {
        (EARTH_PX * self.radius as f32 * 0.6).max(6.0)
    }
}

pub const REFERENCE_PLANETS: [ReferencePlanet; 4] = [
    ReferencePlanet { name: "Mercury", radius: 0.38, rgb: [0x9c, 0xa3, 0xaf] },
    ReferencePlanet { name: "Earth", radius: 1.00, rgb: [0x3b, 0x82, 0xf6] },
    ReferencePlanet { name: "Neptune", radius: 3.86, rgb: [0x63, 0x66, 0xf1] },
    ReferencePlanet { name: "Jupiter", radius: 11.2, rgb: [0xf5, 0x9e, 0x0b] },
];

/// Up to three reference planets not much larger than `radius`.
pub fn reference_planets(radius: f64) -> Vec<ReferencePlanet> {
    REFERENCE_PLANETS
        .iter()
        .copied()
        .filter(|planet| planet.radius <= radius * 1.4 + 1.0)
        .take(3)
        .collect()
}

/// One row of the feature-importance chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceBar {
    pub key: String,
    pub weight: f64,
    /// Width relative to the largest weight in the chart.
    pub fraction: f32,
}

/// Top weights, descending, scaled against the largest kept weight.
///
/// Ties keep key order so the chart is stable between frames.
pub fn importance_bars(importance: &FeatureImportance) -> Vec<ImportanceBar> {
    let mut entries: Vec<(&String, f64)> = importance
        .iter()
        .map(|(key, weight)| (key, *weight))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(IMPORTANCE_TOP_N);
    let max = entries.first().map(|(_, weight)| *weight).unwrap_or(0.0);
    entries
        .into_iter()
        .map(|(key, weight)| ImportanceBar {
            key: key.clone(),
            weight,
            fraction: if max > 0.0 && max.is_finite() {
                clamp_unit(weight / max)
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(prob_confirmed: f64, prob_false_positive: f64) -> ClassificationResult {
        ClassificationResult {
            prediction: Verdict::Confirmed,
            confidence: prob_confirmed,
            prob_confirmed: Some(prob_confirmed),
            prob_false_positive: Some(prob_false_positive),
            model_metrics: None,
            feature_importance: None,
            latency_ms: None,
        }
    }

    #[test]
    fn confirmed_bar_tracks_probability() {
        let bars = probability_bars(&classification(0.92, 0.08));
        assert_eq!(bars.len(), 2);
        assert!((bars[0].fraction - 0.92).abs() < 1e-6);
        assert_eq!(bars[0].percent_text, "92.0%");
        assert_eq!(bars[0].tone, VerdictTone::Confirmed);
        assert_eq!(bars[1].tone, VerdictTone::FalsePositive);
        assert_eq!(VerdictTone::from(Verdict::Confirmed), VerdictTone::Confirmed);
    }

    #[test]
    fn probabilities_are_not_normalized() {
        let bars = probability_bars(&classification(0.7, 0.7));
        assert!((bars[0].fraction - 0.7).abs() < 1e-6);
        assert!((bars[1].fraction - 0.7).abs() < 1e-6);
    }

    #[test]
    fn missing_probabilities_produce_no_bars() {
        let mut result = classification(0.5, 0.5);
        result.prob_confirmed = None;
        result.prob_false_positive = None;
        assert!(probability_bars(&result).is_empty());
    }

    #[test]
    fn earth_radius_maps_near_base_size() {
        let expected = EARTH_PX + (2f64.ln() / 16f64.ln()) as f32 * (MAX_PX - EARTH_PX);
        assert!((planet_visual_size(1.0) - expected).abs() < 1e-3);
        assert_eq!(planet_visual_size(0.0), EARTH_PX);
    }

    #[test]
    fn jupiter_radius_sits_near_the_top_with_a_ring() {
        let visual = PlanetVisual::from_radius(11.2);
        assert!((visual.size_px - 92.37).abs() < 0.05, "{}", visual.size_px);
        assert!(visual.size_px <= MAX_PX);
        assert!(visual.has_ring);
        assert_eq!(visual.band, SizeBand::JupiterLike);
        assert_eq!(visual.radius_text(), "11.20 R⊕");
    }

    #[test]
    fn huge_radius_is_clamped_to_max() {
        assert_eq!(planet_visual_size(15.0), MAX_PX);
        assert_eq!(planet_visual_size(1_000.0), MAX_PX);
        assert_eq!(planet_visual_size(f64::INFINITY), MAX_PX);
        assert_eq!(planet_visual_size(f64::NAN), EARTH_PX);
        assert_eq!(planet_visual_size(f64::NEG_INFINITY), EARTH_PX);
        assert_eq!(planet_visual_size(-3.0), EARTH_PX);
    }

    #[test]
    fn ring_only_above_eight_radii() {
        assert!(!PlanetVisual::from_radius(8.0).has_ring);
        assert!(PlanetVisual::from_radius(8.01).has_ring);
    }

    #[test]
    fn band_thresholds_are_exclusive_upper_bounds() {
        assert_eq!(SizeBand::from_radius(1.2499), SizeBand::EarthSized);
        assert_eq!(SizeBand::from_radius(1.25), SizeBand::SuperEarth);
        assert_eq!(SizeBand::from_radius(4.0), SizeBand::NeptuneLike);
        assert_eq!(SizeBand::from_radius(10.0), SizeBand::JupiterLike);
        assert_eq!(SizeBand::SuperEarth.hue(), 260.0);
    }

    #[test]
    fn reference_planets_filter_by_scale() {
        let names: Vec<_> = reference_planets(0.5).iter().map(|p| p.name).collect();
        assert_eq!(names, ["Mercury", "Earth"]);
        let names: Vec<_> = reference_planets(20.0).iter().map(|p| p.name).collect();
        assert_eq!(names, ["Mercury", "Earth", "Neptune"]);
        assert_eq!(REFERENCE_PLANETS[0].size_px(), 6.0);
    }

    #[test]
    fn importance_keeps_top_eight_relative_to_max() {
        let importance: FeatureImportance = (0..10)
            .map(|index| (format!("f{index}"), (index + 1) as f64 / 100.0))
            .collect();
        let bars = importance_bars(&importance);
        assert_eq!(bars.len(), IMPORTANCE_TOP_N);
        assert_eq!(bars[0].key, "f9");
        assert_eq!(bars[0].fraction, 1.0);
        assert_eq!(bars[7].key, "f2");
        assert!((bars[7].fraction - 0.3).abs() < 1e-6);
    }

    #[test]
    fn importance_with_non_positive_max_has_zero_widths() {
        let importance: FeatureImportance =
            [("a".to_string(), 0.0), ("b".to_string(), 0.0)].into_iter().collect();
        let bars = importance_bars(&importance);
        assert!(bars.iter().all(|bar| bar.fraction == 0.0));
        assert!(importance_bars(&FeatureImportance::new()).is_empty());
    }
}
