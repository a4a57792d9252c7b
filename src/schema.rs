//! Static feature schema for the prediction inputs.
//!
//! Every model input is described by a [`FeatureSpec`] record. The ranges are
//! the typical observed ranges and only drive soft warnings; they are not a
//! hard domain constraint.

use std::sync::LazyLock;

use crate::task::Task;

/// Key of the radius-ratio feature, which only the classifier consumes.
pub const RADIUS_RATIO_KEY: &str = "koi_ror";

/// Description of a single numeric model input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureSpec {
    /// Wire key sent to the prediction service.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Display unit, empty when dimensionless.
    pub unit: &'static str,
    /// Lower bound of the typical range.
    pub min: f64,
    /// Upper bound of the typical range.
    pub max: f64,
    /// Increment suggested for drag/step editing.
    pub step: f64,
    /// Catalog median, used as the input placeholder.
    pub median: f64,
    /// Longer explanation shown on hover.
    pub tooltip: &'static str,
}

const fn feature(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    range: (f64, f64),
    step: f64,
    median: f64,
    tooltip: &'static str,
) -> FeatureSpec {
    FeatureSpec {
        key,
        label,
        unit,
        min: range.0,
        max: range.1,
        step,
        median,
        tooltip,
    }
}

/// Inputs of the classification model, in display order.
#[rustfmt::skip]
pub static CLF_FEATURES: [FeatureSpec; 23] = [
    feature("koi_period", "Orbital Period", "days", (0.24, 1000.0), 0.01, 9.753,
        "Time for one complete orbit around the host star."),
    feature("koi_duration", "Transit Duration", "hrs", (0.05, 100.0), 0.01, 3.79,
        "Duration of the planetary transit event across the stellar disk."),
    feature("koi_depth", "Transit Depth", "ppm", (0.0, 100000.0), 1.0, 421.1,
        "Fractional stellar flux lost during transit (parts per million). Deeper = larger planet."),
    feature("koi_impact", "Impact Parameter", "", (0.0, 1.5), 0.001, 0.537,
        "Sky-projected distance between transit center & stellar disk center. 0 = central transit."),
    feature("koi_model_snr", "Transit SNR", "", (0.0, 2000.0), 0.1, 23.0,
        "Signal-to-noise ratio of the transit model fit. Higher = more reliable detection."),
    feature("koi_num_transits", "Number of Transits", "", (0.0, 1000.0), 1.0, 143.0,
        "Total number of transit events observed in the Kepler dataset."),
    feature(RADIUS_RATIO_KEY, "Radius Ratio (Rp/Rs)", "", (0.001, 0.5), 0.0001, 0.021,
        "Ratio of planet radius to stellar radius derived from the transit depth."),
    feature("st_teff", "Stellar Temp (Teff)", "K", (2600.0, 10000.0), 10.0, 5783.0,
        "Effective temperature of the host star. Sun ≈ 5778 K."),
    feature("st_logg", "Surface Gravity (logg)", "cgs", (0.1, 5.4), 0.001, 4.453,
        "Log₁₀ of stellar surface gravity. Main-sequence stars ≈ 4.0–4.7."),
    feature("st_met", "Stellar Metallicity", "[Fe/H]", (-2.5, 0.6), 0.01, -0.14,
        "Iron-to-hydrogen abundance relative to the Sun. 0 = solar metallicity."),
    feature("st_mass", "Stellar Mass", "M☉", (0.09, 3.7), 0.001, 0.972,
        "Mass of the host star in solar masses."),
    feature("st_radius", "Stellar Radius", "R☉", (0.1, 30.0), 0.001, 0.981,
        "Radius of the host star in solar radii."),
    feature("st_dens", "Stellar Density", "g/cm³", (0.0, 50.0), 0.001, 1.435,
        "Mean density of the host star, used to constrain the orbital parameters."),
    feature("teff_err1", "Teff Error (+)", "K", (0.0, 700.0), 1.0, 153.0,
        "Positive uncertainty on stellar effective temperature."),
    feature("teff_err2", "Teff Error (−)", "K", (-1500.0, 0.0), 1.0, -149.0,
        "Negative uncertainty on stellar effective temperature."),
    feature("logg_err1", "logg Error (+)", "", (0.0, 1.2), 0.001, 0.074,
        "Positive uncertainty on stellar surface gravity."),
    feature("logg_err2", "logg Error (−)", "", (-0.75, 0.0), 0.001, -0.193,
        "Negative uncertainty on stellar surface gravity."),
    feature("feh_err1", "[Fe/H] Error (+)", "", (0.0, 0.5), 0.001, 0.22,
        "Positive uncertainty on stellar metallicity measurement."),
    feature("feh_err2", "[Fe/H] Error (−)", "", (-0.75, 0.0), 0.001, -0.26,
        "Negative uncertainty on stellar metallicity measurement."),
    feature("mass_err1", "Mass Error (+)", "M☉", (0.0, 1.5), 0.001, 0.116,
        "Positive uncertainty on stellar mass."),
    feature("mass_err2", "Mass Error (−)", "M☉", (-2.6, 0.0), 0.001, -0.098,
        "Negative uncertainty on stellar mass."),
    feature("radius_err1", "Radius Error (+)", "R☉", (0.0, 26.0), 0.001, 0.356,
        "Positive uncertainty on stellar radius."),
    feature("radius_err2", "Radius Error (−)", "R☉", (-101.0, 0.0), 0.001, -0.114,
        "Negative uncertainty on stellar radius."),
];

static REG_FEATURES: LazyLock<Vec<&'static FeatureSpec>> = LazyLock::new(|| {
    CLF_FEATURES
        .iter()
        .filter(|spec| spec.key != RADIUS_RATIO_KEY)
        .collect()
});

static CLF_FEATURE_REFS: LazyLock<Vec<&'static FeatureSpec>> =
    LazyLock::new(|| CLF_FEATURES.iter().collect());

/// Ordered feature subset consumed by one task.
#[derive(Clone, Copy, Debug)]
pub struct FeatureSet {
    features: &'static [&'static FeatureSpec],
}

impl FeatureSet {
    /// Feature set for the given task.
    pub fn for_task(task: Task) -> Self {
        let features = match task {
            Task::Classification => CLF_FEATURE_REFS.as_slice(),
            Task::Regression => REG_FEATURES.as_slice(),
        };
        Self { features }
    }

    /// Iterate the features in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FeatureSpec> + '_ {
        self.features.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.features.iter().any(|spec| spec.key == key)
    }

    /// Look up a feature by key.
    pub fn get(&self, key: &str) -> Option<&'static FeatureSpec> {
        self.iter().find(|spec| spec.key == key)
    }
}

/// Visual grouping of the inputs in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub keys: &'static [&'static str],
}

/// Form groups in display order. A group renders only the keys present in the
/// active feature set.
pub const FEATURE_GROUPS: [FeatureGroup; 3] = [
    FeatureGroup {
        title: "Transit Parameters",
        description: "Observed properties of the planetary transit event",
        keys: &[
            "koi_period",
            "koi_duration",
            "koi_depth",
            "koi_impact",
            "koi_model_snr",
            "koi_num_transits",
            RADIUS_RATIO_KEY,
        ],
    },
    FeatureGroup {
        title: "Stellar Properties",
        description: "Characteristics of the host star",
        keys: &["st_teff", "st_logg", "st_met", "st_mass", "st_radius", "st_dens"],
    },
    FeatureGroup {
        title: "Measurement Uncertainties",
        description: "Observational error bounds (positive = upper, negative = lower)",
        keys: &[
            "teff_err1",
            "teff_err2",
            "logg_err1",
            "logg_err2",
            "feh_err1",
            "feh_err2",
            "mass_err1",
            "mass_err2",
            "radius_err1",
            "radius_err2",
        ],
    },
];

impl FeatureGroup {
    /// Features of this group that belong to `set`, in group order.
    pub fn features_in(&self, set: FeatureSet) -> Vec<&'static FeatureSpec> {
        self.keys.iter().filter_map(|key| set.get(key)).collect()
    }
}

/// Canned full-feature inputs used to pre-fill the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePreset {
    /// A known confirmed planet.
    Confirmed,
    /// A known false-positive signal.
    FalsePositive,
}

impl SamplePreset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "✓ Confirmed example",
            Self::FalsePositive => "✗ False positive example",
        }
    }

    /// Key/value pairs covering every classification feature.
    pub fn values(self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Confirmed => &SAMPLE_CONFIRMED,
            Self::FalsePositive => &SAMPLE_FALSE_POSITIVE,
        }
    }
}

const SAMPLE_CONFIRMED: [(&str, f64); 23] = [
    ("koi_period", 9.488),
    ("koi_duration", 2.9575),
    ("koi_depth", 615.8),
    ("koi_impact", 0.146),
    ("koi_model_snr", 35.8),
    ("koi_num_transits", 142.0),
    ("koi_ror", 0.0223),
    ("st_teff", 5762.0),
    ("st_logg", 4.426),
    ("st_met", 0.14),
    ("st_mass", 0.985),
    ("st_radius", 0.989),
    ("st_dens", 1.469),
    ("teff_err1", 123.0),
    ("teff_err2", -123.0),
    ("logg_err1", 0.068),
    ("logg_err2", -0.243),
    ("feh_err1", 0.15),
    ("feh_err2", -0.15),
    ("mass_err1", 0.1315),
    ("mass_err2", -0.0868),
    ("radius_err1", 0.465),
    ("radius_err2", -0.114),
];

const SAMPLE_FALSE_POSITIVE: [(&str, f64); 23] = [
    ("koi_period", 1.737),
    ("koi_duration", 2.406),
    ("koi_depth", 8079.2),
    ("koi_impact", 1.276),
    ("koi_model_snr", 505.6),
    ("koi_num_transits", 621.0),
    ("koi_ror", 0.387),
    ("st_teff", 5805.0),
    ("st_logg", 4.546),
    ("st_met", -0.52),
    ("st_mass", 0.831),
    ("st_radius", 0.803),
    ("st_dens", 2.312),
    ("teff_err1", 157.0),
    ("teff_err2", -144.0),
    ("logg_err1", 0.053),
    ("logg_err2", -0.223),
    ("feh_err1", 0.3),
    ("feh_err2", -0.26),
    ("mass_err1", 0.1),
    ("mass_err2", -0.072),
    ("radius_err1", 0.364),
    ("radius_err2", -0.068),
];
