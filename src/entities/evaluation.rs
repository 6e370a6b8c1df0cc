use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// BMI category based on the measured value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI 18.5 up to 24
    Normal,

    /// BMI 24 up to 27
    Overweight,

    /// BMI 27 up to 30
    MildObesity,

    /// BMI 30 up to 35
    ModerateObesity,

    /// BMI 35 and above
    SevereObesity,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal weight",
            BmiCategory::Overweight => "overweight",
            BmiCategory::MildObesity => "mildly obese",
            BmiCategory::ModerateObesity => "moderately obese",
            BmiCategory::SevereObesity => "severely obese",
        };
        f.write_str(label)
    }
}

/// Blood pressure category based on measurements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Hypotension (systolic < 90 or diastolic < 60)
    Hypotension,

    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    Elevated,

    /// Stage 1 Hypertension
    Hypertension1,

    /// Stage 2 Hypertension
    Hypertension2,

    /// Hypertensive crisis
    HypertensiveCrisis,
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BloodPressureCategory::Hypotension => "Hypotension",
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "Hypertension Stage 1",
            BloodPressureCategory::Hypertension2 => "Hypertension Stage 2",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
        };
        f.write_str(label)
    }
}

/// Result of evaluating a measurement: a status line plus a recommendation.
///
/// Both fields are always populated; absent or unusable input produces the
/// fixed sentinel wording instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Evaluation {
    /// Short status line, e.g. `"normal weight (BMI: 22.5)"`
    pub status: String,

    /// Recommendation text for the status
    pub recommendation: String,
}

/// Age rendered for display plus the age in whole years when it could be
/// computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AgeSummary {
    /// Display string, e.g. `"34 years and 1 day"`, or a fixed sentinel
    /// when the birthday is absent or invalid
    pub display: String,

    /// Age in whole years; `None` when it could not be computed
    pub years: Option<i32>,
}

/// Suggested daily calorie intake range derived from the basal metabolic
/// rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CalorieRange {
    /// Lower bound in kcal
    pub min: u32,

    /// Upper bound in kcal
    pub max: u32,
}

/// Age-bracket disease information and prevention advice.
///
/// Both lists are empty when the age is unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DiseaseAdvisory {
    /// What to watch for in this age bracket
    pub info: Vec<String>,

    /// How to stay ahead of it
    pub prevention: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_labels() {
        assert_eq!(BmiCategory::Normal.to_string(), "normal weight");
        assert_eq!(BmiCategory::SevereObesity.to_string(), "severely obese");
        assert_eq!(
            BloodPressureCategory::Hypertension1.to_string(),
            "Hypertension Stage 1"
        );
        assert_eq!(
            BloodPressureCategory::HypertensiveCrisis.to_string(),
            "Hypertensive Crisis"
        );
    }
}
