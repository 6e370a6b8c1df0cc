use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// A single blood pressure measurement supplied by the caller.
///
/// Transient input: the engine never stores it. Validation is opt-in via
/// [`crate::services::blood_pressure::validate_sample`]; the evaluators
/// themselves accept any well-typed values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureSample {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: u16,

    /// Optional pulse rate in beats per minute
    #[validate(range(min = 20, max = 250, message = "Pulse must be between 20 and 250"))]
    pub pulse: Option<u16>,
}

/// A height/weight measurement supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BodyMeasurement {
    /// Height in centimeters
    #[validate(range(min = 50.0, max = 280.0, message = "Height must be between 50 and 280 cm"))]
    pub height_cm: f64,

    /// Weight in kilograms
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: f64,
}

/// A dated blood pressure reading, used as trend and insight input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureRecord {
    /// The day the reading was taken
    pub taken_on: NaiveDate,

    /// The measured values
    pub sample: BloodPressureSample,
}

/// A dated height/weight reading, used as trend input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BodyRecord {
    /// The day the reading was taken
    pub taken_on: NaiveDate,

    /// The measured values
    pub measurement: BodyMeasurement,
}

/// Portion size for food-calorie estimation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    Small,
    #[default]
    Medium,
    Large,
}

/// One logged meal, used for daily nutrition analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DietEntry {
    /// The day the meal was consumed
    pub consumed_on: NaiveDate,

    /// What was eaten, as a food label (e.g. "white rice")
    pub food: String,

    /// Portion size, used when no explicit calorie count was logged
    pub portion: Portion,

    /// Calories as logged by the user; estimated from the food label when absent
    pub calories: Option<u32>,
}
