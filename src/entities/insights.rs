use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::evaluation::{
    AgeSummary, BloodPressureCategory, BmiCategory, DiseaseAdvisory, Evaluation,
};

/// Blood pressure statistics over a set of readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureInsights {
    /// Average systolic reading over the analysis period
    pub avg_systolic: f64,

    /// Average diastolic reading over the analysis period
    pub avg_diastolic: f64,

    /// Average pulse rate over the analysis period (if available)
    pub avg_pulse: Option<f64>,

    /// Highest recorded systolic reading during the period
    pub max_systolic: u16,

    /// Highest recorded diastolic reading during the period
    pub max_diastolic: u16,

    /// Lowest recorded systolic reading during the period
    pub min_systolic: u16,

    /// Lowest recorded diastolic reading during the period
    pub min_diastolic: u16,

    /// Blood pressure category based on average readings
    pub category: BloodPressureCategory,

    /// Number of readings analyzed
    pub reading_count: usize,

    /// Analysis period in days
    pub period_days: u32,

    /// Timestamp of the analysis
    pub generated_at: DateTime<Utc>,
}

/// One point on the blood pressure trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureTrendPoint {
    /// The day the reading was taken
    pub taken_on: NaiveDate,

    /// Systolic value
    pub systolic: u16,

    /// Diastolic value
    pub diastolic: u16,

    /// Category of this single reading
    pub category: BloodPressureCategory,
}

/// One point on the weight trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct WeightTrendPoint {
    /// The day the reading was taken
    pub taken_on: NaiveDate,

    /// Weight in kilograms
    pub weight_kg: f64,
}

/// One point on the BMI trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiTrendPoint {
    /// The day the reading was taken
    pub taken_on: NaiveDate,

    /// BMI rounded to one decimal place
    pub bmi: f64,

    /// BMI category for this reading
    pub category: BmiCategory,
}

/// Recent-history trends for the dashboard, at most ten points per series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthTrends {
    /// Recent blood pressure readings with per-reading categories
    pub blood_pressure: Vec<BloodPressureTrendPoint>,

    /// Recent weight readings
    pub weight: Vec<WeightTrendPoint>,

    /// Recent BMI values; readings without a usable height contribute nothing
    pub bmi: Vec<BmiTrendPoint>,
}

/// Everything the dashboard shows about the user's current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthSummary {
    /// Age rendered for display
    pub age: AgeSummary,

    /// Evaluation of the latest blood pressure reading
    pub blood_pressure: Evaluation,

    /// Evaluation of the latest height/weight reading
    pub body_mass: Evaluation,

    /// Age-bracket advisory text
    pub advisory: DiseaseAdvisory,

    /// Fixed reference-only disclaimer
    pub disclaimer: String,
}

/// Daily nutrition totals and the derived advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct NutritionAnalysis {
    /// Total calories for the day
    pub total_calories: u32,

    /// Estimated protein intake in grams
    pub protein_grams: u32,

    /// Estimated carbohydrate intake in grams
    pub carbs_grams: u32,

    /// Estimated fat intake in grams
    pub fat_grams: u32,

    /// Banded advice derived from the total
    pub recommendations: Vec<String>,
}

/// The next scheduled medical visit, as supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UpcomingAppointment {
    /// Appointment date
    pub date: NaiveDate,

    /// Hospital or clinic name
    pub hospital: String,

    /// Department being visited
    pub department: String,

    /// Reason for the visit
    pub reason: String,
}
