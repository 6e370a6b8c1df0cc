// Domain entities and value objects
pub mod evaluation;
pub mod insights;
pub mod measurement;
pub mod profile;

// Re-export common types for easier imports
pub use evaluation::{
    AgeSummary, BloodPressureCategory, BmiCategory, CalorieRange, DiseaseAdvisory, Evaluation,
};
pub use insights::{
    BloodPressureInsights, HealthSummary, HealthTrends, NutritionAnalysis, UpcomingAppointment,
};
pub use measurement::{
    BloodPressureRecord, BloodPressureSample, BodyMeasurement, BodyRecord, DietEntry, Portion,
};
pub use profile::{Gender, Profile};
