pub mod advisory;
pub mod age;
pub mod blood_pressure;
pub mod bmi;
pub mod energy;
pub mod exercise;
pub mod nutrition;
pub mod summary;

// Domain services
// This module contains the evaluation logic. Everything here is a pure,
// synchronous function over caller-supplied values.

use thiserror::Error;

// Re-export the most commonly used evaluators
pub use advisory::disease_info_and_prevention;
pub use age::age_and_elapsed_days;
pub use blood_pressure::{categorize_blood_pressure, evaluate_blood_pressure};
pub use bmi::{calculate_bmi, categorize_bmi, evaluate_body_mass};
pub use energy::{basal_metabolic_rate, evaluate_daily_intake, suggested_calorie_range};
pub use exercise::exercise_calories;
pub use summary::{health_summary, health_trends};

/// Evaluation service errors
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Insufficient data error
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}
