use crate::entities::evaluation::CalorieRange;
use crate::entities::profile::Gender;

/// Fallback BMR when the profile has no usable gender.
const DEFAULT_BMR: f64 = 1500.0;

/// Estimate the basal metabolic rate in kcal per day.
///
/// Two-branch Harris-Benedict style formula; profiles without a known
/// gender get a fixed estimate instead.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 66.0 + 13.7 * weight_kg + 5.0 * height_cm - 6.8 * age_years as f64,
        Gender::Female => 655.0 + 9.6 * weight_kg + 1.8 * height_cm - 4.7 * age_years as f64,
        Gender::Unspecified => DEFAULT_BMR,
    }
}

/// Suggested daily calorie intake range for a given BMR.
///
/// The 1.5x and 1.7x multipliers are a fixed activity heuristic; both
/// bounds truncate to whole kcal.
pub fn suggested_calorie_range(bmr: f64) -> CalorieRange {
    CalorieRange {
        min: (bmr * 1.5).floor() as u32,
        max: (bmr * 1.7).floor() as u32,
    }
}

/// Band the day's total intake against the suggested range and phrase the
/// result for display.
pub fn evaluate_daily_intake(total_calories: u32, range: &CalorieRange) -> String {
    if total_calories < range.min {
        format!(
            "Today's intake of {} kcal is below the suggested range ({}-{} kcal); consider adding nutritious food.",
            total_calories, range.min, range.max
        )
    } else if total_calories > range.max {
        format!(
            "Today's intake of {} kcal exceeds the suggested range ({}-{} kcal); watch your portions.",
            total_calories, range.min, range.max
        )
    } else {
        format!(
            "Today's intake of {} kcal falls within the suggested range ({}-{} kcal); keep it up!",
            total_calories, range.min, range.max
        )
    }
}
