use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::entities::insights::NutritionAnalysis;
use crate::entities::measurement::{DietEntry, Portion};

/// Estimate applied to foods the table doesn't know.
const DEFAULT_FOOD_CALORIES: u32 = 100;

/// Per-portion calorie estimates for one food.
#[derive(Debug, Clone, Copy)]
struct PortionCalories {
    small: u32,
    medium: u32,
    large: u32,
}

/// Calorie estimates for common foods.
static FOOD_CALORIES: Lazy<HashMap<&'static str, PortionCalories>> = Lazy::new(|| {
    let entry = |small, medium, large| PortionCalories {
        small,
        medium,
        large,
    };
    HashMap::from([
        ("white rice", entry(150, 200, 300)),
        ("noodles", entry(180, 250, 350)),
        ("chicken breast", entry(120, 160, 240)),
        ("pork", entry(150, 200, 300)),
        ("beef", entry(140, 180, 270)),
        ("fish", entry(100, 130, 200)),
        ("egg", entry(70, 80, 90)),
        ("vegetables", entry(20, 30, 50)),
        ("fruit", entry(50, 80, 120)),
        ("milk", entry(60, 100, 150)),
        ("bread", entry(80, 120, 180)),
        ("cookies", entry(100, 150, 250)),
    ])
});

/// Estimate the calories of a food portion, falling back to
/// [`DEFAULT_FOOD_CALORIES`] for foods the table doesn't carry.
pub fn estimate_food_calories(food: &str, portion: Portion) -> u32 {
    match FOOD_CALORIES.get(food) {
        Some(calories) => match portion {
            Portion::Small => calories.small,
            Portion::Medium => calories.medium,
            Portion::Large => calories.large,
        },
        None => {
            debug!(food, "unknown food label, using default calorie estimate");
            DEFAULT_FOOD_CALORIES
        }
    }
}

/// Analyze one day's diet entries.
///
/// Entries logged without an explicit calorie count are estimated from the
/// food label and portion. The macro-nutrient split assumes 15% of calories
/// from protein, 55% from carbohydrates, and 30% from fat, at 4/4/9 kcal
/// per gram.
pub fn analyze_daily_nutrition(entries: &[DietEntry], day: NaiveDate) -> NutritionAnalysis {
    let total_calories: u32 = entries
        .iter()
        .filter(|entry| entry.consumed_on == day)
        .map(|entry| {
            entry
                .calories
                .unwrap_or_else(|| estimate_food_calories(&entry.food, entry.portion))
        })
        .sum();

    let protein_grams = (total_calories as f64 * 0.15 / 4.0) as u32;
    let carbs_grams = (total_calories as f64 * 0.55 / 4.0) as u32;
    let fat_grams = (total_calories as f64 * 0.30 / 9.0) as u32;

    let recommendation = if total_calories < 1200 {
        "Calorie intake may be insufficient; consider adding balanced, nutritious foods"
    } else if total_calories > 2500 {
        "Calorie intake is on the high side; consider moderating portions"
    } else {
        "Calorie intake is within a reasonable range"
    };

    NutritionAnalysis {
        total_calories,
        protein_grams,
        carbs_grams,
        fat_grams,
        recommendations: vec![recommendation.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, d).unwrap()
    }

    fn entry(consumed_on: NaiveDate, food: &str, portion: Portion, calories: Option<u32>) -> DietEntry {
        DietEntry {
            consumed_on,
            food: food.to_string(),
            portion,
            calories,
        }
    }

    #[test]
    fn test_estimate_food_calories_portions() {
        assert_eq!(estimate_food_calories("egg", Portion::Small), 70);
        assert_eq!(estimate_food_calories("egg", Portion::Medium), 80);
        assert_eq!(estimate_food_calories("egg", Portion::Large), 90);
    }

    #[test]
    fn test_estimate_food_calories_unknown_food() {
        assert_eq!(estimate_food_calories("durian", Portion::Large), 100);
    }

    #[test]
    fn test_analyze_daily_nutrition_mixes_logged_and_estimated() {
        let today = day(2024, 6, 15);
        let entries = vec![
            entry(today, "white rice", Portion::Medium, Some(250)),
            entry(today, "egg", Portion::Medium, None), // estimated: 80
            entry(day(2024, 6, 14), "beef", Portion::Large, Some(900)), // other day
        ];

        let analysis = analyze_daily_nutrition(&entries, today);
        assert_eq!(analysis.total_calories, 330);
        assert!(analysis.recommendations[0].contains("may be insufficient"));
    }

    #[test]
    fn test_analyze_daily_nutrition_macro_split() {
        let today = day(2024, 6, 15);
        let entries = vec![entry(today, "noodles", Portion::Medium, Some(2000))];

        let analysis = analyze_daily_nutrition(&entries, today);
        assert_eq!(analysis.protein_grams, 75); // 2000 * 0.15 / 4
        assert_eq!(analysis.carbs_grams, 275); // 2000 * 0.55 / 4
        assert_eq!(analysis.fat_grams, 66); // 2000 * 0.30 / 9, truncated
        assert!(analysis.recommendations[0].contains("reasonable range"));
    }

    #[test]
    fn test_analyze_daily_nutrition_high_intake() {
        let today = day(2024, 6, 15);
        let entries = vec![entry(today, "cookies", Portion::Large, Some(2600))];

        let analysis = analyze_daily_nutrition(&entries, today);
        assert!(analysis.recommendations[0].contains("high side"));
    }

    #[test]
    fn test_analyze_daily_nutrition_empty_day() {
        let analysis = analyze_daily_nutrition(&[], day(2024, 6, 15));
        assert_eq!(analysis.total_calories, 0);
        assert_eq!(analysis.protein_grams, 0);
        assert!(analysis.recommendations[0].contains("may be insufficient"));
    }
}
