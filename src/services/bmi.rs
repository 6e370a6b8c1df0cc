use crate::entities::evaluation::{BmiCategory, Evaluation};
use crate::entities::measurement::BodyMeasurement;
use crate::entities::profile::Gender;
use crate::services::energy::{basal_metabolic_rate, suggested_calorie_range};

/// Calculate BMI from a height in centimeters and a weight in kilograms.
///
/// Returns the sentinel `0.0` when either input is non-positive; callers
/// must treat `0.0` as "not computable", not as a valid BMI.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Categorize a BMI value.
///
/// The arms form an ordered chain of half-open bands; the first match wins.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.0 {
        BmiCategory::Normal
    } else if bmi < 27.0 {
        BmiCategory::Overweight
    } else if bmi < 30.0 {
        BmiCategory::MildObesity
    } else if bmi < 35.0 {
        BmiCategory::ModerateObesity
    } else {
        BmiCategory::SevereObesity
    }
}

fn recommendation(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Increase nutritional intake and add moderate strength training"
        }
        BmiCategory::Normal => "Keep up your healthy diet and exercise habits",
        BmiCategory::Overweight => "Watch your diet and add more aerobic exercise",
        BmiCategory::MildObesity => "Set up a weight-loss plan and consult a dietitian",
        BmiCategory::ModerateObesity => {
            "Consider medically supervised weight loss with regular follow-up"
        }
        BmiCategory::SevereObesity => "A medical evaluation is strongly recommended",
    }
}

/// Evaluate the latest height/weight reading.
///
/// Absent or non-positive data yields the fixed sentinel pairs. When the
/// gender is known and an age is supplied, the recommendation additionally
/// carries the basal metabolic rate and the suggested daily intake range.
pub fn evaluate_body_mass(
    latest: Option<&BodyMeasurement>,
    gender: Gender,
    age_years: Option<i32>,
) -> Evaluation {
    let Some(measurement) = latest else {
        return Evaluation {
            status: "no height/weight data".to_string(),
            recommendation: "Record your height and weight to receive an evaluation".to_string(),
        };
    };

    if measurement.height_cm <= 0.0 || measurement.weight_kg <= 0.0 {
        return Evaluation {
            status: "measurement error".to_string(),
            recommendation: "Check that the recorded height and weight are correct".to_string(),
        };
    }

    let bmi = calculate_bmi(measurement.height_cm, measurement.weight_kg);
    let category = categorize_bmi(bmi);
    let mut recommendation = recommendation(category).to_string();

    if gender != Gender::Unspecified {
        if let Some(age) = age_years {
            let bmr = basal_metabolic_rate(
                measurement.weight_kg,
                measurement.height_cm,
                age,
                gender,
            );
            let range = suggested_calorie_range(bmr);
            recommendation.push_str(&format!(
                ". Estimated basal metabolic rate: about {:.0} kcal; suggested daily intake: {}-{} kcal",
                bmr, range.min, range.max
            ));
        }
    }

    Evaluation {
        status: format!("{} (BMI: {:.1})", category, bmi),
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi() {
        let bmi = calculate_bmi(170.0, 70.0);
        assert!((bmi - 70.0 / (1.7 * 1.7)).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_bmi_sentinel_on_non_positive_input() {
        assert_eq!(calculate_bmi(0.0, 70.0), 0.0);
        assert_eq!(calculate_bmi(170.0, 0.0), 0.0);
        assert_eq!(calculate_bmi(-170.0, 70.0), 0.0);
    }

    #[test]
    fn test_categorize_bmi_band_boundaries() {
        assert_eq!(categorize_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(categorize_bmi(18.5), BmiCategory::Normal);
        assert_eq!(categorize_bmi(23.99), BmiCategory::Normal);
        // 24 falls into the next band; the bands are half-open
        assert_eq!(categorize_bmi(24.0), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(24.22), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(27.0), BmiCategory::MildObesity);
        assert_eq!(categorize_bmi(30.0), BmiCategory::ModerateObesity);
        assert_eq!(categorize_bmi(35.0), BmiCategory::SevereObesity);
    }

    #[test]
    fn test_evaluate_body_mass_no_data() {
        let evaluation = evaluate_body_mass(None, Gender::Unspecified, None);
        assert_eq!(evaluation.status, "no height/weight data");
    }

    #[test]
    fn test_evaluate_body_mass_bad_measurement() {
        let measurement = BodyMeasurement {
            height_cm: 0.0,
            weight_kg: 70.0,
        };
        let evaluation = evaluate_body_mass(Some(&measurement), Gender::Male, Some(30));
        assert_eq!(evaluation.status, "measurement error");
    }

    #[test]
    fn test_evaluate_body_mass_status_format() {
        let measurement = BodyMeasurement {
            height_cm: 170.0,
            weight_kg: 65.0,
        };
        let evaluation = evaluate_body_mass(Some(&measurement), Gender::Unspecified, None);
        assert_eq!(evaluation.status, "normal weight (BMI: 22.5)");
        assert_eq!(
            evaluation.recommendation,
            "Keep up your healthy diet and exercise habits"
        );
    }

    #[test]
    fn test_evaluate_body_mass_appends_intake_when_profile_known() {
        let measurement = BodyMeasurement {
            height_cm: 170.0,
            weight_kg: 70.0,
        };
        let evaluation = evaluate_body_mass(Some(&measurement), Gender::Male, Some(30));
        // bmr(70, 170, 30, male) = 1717.0 -> 2575..2918 kcal
        assert!(evaluation.recommendation.contains("about 1717 kcal"));
        assert!(evaluation.recommendation.contains("2575-2918 kcal"));
    }

    #[test]
    fn test_evaluate_body_mass_no_intake_without_age() {
        let measurement = BodyMeasurement {
            height_cm: 170.0,
            weight_kg: 70.0,
        };
        let evaluation = evaluate_body_mass(Some(&measurement), Gender::Male, None);
        assert!(!evaluation.recommendation.contains("kcal"));
    }
}
