use chrono::Utc;
use tracing::debug;
use validator::Validate;

use crate::entities::evaluation::{BloodPressureCategory, Evaluation};
use crate::entities::insights::BloodPressureInsights;
use crate::entities::measurement::{BloodPressureRecord, BloodPressureSample};
use crate::services::EvaluationError;

/// Categorize blood pressure based on measurements.
///
/// The arms form an ordered chain; the first match wins. The `||` upper
/// bounds mean a mixed reading (say 200/70) lands in the earliest band whose
/// arm matches, not necessarily the most severe one. That ordering is part
/// of the rule set and must not be rearranged.
pub fn categorize_blood_pressure(systolic: u16, diastolic: u16) -> BloodPressureCategory {
    if systolic < 90 || diastolic < 60 {
        BloodPressureCategory::Hypotension
    } else if systolic < 120 && diastolic < 80 {
        BloodPressureCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BloodPressureCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BloodPressureCategory::Hypertension1
    } else if systolic < 180 || diastolic < 120 {
        BloodPressureCategory::Hypertension2
    } else {
        BloodPressureCategory::HypertensiveCrisis
    }
}

fn recommendation(category: BloodPressureCategory) -> &'static str {
    match category {
        BloodPressureCategory::Hypotension => {
            "Consult a physician, stay hydrated, and avoid standing up suddenly"
        }
        BloodPressureCategory::Normal => "Keep up your healthy lifestyle",
        BloodPressureCategory::Elevated => {
            "Reduce sodium intake, exercise more, and monitor regularly"
        }
        BloodPressureCategory::Hypertension1 => "Seek medical advice and adjust your lifestyle",
        BloodPressureCategory::Hypertension2 => "Seek medical treatment as soon as possible",
        BloodPressureCategory::HypertensiveCrisis => "Seek emergency medical care immediately!",
    }
}

/// Evaluate the latest blood pressure reading.
///
/// Returns the fixed "no data" pair when no reading is supplied.
pub fn evaluate_blood_pressure(latest: Option<&BloodPressureSample>) -> Evaluation {
    let Some(sample) = latest else {
        return Evaluation {
            status: "no blood pressure data".to_string(),
            recommendation: "Record a blood pressure reading to receive an evaluation".to_string(),
        };
    };

    let category = categorize_blood_pressure(sample.systolic, sample.diastolic);
    Evaluation {
        status: category.to_string(),
        recommendation: recommendation(category).to_string(),
    }
}

/// Validate a blood pressure sample against physiological ranges.
///
/// Also enforces that systolic is greater than diastolic, which the range
/// annotations alone cannot express.
pub fn validate_sample(sample: &BloodPressureSample) -> Result<(), EvaluationError> {
    if let Err(validation_errors) = sample.validate() {
        let error_message = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        if let Some(msg) = &err.message {
                            msg.to_string()
                        } else {
                            format!("Invalid {}", field)
                        }
                    })
                    .collect();
                format!("{}: {}", field, error_msgs.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");

        return Err(EvaluationError::Validation(error_message));
    }

    if sample.systolic <= sample.diastolic {
        return Err(EvaluationError::Validation(
            "Systolic pressure must be greater than diastolic pressure".to_string(),
        ));
    }

    Ok(())
}

/// Calculate blood pressure insights from a set of dated readings.
///
/// The category reflects the mean reading over the period, not any single
/// measurement.
pub fn blood_pressure_insights(
    readings: &[BloodPressureRecord],
    period_days: u32,
) -> Result<BloodPressureInsights, EvaluationError> {
    if readings.is_empty() {
        return Err(EvaluationError::InsufficientData(
            "No readings available to generate insights".to_string(),
        ));
    }

    let mut systolic_sum: f64 = 0.0;
    let mut diastolic_sum: f64 = 0.0;
    let mut pulse_sum: f64 = 0.0;
    let mut pulse_count: usize = 0;

    let mut max_systolic: u16 = 0;
    let mut max_diastolic: u16 = 0;
    let mut min_systolic: u16 = u16::MAX;
    let mut min_diastolic: u16 = u16::MAX;

    for record in readings {
        let sample = &record.sample;
        systolic_sum += sample.systolic as f64;
        diastolic_sum += sample.diastolic as f64;

        if let Some(pulse) = sample.pulse {
            pulse_sum += pulse as f64;
            pulse_count += 1;
        }

        max_systolic = max_systolic.max(sample.systolic);
        max_diastolic = max_diastolic.max(sample.diastolic);
        min_systolic = min_systolic.min(sample.systolic);
        min_diastolic = min_diastolic.min(sample.diastolic);
    }

    let avg_systolic = systolic_sum / readings.len() as f64;
    let avg_diastolic = diastolic_sum / readings.len() as f64;
    let avg_pulse = if pulse_count > 0 {
        Some(pulse_sum / pulse_count as f64)
    } else {
        None
    };

    let category = categorize_blood_pressure(avg_systolic as u16, avg_diastolic as u16);
    debug!(
        reading_count = readings.len(),
        ?category,
        "generated blood pressure insights"
    );

    Ok(BloodPressureInsights {
        avg_systolic,
        avg_diastolic,
        avg_pulse,
        max_systolic,
        max_diastolic,
        min_systolic,
        min_diastolic,
        category,
        reading_count: readings.len(),
        period_days,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(systolic: u16, diastolic: u16, pulse: Option<u16>) -> BloodPressureSample {
        BloodPressureSample {
            systolic,
            diastolic,
            pulse,
        }
    }

    fn record(systolic: u16, diastolic: u16, pulse: Option<u16>) -> BloodPressureRecord {
        BloodPressureRecord {
            taken_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            sample: sample(systolic, diastolic, pulse),
        }
    }

    #[test]
    fn test_bp_category_hypotension() {
        assert_eq!(
            categorize_blood_pressure(85, 70),
            BloodPressureCategory::Hypotension
        );
        assert_eq!(
            categorize_blood_pressure(110, 55),
            BloodPressureCategory::Hypotension
        );
    }

    #[test]
    fn test_bp_category_normal() {
        assert_eq!(
            categorize_blood_pressure(119, 79),
            BloodPressureCategory::Normal
        );
        assert_eq!(
            categorize_blood_pressure(110, 75),
            BloodPressureCategory::Normal
        );
    }

    #[test]
    fn test_bp_category_elevated() {
        assert_eq!(
            categorize_blood_pressure(125, 75),
            BloodPressureCategory::Elevated
        );
    }

    #[test]
    fn test_bp_category_stage1() {
        // 120/80 fails both the normal and elevated arms (80 is not < 80)
        // and then matches the stage 1 arm via systolic < 140
        assert_eq!(
            categorize_blood_pressure(120, 80),
            BloodPressureCategory::Hypertension1
        );
        assert_eq!(
            categorize_blood_pressure(135, 85),
            BloodPressureCategory::Hypertension1
        );
    }

    #[test]
    fn test_bp_category_stage2() {
        assert_eq!(
            categorize_blood_pressure(150, 95),
            BloodPressureCategory::Hypertension2
        );
        assert_eq!(
            categorize_blood_pressure(145, 115),
            BloodPressureCategory::Hypertension2
        );
    }

    #[test]
    fn test_bp_category_crisis() {
        assert_eq!(
            categorize_blood_pressure(185, 125),
            BloodPressureCategory::HypertensiveCrisis
        );
    }

    #[test]
    fn test_bp_category_chain_order_governs_mixed_readings() {
        // The || arms route these by chain position, not by severity.
        assert_eq!(
            categorize_blood_pressure(200, 70),
            BloodPressureCategory::Hypertension1
        );
        assert_eq!(
            categorize_blood_pressure(185, 100),
            BloodPressureCategory::Hypertension2
        );
    }

    #[test]
    fn test_evaluate_blood_pressure_no_data() {
        let evaluation = evaluate_blood_pressure(None);
        assert_eq!(evaluation.status, "no blood pressure data");
        assert_eq!(
            evaluation.recommendation,
            "Record a blood pressure reading to receive an evaluation"
        );
    }

    #[test]
    fn test_evaluate_blood_pressure_normal() {
        let reading = sample(110, 70, Some(68));
        let evaluation = evaluate_blood_pressure(Some(&reading));
        assert_eq!(evaluation.status, "Normal");
        assert_eq!(evaluation.recommendation, "Keep up your healthy lifestyle");
    }

    #[test]
    fn test_validate_sample_ok() {
        assert!(validate_sample(&sample(120, 80, Some(72))).is_ok());
    }

    #[test]
    fn test_validate_sample_out_of_range() {
        let result = validate_sample(&sample(350, 80, None));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Systolic"));
    }

    #[test]
    fn test_validate_sample_systolic_not_greater_than_diastolic() {
        let result = validate_sample(&sample(80, 80, None));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("greater than"));
    }

    #[test]
    fn test_insights_over_readings() {
        let readings = vec![
            record(120, 80, Some(72)),
            record(130, 85, Some(75)),
            record(125, 82, None),
        ];

        let insights = blood_pressure_insights(&readings, 30).unwrap();
        assert_eq!(insights.reading_count, 3);
        assert_eq!(insights.period_days, 30);
        assert!((insights.avg_systolic - 125.0).abs() < 1e-9);
        assert_eq!(insights.max_systolic, 130);
        assert_eq!(insights.min_diastolic, 80);
        // Pulse average only counts readings that carried one
        assert!((insights.avg_pulse.unwrap() - 73.5).abs() < 1e-9);
        // Mean of 125/82.3 falls to stage 1 via the ordered chain
        assert_eq!(insights.category, BloodPressureCategory::Hypertension1);
    }

    #[test]
    fn test_insights_empty_readings() {
        let result = blood_pressure_insights(&[], 30);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No readings"));
    }
}
