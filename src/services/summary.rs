use chrono::NaiveDate;
use tracing::debug;

use crate::entities::insights::{
    BloodPressureTrendPoint, BmiTrendPoint, HealthSummary, HealthTrends, UpcomingAppointment,
    WeightTrendPoint,
};
use crate::entities::measurement::{
    BloodPressureRecord, BloodPressureSample, BodyMeasurement, BodyRecord,
};
use crate::entities::profile::Profile;
use crate::services::advisory::disease_info_and_prevention;
use crate::services::age::age_and_elapsed_days;
use crate::services::blood_pressure::{categorize_blood_pressure, evaluate_blood_pressure};
use crate::services::bmi::{calculate_bmi, categorize_bmi, evaluate_body_mass};

/// Trend series are capped at the most recent readings.
const TREND_POINTS: usize = 10;

const DISCLAIMER: &str = "The information above is for reference only; consult a medical \
                          professional for an actual diagnosis and advice.";

/// Compose the dashboard summary from the profile and the latest readings.
///
/// The caller supplies the most recent stored reading of each kind (or
/// `None`); everything else is derived here.
pub fn health_summary(
    profile: &Profile,
    latest_bp: Option<&BloodPressureSample>,
    latest_body: Option<&BodyMeasurement>,
) -> HealthSummary {
    let age = age_and_elapsed_days(profile.birthday.as_deref());
    let advisory = disease_info_and_prevention(age.years);
    let blood_pressure = evaluate_blood_pressure(latest_bp);
    let body_mass = evaluate_body_mass(latest_body, profile.gender, age.years);

    HealthSummary {
        age,
        blood_pressure,
        body_mass,
        advisory,
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// Build recent-history trends from stored readings.
///
/// Expects both slices ordered newest first, as the storage layer returns
/// them; only the first [`TREND_POINTS`] of each contribute. Body readings
/// without a usable height produce a weight point but no BMI point.
pub fn health_trends(
    bp_records: &[BloodPressureRecord],
    body_records: &[BodyRecord],
) -> HealthTrends {
    let blood_pressure = bp_records
        .iter()
        .take(TREND_POINTS)
        .map(|record| BloodPressureTrendPoint {
            taken_on: record.taken_on,
            systolic: record.sample.systolic,
            diastolic: record.sample.diastolic,
            category: categorize_blood_pressure(record.sample.systolic, record.sample.diastolic),
        })
        .collect();

    let mut weight = Vec::new();
    let mut bmi = Vec::new();
    for record in body_records.iter().take(TREND_POINTS) {
        weight.push(WeightTrendPoint {
            taken_on: record.taken_on,
            weight_kg: record.measurement.weight_kg,
        });

        if record.measurement.height_cm > 0.0 {
            let value = calculate_bmi(record.measurement.height_cm, record.measurement.weight_kg);
            bmi.push(BmiTrendPoint {
                taken_on: record.taken_on,
                bmi: (value * 10.0).round() / 10.0,
                category: categorize_bmi(value),
            });
        }
    }

    debug!(
        bp_points = bp_records.len().min(TREND_POINTS),
        body_points = body_records.len().min(TREND_POINTS),
        "built health trends"
    );

    HealthTrends {
        blood_pressure,
        weight,
        bmi,
    }
}

/// Phrase the reminder line for the next scheduled visit.
///
/// Visits within a week get the warning wording; anything further out gets
/// the plain announcement.
pub fn appointment_reminder(today: NaiveDate, appointment: &UpcomingAppointment) -> String {
    let days_left = (appointment.date - today).num_days();
    if days_left <= 7 {
        format!(
            "⚠️ You have an appointment on {} ({} days away) at {} {}; please prepare your documents.",
            appointment.date, days_left, appointment.hospital, appointment.department
        )
    } else {
        format!(
            "Next appointment: {} at {} {}.",
            appointment.date, appointment.hospital, appointment.department
        )
    }
}
