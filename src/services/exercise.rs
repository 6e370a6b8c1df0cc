use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// MET applied to exercise labels the table doesn't know.
const DEFAULT_MET: f64 = 4.0;

/// MET (Metabolic Equivalent of Task) values per exercise label.
static MET_TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("brisk walking", 4.5),
        ("jogging", 7.0),
        ("cycling", 6.0),
        ("swimming", 8.0),
        ("yoga", 3.0),
        ("jump rope", 10.0),
        ("aerobic dance", 6.5),
        ("weight training", 5.0),
        ("hiking", 6.0),
        ("ball sports", 7.0),
        ("other", 4.0),
    ])
});

/// Look up the MET value for an exercise label, falling back to
/// [`DEFAULT_MET`] for labels the table doesn't carry.
pub fn met_for(exercise_type: &str) -> f64 {
    match MET_TABLE.get(exercise_type) {
        Some(met) => *met,
        None => {
            debug!(exercise_type, "unknown exercise label, using default MET");
            DEFAULT_MET
        }
    }
}

/// Estimate calories burned: MET x weight (kg) x duration (hours),
/// truncated to whole kcal.
pub fn exercise_calories(exercise_type: &str, duration_minutes: u32, weight_kg: f64) -> u32 {
    let met = met_for(exercise_type);
    (met * weight_kg * duration_minutes as f64 / 60.0).floor() as u32
}

/// Message shown right after a workout is logged.
pub fn session_encouragement(calories: u32) -> String {
    format!(
        "Great job! That workout burned about {} kcal - keep it going!",
        calories
    )
}

/// Message for the accumulated burn across logged workouts.
pub fn cumulative_encouragement(total_calories: u32) -> String {
    if total_calories >= 2000 {
        format!(
            "You've burned {} kcal so far - an excellent exercise habit, keep it up!",
            total_calories
        )
    } else if total_calories >= 1000 {
        format!(
            "You've burned {} kcal so far - one step closer to your health goals!",
            total_calories
        )
    } else {
        "You've started logging workouts - keep at it, health is within reach!".to_string()
    }
}
