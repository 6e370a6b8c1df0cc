use crate::entities::evaluation::DiseaseAdvisory;

/// Age-bracket disease information and prevention advice.
///
/// Returns empty lists when the age is unknown. The brackets are
/// `<20, <30, <40, <50, <65, >=65`, evaluated top to bottom.
pub fn disease_info_and_prevention(age_years: Option<i32>) -> DiseaseAdvisory {
    let Some(age) = age_years else {
        return DiseaseAdvisory::default();
    };

    let (info, prevention): (&[&str], &[&str]) = if age < 20 {
        (
            &["Adolescence: focus on growth and development, balanced nutrition, and building exercise habits."],
            &["Keep a regular schedule, eat a balanced diet, exercise moderately, and avoid staying up late."],
        )
    } else if age < 30 {
        (
            &["Young adulthood: watch for metabolic syndrome and manage stress."],
            &["Schedule regular checkups, keep exercising, and look after your mental health."],
        )
    } else if age < 40 {
        (
            &[
                "Risks of hypertension, metabolic syndrome, fatty liver, and cardiovascular disease gradually increase.",
                "Build healthy lifestyle habits and schedule regular checkups.",
            ],
            &[
                "Build an exercise habit and maintain an ideal weight.",
                "Avoid late nights and excessive stress.",
                "Eat a balanced diet and cut down on processed food.",
                "Get regular health checkups to catch problems early.",
            ],
        )
    } else if age < 50 {
        (
            &["Midlife: watch for metabolic disease, schedule cancer screenings, and prevent osteoporosis."],
            &["Get regular cancer screenings, supplement calcium, and keep up strength training."],
        )
    } else if age < 65 {
        (
            &["Later midlife: watch for cardiovascular disease, diabetes complications, and joint degeneration."],
            &["Follow up on chronic conditions regularly, exercise moderately, and stay socially engaged."],
        )
    } else {
        (
            &[
                "Senior years: watch for dementia, falls, and malnutrition.",
                "Schedule regular checkups, manage chronic conditions, and prevent falls.",
            ],
            &[
                "Keep up cognitive training and social activity.",
                "Keep the home environment safe to prevent falls.",
                "Get a nutrition assessment and regular health checkups.",
            ],
        )
    };

    DiseaseAdvisory {
        info: info.iter().map(|line| line.to_string()).collect(),
        prevention: prevention.iter().map(|line| line.to_string()).collect(),
    }
}
