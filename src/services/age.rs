use chrono::{Datelike, Local, NaiveDate};

use crate::entities::evaluation::AgeSummary;

const NOT_SET: &str = "not set";
const INVALID_BIRTHDAY: &str = "invalid birthday";

/// Compute the age display string and age in years from an ISO `YYYY-MM-DD`
/// birthday, relative to the local date.
///
/// See [`age_and_elapsed_days_on`] for the deterministic variant.
pub fn age_and_elapsed_days(birthday: Option<&str>) -> AgeSummary {
    age_and_elapsed_days_on(Local::now().date_naive(), birthday)
}

/// Compute the age display string and age in years relative to `today`.
///
/// The display counts whole years plus days since the most recent birthday
/// anniversary. Absent input, unparsable input, birthdays in the future,
/// and anniversaries that do not exist in the relevant year (Feb 29) all
/// yield a fixed sentinel string and `None` years; this never fails to the
/// caller.
pub fn age_and_elapsed_days_on(today: NaiveDate, birthday: Option<&str>) -> AgeSummary {
    let Some(raw) = birthday.map(str::trim).filter(|value| !value.is_empty()) else {
        return AgeSummary {
            display: NOT_SET.to_string(),
            years: None,
        };
    };

    let Ok(birth) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return invalid();
    };

    let before_anniversary = (today.month(), today.day()) < (birth.month(), birth.day());
    let years = today.year() - birth.year() - i32::from(before_anniversary);
    if years < 0 {
        return invalid();
    }

    // The anniversary may be unrepresentable (Feb 29 in a common year);
    // that counts as a failed computation, matching the parse failures.
    let Some(this_year) = birth.with_year(today.year()) else {
        return invalid();
    };
    let last_anniversary = if today < this_year {
        match birth.with_year(today.year() - 1) {
            Some(date) => date,
            None => return invalid(),
        }
    } else {
        this_year
    };

    let days = (today - last_anniversary).num_days();
    AgeSummary {
        display: format!("{} years and {} days", years, days),
        years: Some(years),
    }
}

fn invalid() -> AgeSummary {
    AgeSummary {
        display: INVALID_BIRTHDAY.to_string(),
        years: None,
    }
}
