use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Gender as recorded on the user profile.
///
/// The basal metabolic rate formula only distinguishes male and female;
/// everything else falls back to a fixed estimate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Gender {
    /// Parse a free-form profile label. Unknown labels map to
    /// [`Gender::Unspecified`] rather than an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

/// Profile attributes the evaluators need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Profile {
    /// Gender as recorded on the profile
    pub gender: Gender,

    /// Birthday as an ISO `YYYY-MM-DD` string, if the user has set one
    pub birthday: Option<String>,
}
