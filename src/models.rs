// Data models for the employee roster

use chrono::NaiveDate;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

/// A single employee record as persisted in the roster blob.
///
/// Fields serialize in camelCase to match the stored JSON layout
/// (`fullName`, `dateOfBirth`, `profileImage`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque unique identifier, assigned once at creation and never changed.
    pub id: String,
    pub full_name: String,
    pub gender: Gender,
    /// Calendar date, stored as an ISO `YYYY-MM-DD` string.
    pub date_of_birth: NaiveDate,
    /// Home state, drawn from `INDIA_STATES`.
    pub state: String,
    pub active: bool,
    /// Data URI, local path, or generated avatar URL.
    pub profile_image: String,
}

/// Gender enumeration. Serializes as the capitalized variant name
/// (`"Male"`, `"Female"`, `"Other"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Create/edit payload: everything an `Employee` carries except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub state: String,
    pub active: bool,
    /// Explicit image value. `None` (or empty) gets a generated avatar URL
    /// when the draft is materialized.
    pub profile_image: Option<String>,
}

impl EmployeeDraft {
    /// Draft with the creation defaults: active, no explicit image.
    pub fn new(
        full_name: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
        state: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            gender,
            date_of_birth,
            state: state.into(),
            active: true,
            profile_image: None,
        }
    }

    /// Form-level checks: non-empty name, state on the closed list.
    /// Gender and date validity hold by construction.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(eyre!("Full name is required"));
        }
        if !is_known_state(&self.state) {
            return Err(eyre!("Unknown state: {}", self.state));
        }
        Ok(())
    }

    /// Build the stored record under the given id, filling a missing
    /// profile image with the generated avatar URL.
    pub fn into_employee(self, id: String) -> Employee {
        let profile_image = match self.profile_image {
            Some(image) if !image.is_empty() => image,
            _ => avatar_url(&self.full_name, self.gender),
        };
        Employee {
            id,
            full_name: self.full_name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            state: self.state,
            active: self.active,
            profile_image,
        }
    }
}

/// The closed list of home states accepted by `EmployeeDraft::validate`.
pub const INDIA_STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// True when `state` appears on the closed list.
pub fn is_known_state(state: &str) -> bool {
    INDIA_STATES.contains(&state)
}

/// Deterministic avatar URL for records saved without an uploaded image.
/// The seed is the URL-encoded full name.
pub fn avatar_url(full_name: &str, gender: Gender) -> String {
    let seed = urlencoding::encode(full_name);
    match gender {
        Gender::Male => format!(
            "https://api.dicebear.com/7.x/adventurer/svg?seed={}&gender=male",
            seed
        ),
        Gender::Female => format!(
            "https://api.dicebear.com/7.x/adventurer/svg?seed={}&gender=female",
            seed
        ),
        Gender::Other => format!("https://api.dicebear.com/7.x/identicon/svg?seed={}", seed),
    }
}
