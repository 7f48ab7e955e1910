//! Staffing lines for a proposal.
use crate::units::{Dimensionless, MoneyPerHour};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a staffing role.
///
/// There is a small fixed vocabulary of roles, but users may also specify their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// The lead instructor
    MainInstructor,
    /// A supporting instructor
    AssistantInstructor,
    /// An unspecified role
    Other,
    /// A user-specified role
    Custom(String),
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("main instructor") {
            Self::MainInstructor
        } else if name.eq_ignore_ascii_case("assistant instructor") {
            Self::AssistantInstructor
        } else if name.is_empty()
            || name.eq_ignore_ascii_case("others")
            || name.eq_ignore_ascii_case("other role")
        {
            Self::Other
        } else {
            Self::Custom(name.to_string())
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainInstructor => write!(f, "Main Instructor"),
            Self::AssistantInstructor => write!(f, "Assistant Instructor"),
            Self::Other => write!(f, "Other Role"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// One staffing line
#[derive(Debug, Clone, PartialEq)]
pub struct ManpowerRole {
    /// The role being staffed
    pub role: Role,
    /// Number of staff in this role
    pub quantity: Dimensionless,
    /// Internal (cost-basis) hourly rate per member of staff
    pub hourly_rate: MoneyPerHour,
}

impl ManpowerRole {
    /// Create a new [`ManpowerRole`]
    pub fn new<R: Into<Role>>(role: R, quantity: f64, hourly_rate: f64) -> Self {
        Self {
            role: role.into(),
            quantity: Dimensionless(quantity),
            hourly_rate: MoneyPerHour(hourly_rate),
        }
    }

    /// Whether this row should be included when pricing.
    ///
    /// Rows without a positive quantity and a positive rate are ignored.
    pub fn is_valid(&self) -> bool {
        self.quantity.is_positive()
            && self.quantity.value().is_finite()
            && self.hourly_rate.is_positive()
            && self.hourly_rate.is_finite()
    }

    /// The internal cost per hour for all staff in this role
    pub fn internal_rate(&self) -> MoneyPerHour {
        self.hourly_rate * self.quantity
    }
}

/// Iterate over the rows of a manpower roster which should be included when pricing
pub fn iter_valid_roles(roster: &[ManpowerRole]) -> impl Iterator<Item = &ManpowerRole> {
    roster.iter().filter(|role| role.is_valid())
}
