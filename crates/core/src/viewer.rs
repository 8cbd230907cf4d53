//! The authenticated viewer that action eligibility is evaluated against.
//!
//! The viewer is passed explicitly into every evaluation rather than read from ambient state.

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User type of the viewer, as reported by the authentication provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Transportation,
    Pharmacist,
    Volunteer,
    StaffReadOnly,
    Staff,
    NurseReadOnly,
    Nurse,
    Doctor,
    WardAdmin,
    LocalBodyAdmin,
    DistrictLabAdmin,
    DistrictReadOnlyAdmin,
    DistrictAdmin,
    StateLabAdmin,
    StateReadOnlyAdmin,
    StateAdmin,
    /// Any user type this crate does not know about. Never elevated.
    #[serde(other)]
    Other,
}

impl Role {
    /// Roles that may archive files uploaded by someone else.
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::DistrictAdmin | Role::StateAdmin)
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    /// Parses a user type string with the same names used on the wire; unknown names are
    /// [`Role::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let de: StrDeserializer<'_, ValueError> = s.trim().into_deserializer();
        Ok(Role::deserialize(de).unwrap_or(Role::Other))
    }
}

/// Identity of the person looking at the panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub username: String,
    #[serde(rename = "user_type")]
    pub role: Role,
}

impl Viewer {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}
