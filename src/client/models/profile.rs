//! Profile models

use serde::{Deserialize, Serialize};

/// User profile, flattened from the `{user, profile}` wire shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Account ID
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    #[serde(default, rename = "pays", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, rename = "langue", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "pronous", skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileOwner {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Flat profile on the wire; `id` and `alias` must be present
#[derive(Debug, Clone, Deserialize)]
pub struct FlatProfile {
    id: String,
    alias: String,
    #[serde(flatten)]
    rest: Profile,
}

/// Either wire shape of a profile response
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfilePayload {
    Nested { user: ProfileOwner, profile: Profile },
    Flat(FlatProfile),
}

impl From<ProfilePayload> for Profile {
    fn from(payload: ProfilePayload) -> Self {
        match payload {
            ProfilePayload::Nested { user, profile } => Profile {
                id: user.id,
                email: user.email.or(profile.email),
                ..profile
            },
            ProfilePayload::Flat(FlatProfile { id, alias, rest }) => Profile { id, alias, ..rest },
        }
    }
}

/// Partial profile update; unset fields are left out of the request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    #[serde(rename = "pays", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "langue", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "pronous", skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

impl ProfileUpdate {
    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
