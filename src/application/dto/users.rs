use crate::domain::user::{Capability, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{auth::AuthenticatedUser, serde_time};

/// Public view of an account. Never carries the password hash or email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let display_name = user.display_name();
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            display_name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<&Capability> for CapabilityView {
    fn from(cap: &Capability) -> Self {
        Self {
            resource: cap.resource.clone(),
            action: cap.action.clone(),
        }
    }
}

/// Lifetime of the token that made the request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionView {
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// `/auth/me`: the caller's account, contact details and what their role permits.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub capabilities: Vec<CapabilityView>,
    pub session: SessionView,
}

impl UserProfileDto {
    pub fn from_parts(user: User, auth: &AuthenticatedUser, now: DateTime<Utc>) -> Self {
        let mut capabilities: Vec<CapabilityView> =
            auth.capabilities.iter().map(CapabilityView::from).collect();
        capabilities.sort_unstable();

        let session = SessionView {
            expires_at: auth.expires_at,
            expires_in: (auth.expires_at - now).num_seconds().max(0),
        };

        Self {
            email: user.email.as_ref().map(ToString::to_string),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user: user.into(),
            capabilities,
            session,
        }
    }
}
