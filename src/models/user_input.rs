use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::ThemeMode;

/// Input for logging in. The password is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Input for registering. Unlike login, the display name is supplied directly
/// rather than derived from the email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Body for setting the theme preference.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemeInput {
    pub theme: ThemeMode,
}

/// Response wrapper for theme reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemeResponse {
    pub theme: ThemeMode,
}
