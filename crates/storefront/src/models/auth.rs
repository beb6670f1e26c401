//! Login and registration bodies.

use serde::{Deserialize, Serialize};

use quickbite_core::UserId;

use crate::services::auth::{AuthenticatedUser, RegisteredUser};

/// `POST /api/auth/login` body. Missing fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body, as sent by the sign-up form.
///
/// `confirmPassword` and `agreeToTerms` are checked by the form and only
/// accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
    pub phone_number: Option<String>,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserBody {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<AuthenticatedUser> for UserBody {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserBody,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserBody {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<RegisteredUser> for RegisteredUserBody {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: RegisteredUserBody,
}
