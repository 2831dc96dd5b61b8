//! Client-related types shared between server and client
//!
//! Request/response DTOs for the auth, search and assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::models::user::{AdminInfo, UserInfo};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /login`, `POST /admin-login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: String,
}

/// Signup request (`POST /signup`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub user_type: String,
}

/// Login/signup response data
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Admin login response data
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    pub message: String,
    pub admin: AdminInfo,
}

// =============================================================================
// Search / assistant DTOs
// =============================================================================

/// Free-text catalog search request (`POST /search`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Assistant chat request (`POST /ask`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

/// Assistant chat reply
#[derive(Debug, Clone, Deserialize)]
pub struct AskReply {
    pub reply: String,
}
