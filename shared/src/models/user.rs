//! User Model

use serde::{Deserialize, Serialize};

/// Customer record returned by `POST /login` and `POST /signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    /// Account role; the server calls this field `type`
    #[serde(rename = "type", alias = "role")]
    pub role: String,
}

/// Admin record returned by `POST /admin-login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: String,
}
