//! Login and signup flows
//!
//! Validation runs before the network call; on success the returned record
//! becomes the session identity. Validation errors never reach the wire.

use crate::api::AuthApi;
use crate::checkout::{login_rules, signup_rules, validate, FormValues};
use crate::error::{ClientError, ClientResult};
use crate::session::{IdentityStore, SessionIdentity};
use shared::client::{LoginRequest, SignupRequest};
use shared::models::user::{AdminInfo, UserInfo};

/// Raw signup form input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    fn values(&self) -> FormValues {
        FormValues::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .text("phone", &self.phone)
            .text("password", &self.password)
            .text("confirm_password", &self.confirm_password)
    }
}

fn login_values(email: &str, password: &str) -> FormValues {
    FormValues::new().text("email", email).text("password", password)
}

/// Customer login: validate, `POST /login`, store the identity
pub async fn login(
    api: &dyn AuthApi,
    identity: &mut IdentityStore,
    email: &str,
    password: &str,
) -> ClientResult<UserInfo> {
    let errors = validate(login_rules(), &login_values(email, password));
    if !errors.is_empty() {
        return Err(ClientError::Validation(errors));
    }

    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
        user_type: "user".to_string(),
    };
    let response = api.login(&request).await?;
    identity.login(SessionIdentity::Customer(response.user.clone()));
    Ok(response.user)
}

async fn signup_with_type(
    api: &dyn AuthApi,
    form: &SignupForm,
    user_type: &str,
) -> ClientResult<shared::client::LoginResponse> {
    let errors = validate(signup_rules(), &form.values());
    if !errors.is_empty() {
        return Err(ClientError::Validation(errors));
    }

    let request = SignupRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: Some(form.phone.clone()),
        password: form.password.clone(),
        user_type: user_type.to_string(),
    };
    api.signup(&request).await
}

/// Customer signup: validate, `POST /signup`, store the identity
pub async fn signup(
    api: &dyn AuthApi,
    identity: &mut IdentityStore,
    form: &SignupForm,
) -> ClientResult<UserInfo> {
    let response = signup_with_type(api, form, "user").await?;
    identity.login(SessionIdentity::Customer(response.user.clone()));
    Ok(response.user)
}

/// Admin signup: same endpoint with the admin user type, stored as an
/// admin identity
pub async fn admin_signup(
    api: &dyn AuthApi,
    identity: &mut IdentityStore,
    form: &SignupForm,
) -> ClientResult<AdminInfo> {
    let response = signup_with_type(api, form, "admin").await?;
    let admin = AdminInfo {
        id: None,
        name: Some(form.name.trim().to_string()),
        email: response.user.email.clone(),
        phone: Some(form.phone.clone()),
        role: response.user.role.clone(),
    };
    identity.login(SessionIdentity::Admin(admin.clone()));
    Ok(admin)
}

/// Admin login: validate, `POST /admin-login`, store the admin identity
pub async fn admin_login(
    api: &dyn AuthApi,
    identity: &mut IdentityStore,
    email: &str,
    password: &str,
) -> ClientResult<AdminInfo> {
    let errors = validate(login_rules(), &login_values(email, password));
    if !errors.is_empty() {
        return Err(ClientError::Validation(errors));
    }

    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
        user_type: "admin".to_string(),
    };
    let response = api.admin_login(&request).await?;
    identity.login(SessionIdentity::Admin(response.admin.clone()));
    Ok(response.admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySession;
    use async_trait::async_trait;
    use shared::client::{AdminLoginResponse, LoginResponse};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeAuth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthApi for FakeAuth {
        async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LoginResponse {
                message: "Login successful".into(),
                user: UserInfo {
                    email: request.email.clone(),
                    role: "user".into(),
                },
            })
        }

        async fn signup(&self, request: &SignupRequest) -> ClientResult<LoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LoginResponse {
                message: "Signup successful".into(),
                user: UserInfo {
                    email: request.email.clone(),
                    role: request.user_type.clone(),
                },
            })
        }

        async fn admin_login(&self, request: &LoginRequest) -> ClientResult<AdminLoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AdminLoginResponse {
                message: "Admin login successful".into(),
                admin: AdminInfo {
                    id: None,
                    name: None,
                    email: request.email.clone(),
                    phone: None,
                    role: "admin".into(),
                },
            })
        }
    }

    #[tokio::test]
    async fn login_stores_customer_identity() {
        let api = FakeAuth::default();
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));

        let user = login(&api, &mut identity, "ana@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert!(identity.customer().is_some());
    }

    #[tokio::test]
    async fn invalid_credentials_never_reach_the_network() {
        let api = FakeAuth::default();
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));

        let err = login(&api, &mut identity, "not-an-email", "12345")
            .await
            .unwrap_err();
        match err {
            ClientError::Validation(errors) => {
                assert!(errors.get("email").is_some());
                assert!(errors.get("password").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
        assert!(identity.current().is_none());
    }

    #[tokio::test]
    async fn signup_requires_matching_passwords() {
        let api = FakeAuth::default();
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));

        let form = SignupForm {
            name: "Ananya Rao".into(),
            email: "ana@example.com".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        let err = signup(&api, &mut identity, &form).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn admin_signup_sends_admin_type_and_stores_admin_identity() {
        let api = FakeAuth::default();
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));

        let form = SignupForm {
            name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        let admin = admin_signup(&api, &mut identity, &form).await.unwrap();

        // FakeAuth echoes the requested user_type back as the role
        assert_eq!(admin.role, "admin");
        assert_eq!(admin.name.as_deref(), Some("Ravi Kumar"));
        assert!(identity.admin().is_some());
        assert!(identity.customer().is_none());
    }

    #[tokio::test]
    async fn admin_login_stores_admin_identity() {
        let api = FakeAuth::default();
        let mut identity = IdentityStore::load(Arc::new(MemorySession::new()));

        admin_login(&api, &mut identity, "admin@example.com", "secret1")
            .await
            .unwrap();
        assert!(identity.admin().is_some());
        assert!(identity.customer().is_none());
    }
}
