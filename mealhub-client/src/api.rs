//! Typed API surface of the remote catalog/order service
//!
//! The engine's workflows depend on these traits rather than on the HTTP
//! client directly, so tests can substitute counting mocks and assert call
//! behavior (e.g. that a blocked submission issues zero order calls).

use async_trait::async_trait;

use crate::http::meal_multipart;
use crate::{ClientResult, HttpClient};
use shared::client::{
    AdminLoginResponse, AskReply, AskRequest, LoginRequest, LoginResponse, SearchRequest,
    SignupRequest,
};
use shared::models::{Meal, MealForm, MealMutation, Order, OrderPlaced, OrderRecord};
use shared::response::MessageResponse;

/// Catalog read and admin mutation operations
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /meals` - the full catalog
    async fn fetch_meals(&self) -> ClientResult<Vec<Meal>>;

    /// `GET /meals/{id}` - a single meal, for editing
    async fn get_meal(&self, id: &str) -> ClientResult<Meal>;

    /// `POST /search` - server-side free-text search
    async fn search_meals(&self, query: &str) -> ClientResult<Vec<Meal>>;

    /// `POST /meals` - create a meal (multipart)
    async fn create_meal(&self, form: &MealForm) -> ClientResult<MealMutation>;

    /// `PUT /meals/{id}` - update a meal (multipart)
    async fn update_meal(&self, id: &str, form: &MealForm) -> ClientResult<MealMutation>;

    /// `DELETE /meals/{id}`
    async fn delete_meal(&self, id: &str) -> ClientResult<MessageResponse>;
}

/// Order placement and listing
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// `POST /orders` - place an order
    async fn create_order(&self, order: &Order) -> ClientResult<OrderPlaced>;

    /// `GET /orders` - all placed orders
    async fn list_orders(&self) -> ClientResult<Vec<OrderRecord>>;
}

/// Login and signup
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// `POST /signup`
    async fn signup(&self, request: &SignupRequest) -> ClientResult<LoginResponse>;

    /// `POST /admin-login`
    async fn admin_login(&self, request: &LoginRequest) -> ClientResult<AdminLoginResponse>;
}

/// Food chat assistant
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// `POST /ask` - one question, one reply
    async fn ask(&self, message: &str) -> ClientResult<String>;
}

#[async_trait]
impl CatalogApi for HttpClient {
    async fn fetch_meals(&self) -> ClientResult<Vec<Meal>> {
        self.get("meals").await
    }

    async fn get_meal(&self, id: &str) -> ClientResult<Meal> {
        self.get(&format!("meals/{id}")).await
    }

    async fn search_meals(&self, query: &str) -> ClientResult<Vec<Meal>> {
        let request = SearchRequest {
            query: query.to_string(),
        };
        self.post("search", &request).await
    }

    async fn create_meal(&self, form: &MealForm) -> ClientResult<MealMutation> {
        self.post_multipart("meals", meal_multipart(form)).await
    }

    async fn update_meal(&self, id: &str, form: &MealForm) -> ClientResult<MealMutation> {
        self.put_multipart(&format!("meals/{id}"), meal_multipart(form))
            .await
    }

    async fn delete_meal(&self, id: &str) -> ClientResult<MessageResponse> {
        self.delete(&format!("meals/{id}")).await
    }
}

#[async_trait]
impl OrderApi for HttpClient {
    async fn create_order(&self, order: &Order) -> ClientResult<OrderPlaced> {
        self.post("orders", order).await
    }

    async fn list_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.get("orders").await
    }
}

#[async_trait]
impl AuthApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.post("login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> ClientResult<LoginResponse> {
        self.post("signup", request).await
    }

    async fn admin_login(&self, request: &LoginRequest) -> ClientResult<AdminLoginResponse> {
        self.post("admin-login", request).await
    }
}

#[async_trait]
impl AssistantApi for HttpClient {
    async fn ask(&self, message: &str) -> ClientResult<String> {
        let request = AskRequest {
            message: message.to_string(),
        };
        let reply: AskReply = self.post("ask", &request).await?;
        Ok(reply.reply)
    }
}
