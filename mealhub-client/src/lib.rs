//! Mealhub Client - commerce session engine for the meal-ordering service
//!
//! Owns the client-side state with non-trivial invariants: the session-scoped
//! cart and identity stores, derived order totals, checkout validation, the
//! order submission workflow, and the typed surface of the remote
//! catalog/order API.

pub mod admin;
pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;

pub use admin::AdminCatalogManager;
pub use api::{AssistantApi, AuthApi, CatalogApi, OrderApi};
pub use cart::{CartStore, CartTotals, CartView, DELIVERY_FEE};
pub use catalog::{CatalogCache, MealFilter};
pub use checkout::{CheckoutForm, CheckoutWorkflow, ErrorSet, SubmitOutcome, SubmitState};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{CommerceSession, IdentityStore, SessionIdentity};
pub use storage::{MemorySession, SessionStore};

// Re-export shared types for convenience
pub use shared::models::{Meal, MealForm, MealSnapshot, Order, OrderLine};
