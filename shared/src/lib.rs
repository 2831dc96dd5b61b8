//! Shared types for the mealhub platform
//!
//! Wire-level types exchanged with the catalog/order service: meal and
//! order records, auth DTOs, and server response shapes. Pure data, no I/O.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::meal::{Meal, MealForm, MealSnapshot};
pub use models::order::{Order, OrderLine, PaymentMethod, PaymentStatus};
pub use response::{ErrorBody, MessageResponse};
