//! Data models for the meal-ordering domain

pub mod meal;
pub mod order;
pub mod user;

pub use meal::{ImageAsset, Meal, MealForm, MealMutation, MealSnapshot};
pub use order::{Order, OrderLine, OrderPlaced, OrderRecord, PaymentMethod, PaymentStatus};
pub use user::{AdminInfo, UserInfo};
