// src/models/mod.rs

//! Contains data structures representing database entities.

pub mod meal;
pub mod order;
pub mod order_item;
pub mod user;

// Re-export the model structs for convenient access
pub use meal::Meal;
pub use order::{Order, OrderStatus};
pub use order_item::OrderItem;
pub use user::User;
