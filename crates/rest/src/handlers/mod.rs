//! HTTP request handlers.
//!
//! One module per resource, mirroring the route layout:
//!
//! - [`auth`] - Registration, login, and account management
//! - [`items`] - Catalog items (scoped reads, image upload)
//! - [`orders`] - Orders (scoped reads, newest first)
//! - [`health`] - Liveness probe

pub mod auth;
pub mod health;
pub mod items;
pub mod orders;

pub use auth::{delete_account_handler, login_handler, register_handler, update_account_handler};
pub use health::health_handler;
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use orders::{create_order_handler, list_orders_handler};
