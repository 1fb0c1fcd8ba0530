// src/api/http/mod.rs

mod auth;
mod creative;
mod handlers;
pub mod image_proxy;
mod router;

pub use auth::{list_users_handler, sign_in_handler};
pub use creative::{generate_handler, refine_handler};
pub use handlers::health_handler;
pub use image_proxy::download_image_handler;
pub use router::{api_router, create_router};
