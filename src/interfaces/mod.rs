pub mod api;

pub use api::routes::{create_api_routes, create_app};
