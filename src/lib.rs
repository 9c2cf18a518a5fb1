// Exportar los módulos principales del proyecto
pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Re-exportaciones públicas comunes
pub use application::services::trash_service::TrashService;
pub use common::config::AppConfig;
pub use common::di::{AppServiceFactory, AppState};
pub use domain::services::size_service::{format_size, item_size};
pub use domain::services::trash_location::TrashLocation;
pub use infrastructure::repositories::trash_fs_repository::TrashFsRepository;
pub use infrastructure::repositories::trash_info_parser::parse_trash_info;
pub use interfaces::create_app;
