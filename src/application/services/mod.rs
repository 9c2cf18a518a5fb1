pub mod trash_service;


// Re-exportar para facilitar acceso
pub use trash_service::TrashService;
