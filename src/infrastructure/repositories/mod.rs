pub mod trash_fs_repository;
pub mod trash_info_parser;

// Re-exportar para facilitar acceso
pub use trash_fs_repository::TrashFsRepository;
